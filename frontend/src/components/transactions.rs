//! Transfer history

use leptos::*;
use prime::TransferRecord;

use crate::config::explorer_address_url;
use crate::context::use_transactions;

#[component]
fn TransactionCard(record: TransferRecord) -> impl IntoView {
    let TransferRecord { address_from, address_to, amount, message, keyword, timestamp, .. } = record;
    let message = (!message.is_empty())
        .then(|| view! { <p class="message">"Message: " {message}</p> });

    view! {
        <div class="transaction-card">
            <a href=explorer_address_url(address_from.as_str()) target="_blank">
                "From: " {address_from.short()}
            </a>
            <a href=explorer_address_url(address_to.as_str()) target="_blank">
                "To: " {address_to.short()}
            </a>
            <p class="amount">"Amount: " {amount} " ETH"</p>
            {message}
            <span class="keyword">{keyword}</span>
            <p class="timestamp">{timestamp}</p>
        </div>
    }
}

#[component]
pub fn Transactions() -> impl IntoView {
    let state = use_transactions().state;

    view! {
        <section class="transactions">
            <h3>
                {move || if state.with(|s| s.current_account.is_some()) {
                    "Latest Transactions"
                } else {
                    "Connect your account to see the latest transactions"
                }}
            </h3>
            <p class="transaction-count">
                {move || state.with(|s| s.transaction_count)
                    .map(|count| format!("{} transfers recorded", count))
                    .unwrap_or_default()}
            </p>
            <div class="transaction-list">
                <For
                    each=move || state.with(|s| {
                        s.transactions.iter().cloned().enumerate().rev().collect::<Vec<_>>()
                    })
                    key=|(idx, record)| (*idx, record.timestamp.clone(), record.message.clone())
                    children=|(_, record)| view! { <TransactionCard record=record/> }
                />
            </div>
        </section>
    }
}

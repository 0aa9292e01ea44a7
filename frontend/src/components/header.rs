use leptos::*;

use crate::config::{explorer_address_url, APP_NAME, LOGO_PATH};
use crate::context::use_transactions;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_transactions();
    let state = ctx.state;

    let on_wallet_click = move |_| {
        if state.with(|s| s.current_account.is_none()) {
            log::info!("🔑 Attempting to connect wallet...");
            ctx.connect_wallet();
        }
    };

    view! {
        <header>
            <div class="header-left">
                <img src=LOGO_PATH alt="logo" class="logo-img"/>
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                {move || match state.with(|s| s.current_account.clone()) {
                    Some(account) => view! {
                        <a
                            class="wallet-status connected"
                            href=explorer_address_url(account.as_str())
                            target="_blank"
                        >
                            <span class="wallet-dot connected"></span>
                            <span>{account.short()}</span>
                        </a>
                    }.into_view(),
                    None => view! {
                        <button class="wallet-status" on:click=on_wallet_click.clone()>
                            <span class="wallet-dot"></span>
                            <span>"Connect Wallet"</span>
                        </button>
                    }.into_view(),
                }}
            </div>
        </header>
    }
}

//! Shared transaction context for the component tree.
//!
//! Mirrors the [`TransactionStore`](prime::TransactionStore) into a Leptos
//! signal and exposes the user intents the views trigger.

use std::rc::Rc;

use leptos::*;
use prime::eth::{Eip1193Contract, Eip1193Wallet};
use prime::{
    ConnectOutcome, FormField, SubmitOutcome, TransactionOrchestrator, TransactionState,
    TransferError, CONTRACT_ADDRESS,
};

use crate::services::{AlertNotifier, InjectedProvider, LocalStorageCache};

/// Orchestrator wired to the injected browser wallet.
pub type BrowserOrchestrator =
    TransactionOrchestrator<Eip1193Wallet<InjectedProvider>, Eip1193Contract<InjectedProvider>>;

#[derive(Clone)]
pub struct TransactionContext {
    /// Latest store snapshot.
    pub state: ReadSignal<TransactionState>,
    /// Last failure shown under the send form.
    pub last_error: RwSignal<Option<String>>,
    orchestrator: Rc<BrowserOrchestrator>,
}

impl TransactionContext {
    /// Detect the wallet, build the orchestrator and mirror its store.
    pub fn new() -> Self {
        let provider = Rc::new(InjectedProvider::detect());
        let orchestrator = Rc::new(TransactionOrchestrator::new(
            Eip1193Wallet::new(provider.clone()),
            Eip1193Contract::new(provider.clone(), CONTRACT_ADDRESS),
            LocalStorageCache,
            AlertNotifier,
        ));

        let (state, set_state) = create_signal(orchestrator.store().snapshot());
        orchestrator
            .store()
            .subscribe(move |snapshot| set_state.set(snapshot.clone()));

        let listener = orchestrator.clone();
        provider.on_accounts_changed(move |accounts| {
            let orchestrator = listener.clone();
            spawn_local(async move { orchestrator.accounts_changed(accounts).await });
        });

        Self {
            state,
            last_error: create_rw_signal(None),
            orchestrator,
        }
    }

    /// Run the page-load sequence in the background.
    pub fn start(&self) {
        let orchestrator = self.orchestrator.clone();
        spawn_local(async move { orchestrator.startup().await });
    }

    pub fn connect_wallet(&self) {
        let orchestrator = self.orchestrator.clone();
        let last_error = self.last_error;
        spawn_local(async move {
            match orchestrator.connect().await {
                Ok(ConnectOutcome::NoAccounts) => {
                    last_error.set(Some("No accounts found".to_string()))
                }
                Ok(_) => last_error.set(None),
                Err(e) if e.is_user_rejection() => log::info!("Connection request dismissed"),
                Err(e) => last_error.set(Some(e.to_string())),
            }
        });
    }

    pub fn send_transaction(&self) {
        let orchestrator = self.orchestrator.clone();
        let last_error = self.last_error;
        spawn_local(async move {
            match orchestrator.submit_transfer().await {
                Ok(SubmitOutcome::Confirmed { record_hash, .. }) => {
                    log::info!("🎉 Transfer recorded: {}", record_hash);
                    last_error.set(None);
                }
                Ok(SubmitOutcome::WalletMissing) => {}
                Err(TransferError::Busy) => log::info!("Transfer already in progress"),
                Err(e) if e.is_user_rejection() => {
                    log::info!("Transfer rejected in wallet");
                    last_error.set(None);
                }
                Err(e) => last_error.set(Some(e.to_string())),
            }
        });
    }

    /// Write one form field as the user types.
    pub fn change_handler(&self, field: FormField, value: String) {
        self.orchestrator.set_field(field, value);
    }
}

/// The context provided by the page root.
pub fn use_transactions() -> TransactionContext {
    expect_context::<TransactionContext>()
}

//! Transfer lifecycle orchestration.
//!
//! [`TransactionOrchestrator`] drives the wallet gateway and the contract
//! client through five flows and mirrors every outcome into the
//! [`TransactionStore`]:
//!
//! | Flow                | Entry point                                         |
//! |---------------------|-----------------------------------------------------|
//! | Startup             | [`startup`](TransactionOrchestrator::startup)       |
//! | History load        | [`load_history`](TransactionOrchestrator::load_history) |
//! | Connect             | [`connect`](TransactionOrchestrator::connect)       |
//! | Submit transfer     | [`submit_transfer`](TransactionOrchestrator::submit_transfer) |
//! | Refresh             | [`refresh`](TransactionOrchestrator::refresh)       |
//!
//! # Submit ordering
//!
//! ```text
//! parse amount ─▶ raw transfer (wallet) ─▶ record (contract) ─▶ loading=true
//!                                                                   │
//!                          refresh ◀─ loading=false ◀─ confirmation ◀┘
//! ```
//!
//! The raw transfer and the contract record are two separate transactions.
//! If the second one fails or reverts, the ether has already moved and no
//! record exists. Nothing here compensates for that. Recipient and amount
//! are validated before the first one is sent.

use std::cell::Cell;
use std::rc::Rc;

use crate::cache::CountCache;
use crate::error::{ChainResult, TransferError, TransferResult, WalletError};
use crate::gateway::{ContractClient, TransferRequest, WalletGateway};
use crate::models::{parse_amount, parse_recipient, Account, FormField, TransferRecord};
use crate::notice::{Notifier, WALLET_MISSING_NOTICE};
use crate::store::TransactionStore;

/// Result of the connect flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The first authorized account is now current.
    Connected(Account),
    /// The wallet answered with no accounts.
    NoAccounts,
    /// No wallet extension; the user has been notified.
    WalletMissing,
}

/// Result of the submit flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both transactions went through and the contract record is mined.
    Confirmed {
        /// Hash of the raw ether transfer.
        transfer_hash: String,
        /// Hash of the contract record.
        record_hash: String,
        /// On-chain count after the refresh, if it could be read.
        transaction_count: Option<u64>,
    },
    /// No wallet extension; the user has been notified.
    WalletMissing,
}

/// Coordinates wallet and contract calls and keeps the store in sync.
pub struct TransactionOrchestrator<W, C> {
    wallet: W,
    contract: C,
    cache: Box<dyn CountCache>,
    notifier: Box<dyn Notifier>,
    store: Rc<TransactionStore>,
    submitting: Cell<bool>,
}

impl<W, C> TransactionOrchestrator<W, C>
where
    W: WalletGateway,
    C: ContractClient,
{
    /// Create an orchestrator. The store is seeded from the cached count.
    pub fn new(
        wallet: W,
        contract: C,
        cache: impl CountCache + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let store = Rc::new(TransactionStore::with_count(cache.load()));
        Self {
            wallet,
            contract,
            cache: Box::new(cache),
            notifier: Box::new(notifier),
            store,
            submitting: Cell::new(false),
        }
    }

    pub fn store(&self) -> &Rc<TransactionStore> {
        &self.store
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }

    /// Typed form update, forwarded to the store.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.store.set_field(field, value);
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Detect an authorized account, load its history and prime the count.
    ///
    /// Without a wallet extension the user gets one notice and nothing
    /// else runs. Running it again replaces state rather than appending.
    pub async fn startup(&self) {
        if !self.ensure_wallet() {
            return;
        }
        futures::join!(self.detect_account(), self.prime_count());
    }

    async fn detect_account(&self) {
        let accounts = match self.wallet.list_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                log::error!("❌ Account discovery failed: {}", e);
                return;
            }
        };

        match accounts.into_iter().next() {
            Some(account) => {
                log::info!("🔑 Found authorized account {}", account);
                self.store.set_current_account(Some(account));
                // Failure is logged inside and leaves history as it was.
                let _ = self.load_history().await;
            }
            None => log::info!("No wallet accounts found"),
        }
    }

    /// Read the on-chain count, mirror it into the store and the cache.
    pub async fn prime_count(&self) -> Option<u64> {
        match self.contract.transfer_count().await {
            Ok(count) => {
                self.remember_count(count);
                Some(count)
            }
            Err(e) => {
                log::error!("❌ Could not read transfer count: {}", e);
                None
            }
        }
    }

    fn remember_count(&self, count: u64) {
        self.store.set_transaction_count(count);
        if let Err(e) = self.cache.store(count) {
            log::warn!("Could not persist transfer count: {}", e);
        }
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Replace the history with every transfer the contract holds.
    ///
    /// On failure the error is logged and the previous history stays.
    pub async fn load_history(&self) -> ChainResult<usize> {
        let raw = self.contract.list_transfers().await.map_err(|e| {
            log::error!("❌ Could not load transfers: {}", e);
            e
        })?;

        let records: Vec<TransferRecord> = raw.into_iter().map(TransferRecord::from).collect();
        let count = records.len();
        self.store.set_transactions(records);

        log::info!("📜 Loaded {} transfers", count);
        Ok(count)
    }

    /// Reload history and the count from chain, keeping the form and account.
    pub async fn refresh(&self) -> Option<u64> {
        let (_, count) = futures::join!(self.load_history(), self.prime_count());
        count
    }

    // =========================================================================
    // Connect
    // =========================================================================

    /// Ask the wallet for accounts and make the first one current.
    pub async fn connect(&self) -> TransferResult<ConnectOutcome> {
        if !self.ensure_wallet() {
            return Ok(ConnectOutcome::WalletMissing);
        }

        log::info!("🔌 Requesting wallet accounts...");
        let accounts = self.wallet.request_accounts().await.map_err(|e| {
            log::warn!("Wallet connection failed: {}", e);
            TransferError::from(e)
        })?;

        match accounts.into_iter().next() {
            Some(account) => {
                log::info!("✅ Wallet connected: {}", account);
                self.store.set_current_account(Some(account.clone()));
                Ok(ConnectOutcome::Connected(account))
            }
            None => {
                log::info!("No wallet found");
                Ok(ConnectOutcome::NoAccounts)
            }
        }
    }

    /// React to the wallet switching or revoking accounts.
    pub async fn accounts_changed(&self, accounts: Vec<Account>) {
        match accounts.into_iter().next() {
            Some(account) => {
                if self.store.current_account().as_ref() == Some(&account) {
                    return;
                }
                log::info!("🔁 Active account changed to {}", account);
                self.store.set_current_account(Some(account));
                let _ = self.load_history().await;
            }
            None => {
                log::info!("🔌 Wallet disconnected");
                self.store.set_current_account(None);
                self.store.set_transactions(Vec::new());
            }
        }
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Send the ether in the form, record it on chain and wait for the record.
    ///
    /// Only one submit runs at a time; a second call while one is in flight
    /// returns [`TransferError::Busy`] without touching the wallet. The form
    /// is only cleared after confirmation; on any failure it is left as
    /// typed so the user can retry.
    pub async fn submit_transfer(&self) -> TransferResult<SubmitOutcome> {
        if !self.ensure_wallet() {
            return Ok(SubmitOutcome::WalletMissing);
        }
        let _in_flight = InFlight::acquire(&self.submitting).ok_or(TransferError::Busy)?;

        let form = self.store.form();
        if let Some(field) = form.first_missing() {
            return Err(TransferError::MissingField(field));
        }
        let from = self.store.current_account().ok_or(TransferError::NoAccount)?;
        let value = parse_amount(&form.amount)?;
        let to = parse_recipient(&form.address_to)?;

        log::info!("📤 Sending {} ETH to {}", form.amount.trim(), to);
        let transfer = self
            .wallet
            .submit_raw_transfer(TransferRequest::new(from, to.clone(), value))
            .await
            .map_err(|e| log_failure("Transfer", e.into()))?;

        let pending = self
            .contract
            .append_transfer(&to, value, &form.message, &form.keyword)
            .await
            .map_err(|e| log_failure("Recording transfer", e.into()))?;
        let record_hash = pending.tx_hash().to_string();

        self.store.set_loading(true);
        log::info!("⏳ Waiting for {} to be mined...", record_hash);
        let confirmed = pending.confirm().await;
        self.store.set_loading(false);
        confirmed.map_err(|e| log_failure("Confirmation", e.into()))?;

        log::info!("✅ Transfer recorded in {}", record_hash);
        let transaction_count = self.refresh().await;
        for field in FormField::ALL {
            self.store.set_field(field, "");
        }

        Ok(SubmitOutcome::Confirmed {
            transfer_hash: transfer.0,
            record_hash,
            transaction_count,
        })
    }

    fn ensure_wallet(&self) -> bool {
        if self.wallet.has_provider() {
            return true;
        }
        log::warn!("{}", WalletError::Unavailable);
        self.notifier.blocking_notice(WALLET_MISSING_NOTICE);
        false
    }
}

/// Marks a submit as in flight until dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn log_failure(step: &str, err: TransferError) -> TransferError {
    if err.is_user_rejection() {
        log::warn!("{} cancelled: {}", step, err);
    } else {
        log::error!("❌ {} failed: {}", step, err);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCountCache;
    use crate::error::{ChainError, WalletResult};
    use crate::gateway::{PendingConfirmation, TxHash};
    use crate::models::RawTransfer;
    use crate::notice::LogNotifier;
    use alloy_primitives::U256;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct StaticWallet(Vec<Account>);

    #[async_trait(?Send)]
    impl WalletGateway for StaticWallet {
        fn has_provider(&self) -> bool {
            true
        }

        async fn list_accounts(&self) -> WalletResult<Vec<Account>> {
            Ok(self.0.clone())
        }

        async fn request_accounts(&self) -> WalletResult<Vec<Account>> {
            Ok(self.0.clone())
        }

        async fn submit_raw_transfer(&self, _: TransferRequest) -> WalletResult<TxHash> {
            Ok(TxHash("0x01".into()))
        }
    }

    struct Done;

    #[async_trait(?Send)]
    impl PendingConfirmation for Done {
        fn tx_hash(&self) -> &str {
            "0x02"
        }

        async fn confirm(self: Box<Self>) -> ChainResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct ListContract {
        transfers: RefCell<Vec<RawTransfer>>,
        fail_reads: bool,
    }

    #[async_trait(?Send)]
    impl ContractClient for ListContract {
        async fn list_transfers(&self) -> ChainResult<Vec<RawTransfer>> {
            if self.fail_reads {
                return Err(ChainError::InvalidResponse("boom".into()));
            }
            Ok(self.transfers.borrow().clone())
        }

        async fn transfer_count(&self) -> ChainResult<u64> {
            Ok(self.transfers.borrow().len() as u64)
        }

        async fn append_transfer(
            &self,
            _: &Account,
            _: U256,
            _: &str,
            _: &str,
        ) -> ChainResult<Box<dyn PendingConfirmation>> {
            Ok(Box::new(Done))
        }
    }

    fn transfer(keyword: &str) -> RawTransfer {
        RawTransfer {
            sender: "0xaaaa".into(),
            receiver: "0xbbbb".into(),
            amount: U256::from(1_000_000_000_000_000_000u128),
            message: "hi".into(),
            timestamp: 1_650_000_000,
            keyword: keyword.into(),
        }
    }

    #[tokio::test]
    async fn test_load_history_replaces_previous_list() {
        let contract = ListContract::default();
        contract.transfers.borrow_mut().push(transfer("one"));
        let orchestrator = TransactionOrchestrator::new(
            StaticWallet(vec![]),
            contract,
            MemoryCountCache::default(),
            LogNotifier,
        );

        assert_eq!(orchestrator.load_history().await, Ok(1));
        orchestrator.contract().transfers.borrow_mut().push(transfer("two"));
        assert_eq!(orchestrator.load_history().await, Ok(2));

        let keywords: Vec<String> = orchestrator
            .store()
            .transactions()
            .into_iter()
            .map(|t| t.keyword)
            .collect();
        assert_eq!(keywords, vec!["one", "two"]);
        assert_eq!(orchestrator.store().transactions()[0].amount, 1.0);
    }

    #[tokio::test]
    async fn test_load_history_failure_keeps_history() {
        let orchestrator = TransactionOrchestrator::new(
            StaticWallet(vec![]),
            ListContract { fail_reads: true, ..Default::default() },
            MemoryCountCache::default(),
            LogNotifier,
        );
        orchestrator.store().set_transactions(vec![TransferRecord::from(transfer("kept"))]);

        assert!(orchestrator.load_history().await.is_err());
        assert_eq!(orchestrator.store().transactions()[0].keyword, "kept");
    }

    #[tokio::test]
    async fn test_accounts_changed() {
        let contract = ListContract::default();
        contract.transfers.borrow_mut().push(transfer("one"));
        let orchestrator = TransactionOrchestrator::new(
            StaticWallet(vec![]),
            contract,
            MemoryCountCache::default(),
            LogNotifier,
        );

        orchestrator.accounts_changed(vec![Account::new("0xcccc")]).await;
        assert_eq!(orchestrator.store().current_account(), Some(Account::new("0xcccc")));
        assert_eq!(orchestrator.store().transactions().len(), 1);

        orchestrator.accounts_changed(vec![]).await;
        assert_eq!(orchestrator.store().current_account(), None);
        assert!(orchestrator.store().transactions().is_empty());
    }

    #[tokio::test]
    async fn test_connect_with_no_accounts_is_noop() {
        let orchestrator = TransactionOrchestrator::new(
            StaticWallet(vec![]),
            ListContract::default(),
            MemoryCountCache::default(),
            LogNotifier,
        );

        assert_eq!(orchestrator.connect().await, Ok(ConnectOutcome::NoAccounts));
        assert_eq!(orchestrator.store().current_account(), None);
    }

    #[tokio::test]
    async fn test_submit_requires_complete_form() {
        let orchestrator = TransactionOrchestrator::new(
            StaticWallet(vec![Account::new("0xaaaa")]),
            ListContract::default(),
            MemoryCountCache::default(),
            LogNotifier,
        );
        orchestrator.connect().await.unwrap();
        orchestrator.set_field(FormField::AddressTo, "0xbbbb");
        orchestrator.set_field(FormField::Amount, "0.1");

        assert_eq!(
            orchestrator.submit_transfer().await,
            Err(TransferError::MissingField(FormField::Keyword))
        );
    }

    #[tokio::test]
    async fn test_submit_requires_account() {
        let orchestrator = TransactionOrchestrator::new(
            StaticWallet(vec![]),
            ListContract::default(),
            MemoryCountCache::default(),
            LogNotifier,
        );
        for field in FormField::ALL {
            orchestrator.set_field(field, "1");
        }

        assert_eq!(orchestrator.submit_transfer().await, Err(TransferError::NoAccount));
    }
}

//! UI-facing transfer state.
//!
//! [`TransactionStore`] owns one [`TransactionState`] behind a `RefCell`
//! and notifies subscribers with a snapshot after every mutation. Borrows
//! never outlive a single method call, so subscribers may read the store
//! again from their callback.

use std::cell::RefCell;

use crate::models::{Account, FormField, FormFields, TransferRecord};

/// Snapshot of everything the views render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionState {
    pub current_account: Option<Account>,
    pub is_loading: bool,
    pub transactions: Vec<TransferRecord>,
    pub form: FormFields,
    pub transaction_count: Option<u64>,
}

type Subscriber = Box<dyn Fn(&TransactionState)>;

/// Single-threaded state container with change notification.
#[derive(Default)]
pub struct TransactionStore {
    state: RefCell<TransactionState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a cached transfer count.
    pub fn with_count(count: Option<u64>) -> Self {
        let store = Self::new();
        store.state.borrow_mut().transaction_count = count;
        store
    }

    /// Register a callback run after every change.
    pub fn subscribe(&self, subscriber: impl Fn(&TransactionState) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    pub fn snapshot(&self) -> TransactionState {
        self.state.borrow().clone()
    }

    pub fn current_account(&self) -> Option<Account> {
        self.state.borrow().current_account.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn transactions(&self) -> Vec<TransferRecord> {
        self.state.borrow().transactions.clone()
    }

    pub fn form(&self) -> FormFields {
        self.state.borrow().form.clone()
    }

    pub fn transaction_count(&self) -> Option<u64> {
        self.state.borrow().transaction_count
    }

    pub fn set_current_account(&self, account: Option<Account>) {
        self.update(|state| state.current_account = account);
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|state| state.is_loading = loading);
    }

    /// Replace the whole history in one step.
    pub fn set_transactions(&self, transactions: Vec<TransferRecord>) {
        self.update(|state| state.transactions = transactions);
    }

    pub fn set_transaction_count(&self, count: u64) {
        self.update(|state| state.transaction_count = Some(count));
    }

    /// Replace exactly one form field.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.update(|state| state.form.set(field, value));
    }

    fn update(&self, mutate: impl FnOnce(&mut TransactionState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&snapshot);
        }
    }
}

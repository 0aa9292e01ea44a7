//! Scripted EIP-1193 provider for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::transport::Eip1193;
use crate::error::ProviderError;

/// Answers each method from a queue of canned responses and records calls.
pub struct ScriptedProvider {
    available: bool,
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ProviderError>>>>,
    calls: RefCell<Vec<(String, Value)>>,
    waits: Cell<usize>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            available: true,
            responses: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            waits: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self { available: false, ..Self::new() }
    }

    pub fn respond(&self, method: &str, value: Value) {
        self.push(method, Ok(value));
    }

    pub fn fail(&self, method: &str, code: i64, message: &str) {
        self.push(method, Err(ProviderError::new(code, message)));
    }

    fn push(&self, method: &str, response: Result<Value, ProviderError>) {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn waits(&self) -> usize {
        self.waits.get()
    }
}

#[async_trait(?Send)]
impl Eip1193 for ScriptedProvider {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls.borrow_mut().push((method.to_string(), params));
        self.responses
            .borrow_mut()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(ProviderError::new(-32601, format!("no scripted response for {}", method))))
    }

    async fn wait(&self, _: Duration) {
        self.waits.set(self.waits.get() + 1);
    }
}

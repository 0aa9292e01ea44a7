//! Binding to the wallet extension's injected `window.ethereum` object.
//!
//! Every wallet and contract call goes through `ethereum.request(...)`;
//! the injected object signs, submits and talks to the node.

use std::time::Duration;

use async_trait::async_trait;
use prime::eth::Eip1193;
use prime::{Account, ProviderError};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// EIP-1193 code for "the provider is disconnected from all chains".
const DISCONNECTED_CODE: i64 = 4900;

/// The injected provider, if the extension is installed.
pub struct InjectedProvider {
    ethereum: Option<JsValue>,
}

impl InjectedProvider {
    /// Look up `window.ethereum` once.
    pub fn detect() -> Self {
        let ethereum = web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok())
            .filter(|value| !value.is_null() && !value.is_undefined());

        if ethereum.is_some() {
            log::info!("✅ Ethereum provider detected");
        } else {
            log::warn!("⚠️  No Ethereum provider found");
        }

        Self { ethereum }
    }

    /// Call `callback` whenever the wallet switches or revokes accounts.
    pub fn on_accounts_changed(&self, callback: impl Fn(Vec<Account>) + 'static) {
        let Some(ethereum) = &self.ethereum else {
            return;
        };
        let on = match js_sys::Reflect::get(ethereum, &JsValue::from_str("on"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        {
            Some(on) => on,
            None => {
                log::warn!("Provider has no event API, account changes will not be tracked");
                return;
            }
        };

        let listener = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            let accounts = js_sys::Array::from(&accounts)
                .iter()
                .filter_map(|value| value.as_string())
                .map(Account::new)
                .collect();
            callback(accounts);
        });

        if let Err(e) = on.call2(ethereum, &JsValue::from_str("accountsChanged"), listener.as_ref()) {
            log::error!("Failed to subscribe to accountsChanged: {:?}", e);
        }
        // The listener lives as long as the page.
        listener.forget();
    }

    fn request_fn(ethereum: &JsValue) -> Result<js_sys::Function, ProviderError> {
        js_sys::Reflect::get(ethereum, &JsValue::from_str("request"))
            .map_err(js_error)?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| ProviderError::transport("ethereum.request is not a function"))
    }
}

/// Convert a rejected promise value into a provider error.
fn js_error(err: JsValue) -> ProviderError {
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64)
        .unwrap_or(-32603);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string());
    ProviderError::new(code, message)
}

#[async_trait(?Send)]
impl Eip1193 for InjectedProvider {
    fn is_available(&self) -> bool {
        self.ethereum.is_some()
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let ethereum = self
            .ethereum
            .as_ref()
            .ok_or_else(|| ProviderError::new(DISCONNECTED_CODE, "No Ethereum provider"))?;
        let request = Self::request_fn(ethereum)?;

        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::transport(format!("Failed to encode params: {}", e)))?;
        let args = js_sys::Object::new();
        js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(js_error)?;
        js_sys::Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(js_error)?;

        let promise = request
            .call1(ethereum, &args)
            .map_err(js_error)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| ProviderError::transport("ethereum.request did not return a promise"))?;

        let result = JsFuture::from(promise).await.map_err(js_error)?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderError::transport(format!("Failed to decode result: {}", e)))
    }

    async fn wait(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

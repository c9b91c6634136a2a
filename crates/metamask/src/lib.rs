//! Wrapper around the EIP-1193 provider object MetaMask injects at
//! `window.ethereum`, exposed to the rest of the app through the
//! `minnow-sdk` [`Provider`] trait. All access to the injected object is
//! dynamic, so nothing here assumes a particular wallet build.

mod error;

pub use error::Error;

use std::str::FromStr;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use send_wrapper::SendWrapper;
use serde::Serialize;
use tracing::debug;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys;
use web_sys::wasm_bindgen::{JsCast, JsValue};

use minnow_sdk::provider::{CallRequest, Provider, ProviderError, Receipt, TransactionRequest};
use minnow_sdk::types::{Address, TxHash};

/// Receipt polling interval, matching the Sepolia block cadence closely
/// enough that a settled transaction is seen within one or two polls.
const POLL_INTERVAL_MS: u32 = 4_000;

#[derive(Clone, Debug)]
pub struct MetaMask {
    inner: SendWrapper<js_sys::Object>,
}

impl MetaMask {
    /// True when a provider object is injected in this window.
    pub fn is_available() -> bool {
        injected_provider().is_some()
    }

    pub fn new() -> Result<Self, Error> {
        injected_provider()
            .map(|inner| Self {
                inner: SendWrapper::new(inner),
            })
            .ok_or(Error::MetaMaskUnavailable)
    }

    /// One EIP-1193 `request({ method, params })` round trip.
    async fn request(&self, method: &str, params: JsValue) -> Result<JsValue, Error> {
        let args = js_sys::Object::new();
        js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))?;
        js_sys::Reflect::set(&args, &JsValue::from_str("params"), &params)?;

        let request_fn = js_sys::Reflect::get(&self.inner, &JsValue::from_str("request"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| Error::generic("ethereum.request is not a function"))?;

        let promise = request_fn
            .call1(&self.inner, &args)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| Error::generic("ethereum.request did not return a Promise"))?;

        SendWrapper::new(JsFuture::from(promise))
            .await
            .map_err(Error::from)
    }

    async fn request_string(&self, method: &str, params: JsValue) -> Result<String, Error> {
        self.request(method, params)
            .await?
            .as_string()
            .ok_or_else(|| Error::generic(format!("{method} returned a non-string")))
    }
}

fn injected_provider() -> Option<js_sys::Object> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
        .ok()?
        .dyn_into::<js_sys::Object>()
        .ok()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParam {
    chain_id: String,
}

#[derive(Serialize)]
struct CallParam {
    to: String,
    data: String,
}

#[derive(Serialize)]
struct TransactionParam {
    from: String,
    to: String,
    data: String,
    value: String,
}

#[async_trait(?Send)]
impl Provider for MetaMask {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let value = self
            .request("eth_requestAccounts", js_sys::Array::new().into())
            .await?;
        let accounts: Vec<String> = serde_wasm_bindgen::from_value(value).map_err(Error::from)?;
        accounts
            .iter()
            .map(|text| Address::from_str(text).map_err(ProviderError::other))
            .collect()
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let text = self
            .request_string("eth_chainId", js_sys::Array::new().into())
            .await?;
        parse_quantity(&text)
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        let param = SwitchChainParam {
            chain_id: format!("0x{chain_id:x}"),
        };
        let params = js_sys::Array::of1(&serde_wasm_bindgen::to_value(&param).map_err(Error::from)?);
        self.request("wallet_switchEthereumChain", params.into())
            .await?;
        Ok(())
    }

    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, ProviderError> {
        let param = CallParam {
            to: request.to.to_hex(),
            data: encode_hex(&request.data),
        };
        let params = js_sys::Array::of2(
            &serde_wasm_bindgen::to_value(&param).map_err(Error::from)?,
            &JsValue::from_str("latest"),
        );
        let text = self.request_string("eth_call", params.into()).await?;
        decode_hex(&text).map_err(Into::into)
    }

    async fn send_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<TxHash, ProviderError> {
        let param = TransactionParam {
            from: request.from.to_hex(),
            to: request.to.to_hex(),
            data: encode_hex(&request.data),
            value: format!("0x{:x}", request.value),
        };
        let params = js_sys::Array::of1(&serde_wasm_bindgen::to_value(&param).map_err(Error::from)?);
        let hash = self
            .request_string("eth_sendTransaction", params.into())
            .await?;
        Ok(TxHash(hash))
    }

    async fn wait_for_transaction(&self, tx_hash: &TxHash) -> Result<Receipt, ProviderError> {
        loop {
            let params = js_sys::Array::of1(&JsValue::from_str(&tx_hash.0));
            let receipt = self
                .request("eth_getTransactionReceipt", params.into())
                .await?;

            if receipt.is_null() || receipt.is_undefined() {
                debug!("no receipt for {tx_hash} yet, polling again");
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                continue;
            }

            let status = js_sys::Reflect::get(&receipt, &JsValue::from_str("status"))
                .map_err(Error::from)?;
            // pre-Byzantium nodes omit the field; treat that as success
            let ok = status
                .as_string()
                .map(|text| text == "0x1")
                .unwrap_or(true);

            return Ok(Receipt {
                tx_hash: tx_hash.clone(),
                ok,
            });
        }
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

fn decode_hex(text: &str) -> Result<Vec<u8>, Error> {
    let hex = text.strip_prefix("0x").unwrap_or(text);
    if hex.len() % 2 != 0 {
        return Err(Error::generic("odd-length hex in response"));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::generic("non-hex data in response"))
        })
        .collect()
}

fn parse_quantity(text: &str) -> Result<u64, ProviderError> {
    let hex = text
        .strip_prefix("0x")
        .ok_or_else(|| ProviderError::other(format!("malformed quantity: {text}")))?;
    u64::from_str_radix(hex, 16)
        .map_err(|_| ProviderError::other(format!("malformed quantity: {text}")))
}

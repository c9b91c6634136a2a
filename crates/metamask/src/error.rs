use minnow_sdk::provider::ProviderError;
use serde::{Deserialize, Serialize};
use web_sys::{js_sys, wasm_bindgen};

#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("MetaMask is unavailable!")]
    MetaMaskUnavailable,

    /// EIP-1193 provider rejection with its numeric code.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    #[error("{0}")]
    Js(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Generic(String),
}

impl Error {
    pub fn js(value: wasm_bindgen::JsValue) -> Self {
        value.into()
    }
    pub fn generic(value: impl std::fmt::Display) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for Error {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        // EIP-1193 rejections carry { code, message }
        let code = js_sys::Reflect::get(&error, &wasm_bindgen::JsValue::from_str("code"))
            .ok()
            .and_then(|value| value.as_f64());
        let message = js_sys::Reflect::get(&error, &wasm_bindgen::JsValue::from_str("message"))
            .ok()
            .and_then(|value| value.as_string());

        match (code, message) {
            (Some(code), Some(message)) => Error::Rpc {
                code: code as i64,
                message,
            },
            _ => {
                let message = js_sys::Error::from(error)
                    .message()
                    .as_string()
                    .unwrap_or("unknown JS error".to_string());
                Error::Js(message)
            }
        }
    }
}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        let message = error.to_string();
        Error::Serialization(message)
    }
}

impl From<Error> for ProviderError {
    fn from(error: Error) -> Self {
        match error {
            Error::MetaMaskUnavailable => ProviderError::Unavailable,
            Error::Rpc { code, message } => ProviderError::Rpc { code, message },
            other => ProviderError::Other(other.to_string()),
        }
    }
}

//! The wallet boundary. Implementations wrap whatever object the browser
//! injects; the orchestration core only ever sees this trait.

use async_trait::async_trait;
use ethnum::U256;

use crate::types::{Address, TxHash};

/// EIP-1193: the user rejected the wallet prompt.
pub const CODE_USER_REJECTED: i64 = 4001;
/// EIP-3085/EIP-3326: the wallet does not know the requested chain.
pub const CODE_UNRECOGNIZED_CHAIN: i64 = 4902;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("no injected wallet was found in this window")]
    Unavailable,

    /// An RPC-level rejection, with the provider-defined error code.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    pub fn other(message: impl std::fmt::Display) -> Self {
        Self::Other(message.to_string())
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code() == Some(CODE_USER_REJECTED)
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code() == Some(CODE_UNRECOGNIZED_CHAIN)
    }
}

/// A read-only `eth_call`.
#[derive(Clone, Debug, PartialEq)]
pub struct CallRequest {
    pub to: Address,
    pub data: Vec<u8>,
}

/// A state-changing transaction to be signed and submitted by the wallet.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Vec<u8>,
    /// Native value attached to the call, zero for plain contract calls.
    pub value: U256,
}

/// Settlement result of a submitted transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub tx_hash: TxHash,
    /// False when the transaction was mined but reverted.
    pub ok: bool,
}

#[async_trait(?Send)]
pub trait Provider {
    /// Prompts the wallet for account access and returns the exposed
    /// accounts, active account first.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Numeric identifier of the chain the wallet is currently on.
    async fn chain_id(&self) -> Result<u64, ProviderError>;

    /// Asks the wallet to switch to `chain_id`. Success means the wallet
    /// accepted the switch; the page context is expected to restart.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError>;

    /// Read-only contract call; returns the raw return data.
    async fn call(&self, request: CallRequest) -> Result<Vec<u8>, ProviderError>;

    /// Submits a transaction through the wallet (prompting the user).
    async fn send_transaction(&self, request: TransactionRequest)
        -> Result<TxHash, ProviderError>;

    /// Blocks until the transaction settles. There is no timeout at this
    /// level; the underlying provider bounds the wait.
    async fn wait_for_transaction(&self, tx_hash: &TxHash) -> Result<Receipt, ProviderError>;
}

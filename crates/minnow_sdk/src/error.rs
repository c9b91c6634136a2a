use crate::abi::AbiError;
use crate::provider::ProviderError;

/// Everything an action handler can fail with. Each variant renders as the
/// human-readable text the status reporter shows, so handlers can surface
/// errors with a plain `to_string()`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No browser wallet detected. Please install MetaMask!")]
    NoWallet,

    #[error("Wrong network! You're on chain {actual}. Please switch to chain {required}")]
    WrongNetwork { actual: u64, required: u64 },

    #[error("The request was rejected in the wallet")]
    UserRejected,

    #[error("The required network is not known to the wallet. Please add it manually")]
    UnrecognizedChain,

    /// The contract rejected the call; carries the underlying failure text
    /// verbatim.
    #[error("{0}")]
    CallReverted(String),

    #[error("{0}")]
    InvalidInput(String),

    /// A previous request for the same action is still in flight.
    #[error("Previous request still pending, please wait")]
    Busy,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Bad return data: {0}")]
    Abi(String),
}

impl Error {
    pub fn invalid_input(message: impl ToString) -> Self {
        Error::InvalidInput(message.to_string())
    }
}

impl From<ProviderError> for Error {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Unavailable => Error::NoWallet,
            ref rpc if rpc.is_user_rejection() => Error::UserRejected,
            ref rpc if rpc.is_unrecognized_chain() => Error::UnrecognizedChain,
            other => Error::Provider(other.to_string()),
        }
    }
}

impl From<AbiError> for Error {
    fn from(error: AbiError) -> Self {
        Error::Abi(error.to_string())
    }
}

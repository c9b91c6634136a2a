//! Client-side orchestration for the minnow bank and AMM pages: wallet
//! session setup, network guarding, approve-then-execute sequencing, and
//! display refresh. Everything talks to the wallet through the [`Provider`]
//! trait so the core stays independent of the injected browser object.
//!
//! [`Provider`]: provider::Provider

pub mod abi;
pub mod actions;
pub mod chain;
pub mod constants;
pub mod contract_interfaces;
mod error;
pub mod provider;
pub mod refresh;
pub mod session;
pub mod status;
pub mod types;
pub mod utils;

pub use error::Error;
pub use types::{Address, TxHash};

//! Thin typed wrappers around the deployed contracts, one async method per
//! ABI entry. State-changing methods submit through the wallet and block
//! until the transaction settles; read-only methods go through `eth_call`.

pub mod amm_pair;
pub mod bank;
pub mod erc20;

pub use amm_pair::IAmmPair;
pub use bank::IBank;
pub use erc20::IErc20;

use ethnum::U256;
use tracing::{debug, error};

use crate::provider::{CallRequest, Provider, ProviderError, TransactionRequest};
use crate::types::Address;
use crate::Error;

/// Read-only call; returns the raw return data for the caller to decode.
pub(crate) async fn read(
    provider: &dyn Provider,
    to: Address,
    data: Vec<u8>,
) -> Result<Vec<u8>, Error> {
    provider
        .call(CallRequest { to, data })
        .await
        .inspect_err(|e| error!("read call to {to} failed: {e}"))
        .map_err(Into::into)
}

/// Submit a state-changing call and wait for it to settle. A rejection at
/// submission time usually carries the revert reason in the RPC message, so
/// it surfaces as [`Error::CallReverted`] with that text verbatim.
pub(crate) async fn execute(
    provider: &dyn Provider,
    from: Address,
    to: Address,
    data: Vec<u8>,
    value: U256,
) -> Result<(), Error> {
    let tx_hash = provider
        .send_transaction(TransactionRequest {
            from,
            to,
            data,
            value,
        })
        .await
        .map_err(|e| match e {
            ref rpc if rpc.is_user_rejection() => Error::UserRejected,
            ProviderError::Rpc { message, .. } => Error::CallReverted(message),
            other => other.into(),
        })?;

    debug!("submitted {tx_hash} to {to}, waiting for confirmation");

    let receipt = provider.wait_for_transaction(&tx_hash).await?;
    if !receipt.ok {
        return Err(Error::CallReverted(format!(
            "transaction {tx_hash} reverted on-chain"
        )));
    }
    Ok(())
}

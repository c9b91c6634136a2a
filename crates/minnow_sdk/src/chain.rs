//! Network guard. Everything that builds contract handles goes through
//! [`ensure_chain`] first, so no handle ever exists for the wrong chain.

use tracing::{debug, info};

use crate::provider::Provider;
use crate::status::{Severity, StatusSink};
use crate::Error;

/// Result of a successful chain check.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChainCheck {
    /// The wallet is already on the required chain.
    Matches,
    /// The wallet accepted a switch request. The page state is stale now;
    /// the caller is expected to reload rather than continue.
    SwitchRequested,
}

/// Compare the wallet's active chain against `required` and, on mismatch,
/// ask the wallet to switch. Reports every failure through `status` before
/// returning it.
pub async fn ensure_chain(
    provider: &dyn Provider,
    status: &dyn StatusSink,
    required: u64,
) -> Result<ChainCheck, Error> {
    let actual = provider
        .chain_id()
        .await
        .map_err(Error::from)
        .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;

    if actual == required {
        debug!("wallet already on chain {required}");
        return Ok(ChainCheck::Matches);
    }

    let mismatch = Error::WrongNetwork { actual, required };
    status.report(Severity::Error, &mismatch.to_string());

    match provider.switch_chain(required).await {
        Ok(()) => {
            info!("wallet accepted switch to chain {required}");
            Ok(ChainCheck::SwitchRequested)
        }
        Err(e) => {
            let error = Error::from(e);
            status.report(Severity::Error, &error.to_string());
            Err(error)
        }
    }
}

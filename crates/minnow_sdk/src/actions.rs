//! Two-phase approve-then-execute controller. The first click of a gated
//! button grants ERC-20 allowances; the second click, with the same amounts,
//! runs the real call. Any failure or completed run drops back to the
//! unapproved state so allowances are never reused across attempts.

use std::cell::{Cell, RefCell};
use std::future::Future;

use ethnum::U256;
use futures::future::try_join_all;
use tracing::{debug, info};

use crate::contract_interfaces::IErc20;
use crate::status::{Severity, StatusSink};
use crate::types::Address;
use crate::Error;

/// What a single click accomplished.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Allowances granted; the same click must be repeated to execute.
    ApprovalComplete,
    /// The underlying contract call ran and settled.
    ActionComplete,
}

/// One allowance granted during the approval phase.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grant {
    pub token: Address,
    pub amount: U256,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum ApprovalState {
    #[default]
    Unapproved,
    /// Allowances are in place for exactly these token/amount pairs. A later
    /// click with different amounts does not match and starts a fresh
    /// approval round instead of executing against stale allowances.
    Approved { grants: Vec<Grant> },
}

/// Per-button controller. Also serializes clicks: while one run is in
/// flight, further runs fail with [`Error::Busy`].
pub struct GatedAction {
    label: &'static str,
    state: RefCell<ApprovalState>,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag even when a run is cancelled mid-await.
struct FlightGuard<'a>(&'a Cell<bool>);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl GatedAction {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: RefCell::new(ApprovalState::Unapproved),
            in_flight: Cell::new(false),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(&*self.state.borrow(), ApprovalState::Approved { .. })
    }

    pub fn reset(&self) {
        *self.state.borrow_mut() = ApprovalState::Unapproved;
    }

    /// Run one click. With an empty `approvals` slice the action is ungated
    /// and `execute` runs immediately; otherwise the first matching click
    /// approves and the second executes.
    pub async fn run<F, Fut>(
        &self,
        status: &dyn StatusSink,
        spender: Address,
        approvals: &[(&IErc20, U256)],
        execute: F,
    ) -> Result<Outcome, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), Error>>,
    {
        if self.in_flight.get() {
            debug!("{}: previous run still in flight", self.label);
            return Err(Error::Busy);
        }
        self.in_flight.set(true);
        let _guard = FlightGuard(&self.in_flight);

        let requested: Vec<Grant> = approvals
            .iter()
            .map(|(token, amount)| Grant {
                token: token.address,
                amount: *amount,
            })
            .collect();

        let matches_granted = matches!(
            &*self.state.borrow(),
            ApprovalState::Approved { grants } if *grants == requested
        );

        if !requested.is_empty() && !matches_granted {
            status.report(Severity::Info, "Approving token spend...");
            let result = try_join_all(
                approvals
                    .iter()
                    .map(|(token, amount)| token.approve(spender, *amount)),
            )
            .await;

            return match result {
                Ok(_) => {
                    *self.state.borrow_mut() = ApprovalState::Approved { grants: requested };
                    info!("{}: allowances granted", self.label);
                    status.report(
                        Severity::Success,
                        &format!("Approved! Click {} again to confirm", self.label),
                    );
                    Ok(Outcome::ApprovalComplete)
                }
                Err(e) => {
                    self.reset();
                    Err(e)
                }
            };
        }

        let result = execute().await;
        self.reset();
        result.map(|()| Outcome::ActionComplete)
    }
}

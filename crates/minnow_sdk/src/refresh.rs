//! Read-back of on-chain state into named display slots after connects and
//! settled transactions. Refreshes are best-effort: a failed read logs a
//! warning and leaves the slot untouched, it never fails the action that
//! triggered it.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;

use crate::constants::TOKEN_DECIMALS;
use crate::session::{BankSession, PoolSession};
use crate::utils::display_token_amount;

/// The values the pages show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Slot {
    BankBalance,
    /// Balance of whichever address the user looked up, not necessarily
    /// their own.
    CheckedBalance,
    ReserveA,
    ReserveB,
    Shares,
    BalanceA,
    BalanceB,
}

/// Write-only sink for refreshed values. The app backs this with signals;
/// tests use [`DisplayMap`].
pub trait DisplaySink {
    fn publish(&self, slot: Slot, value: String);
}

/// Plain map-backed implementation.
#[derive(Default, Debug)]
pub struct DisplayMap(RefCell<HashMap<Slot, String>>);

impl DisplayMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<String> {
        self.0.borrow().get(&slot).cloned()
    }
}

impl DisplaySink for DisplayMap {
    fn publish(&self, slot: Slot, value: String) {
        self.0.borrow_mut().insert(slot, value);
    }
}

/// Slots a settled swap invalidates.
pub const SWAP_TARGETS: &[Slot] = &[Slot::ReserveA, Slot::ReserveB, Slot::BalanceA, Slot::BalanceB];

/// Slots a liquidity change invalidates.
pub const LIQUIDITY_TARGETS: &[Slot] = &[
    Slot::ReserveA,
    Slot::ReserveB,
    Slot::Shares,
    Slot::BalanceA,
    Slot::BalanceB,
];

/// Slots the starter-token mint invalidates.
pub const FUNDING_TARGETS: &[Slot] = &[Slot::BalanceA, Slot::BalanceB];

pub async fn refresh_pool(session: &PoolSession, targets: &[Slot], display: &dyn DisplaySink) {
    for slot in targets {
        let value = match slot {
            Slot::ReserveA => session.pair.reserve_a().await,
            Slot::ReserveB => session.pair.reserve_b().await,
            Slot::Shares => session.pair.shares(session.account).await,
            Slot::BalanceA => session.token_a.balance_of(session.account).await,
            Slot::BalanceB => session.token_b.balance_of(session.account).await,
            Slot::BankBalance | Slot::CheckedBalance => continue,
        };
        match value {
            Ok(value) => display.publish(*slot, display_token_amount(value, TOKEN_DECIMALS)),
            Err(e) => warn!("refresh of {slot:?} failed: {e}"),
        }
    }
}

pub async fn refresh_bank(session: &BankSession, display: &dyn DisplaySink) {
    match session.bank.get_balance(session.account).await {
        Ok(value) => display.publish(
            Slot::BankBalance,
            display_token_amount(value, TOKEN_DECIMALS),
        ),
        Err(e) => warn!("refresh of bank balance failed: {e}"),
    }
}

//! Wallet sessions. A session only exists once the account is connected and
//! the chain check has passed, so every contract handle it holds is known to
//! point at the right network. All user-facing operations live here and
//! follow the same shape: report progress, run the call, refresh the
//! affected display slots, report the result.

use std::rc::Rc;

use ethnum::U256;
use tracing::{debug, info, warn};

use crate::actions::{GatedAction, Outcome};
use crate::chain::{ensure_chain, ChainCheck};
use crate::constants::addrs::DeployedContracts;
use crate::constants::{SEPOLIA, TOKEN_DECIMALS};
use crate::contract_interfaces::{IAmmPair, IBank, IErc20};
use crate::provider::Provider;
use crate::refresh::{self, DisplaySink, Slot, FUNDING_TARGETS, LIQUIDITY_TARGETS, SWAP_TARGETS};
use crate::status::{Severity, StatusSink};
use crate::types::Address;
use crate::utils::{display_token_amount, shorten_address};
use crate::Error;

/// Result of a connect attempt that did not fail outright.
pub enum Connected<S> {
    Ready(S),
    /// The wallet accepted a chain switch; the caller must reload the page
    /// instead of using any session state.
    PendingChainSwitch,
}

async fn connected_account(
    provider: &dyn Provider,
    status: &dyn StatusSink,
) -> Result<Address, Error> {
    let accounts = provider
        .request_accounts()
        .await
        .map_err(Error::from)
        .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;

    match accounts.first() {
        Some(account) => Ok(*account),
        None => {
            let error = Error::Provider("wallet returned no accounts".into());
            status.report(Severity::Error, &error.to_string());
            Err(error)
        }
    }
}

/// Connected session for the bank page.
pub struct BankSession {
    pub provider: Rc<dyn Provider>,
    pub account: Address,
    pub bank: IBank,
}

/// Connect the bank page: request an account, check the chain, claim the
/// starter balance if this account never has, then publish the balance.
pub async fn connect_bank(
    provider: Rc<dyn Provider>,
    contracts: &DeployedContracts,
    status: &dyn StatusSink,
    display: &dyn DisplaySink,
) -> Result<Connected<BankSession>, Error> {
    status.report(Severity::Info, "Connecting...");
    let account = connected_account(&*provider, status).await?;

    if let ChainCheck::SwitchRequested = ensure_chain(&*provider, status, SEPOLIA).await? {
        return Ok(Connected::PendingChainSwitch);
    }

    let bank = IBank::new(Rc::clone(&provider), contracts.bank, account);
    let session = BankSession {
        provider,
        account,
        bank,
    };

    match session.bank.has_received_initial(account).await {
        Ok(true) => debug!("{account} already holds the starter balance"),
        Ok(false) => {
            status.report(Severity::Info, "Claiming your initial balance...");
            match session.bank.claim_initial_balance().await {
                Ok(()) => info!("starter balance claimed for {account}"),
                // The flag read raced a claim from another tab; the account
                // has its balance either way, so keep connecting.
                Err(e) => {
                    status.report(
                        Severity::Info,
                        &format!("Initial balance was already claimed ({e})"),
                    );
                }
            }
        }
        Err(e) => warn!("starter-balance check failed: {e}"),
    }

    refresh::refresh_bank(&session, display).await;
    status.report(
        Severity::Success,
        &format!("Connected: {}", shorten_address(&session.account)),
    );
    Ok(Connected::Ready(session))
}

impl BankSession {
    pub async fn deposit(
        &self,
        amount: U256,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<(), Error> {
        status.report(Severity::Info, "Sending transaction...");
        self.bank
            .deposit(amount)
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;
        refresh::refresh_bank(self, display).await;
        status.report(Severity::Success, "Deposit successful!");
        Ok(())
    }

    pub async fn withdraw(
        &self,
        amount: U256,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<(), Error> {
        status.report(Severity::Info, "Sending transaction...");
        self.bank
            .withdraw(amount)
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;
        refresh::refresh_bank(self, display).await;
        status.report(Severity::Success, "Withdrawal successful!");
        Ok(())
    }

    pub async fn transfer(
        &self,
        amount: U256,
        recipient: Address,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<(), Error> {
        status.report(Severity::Info, "Sending transaction...");
        self.bank
            .transfer(amount, recipient)
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;
        refresh::refresh_bank(self, display).await;
        status.report(Severity::Success, "Transfer successful!");
        Ok(())
    }

    /// Explicit balance lookup for any address, not just the connected
    /// account; unlike the refreshes this one surfaces its failure.
    pub async fn check_balance(
        &self,
        account: Address,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<(), Error> {
        let balance = self
            .bank
            .get_balance(account)
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;
        display.publish(
            Slot::CheckedBalance,
            display_token_amount(balance, TOKEN_DECIMALS),
        );
        status.report(Severity::Success, "Balance fetched successfully!");
        Ok(())
    }
}

/// Connected session for the liquidity/swap page.
pub struct PoolSession {
    pub provider: Rc<dyn Provider>,
    pub account: Address,
    pub pair: IAmmPair,
    pub token_a: IErc20,
    pub token_b: IErc20,
    gate_add: GatedAction,
    gate_remove: GatedAction,
    gate_swap_a: GatedAction,
    gate_swap_b: GatedAction,
    gate_fund: GatedAction,
}

/// Connect the pool page: request an account, check the chain, then publish
/// reserves, shares, and token balances.
pub async fn connect_pool(
    provider: Rc<dyn Provider>,
    contracts: &DeployedContracts,
    status: &dyn StatusSink,
    display: &dyn DisplaySink,
) -> Result<Connected<PoolSession>, Error> {
    status.report(Severity::Info, "Connecting...");
    let account = connected_account(&*provider, status).await?;

    if let ChainCheck::SwitchRequested = ensure_chain(&*provider, status, SEPOLIA).await? {
        return Ok(Connected::PendingChainSwitch);
    }

    let session = PoolSession {
        pair: IAmmPair::new(Rc::clone(&provider), contracts.pair, account),
        token_a: IErc20::new(Rc::clone(&provider), contracts.token_a, account),
        token_b: IErc20::new(Rc::clone(&provider), contracts.token_b, account),
        gate_add: GatedAction::new("Add Liquidity"),
        gate_remove: GatedAction::new("Remove Liquidity"),
        gate_swap_a: GatedAction::new("Swap A for B"),
        gate_swap_b: GatedAction::new("Swap B for A"),
        gate_fund: GatedAction::new("Get Starter Tokens"),
        provider,
        account,
    };

    refresh::refresh_pool(&session, LIQUIDITY_TARGETS, display).await;
    status.report(
        Severity::Success,
        &format!("Connected: {}", shorten_address(&session.account)),
    );
    Ok(Connected::Ready(session))
}

impl PoolSession {
    /// Gated on approvals for both tokens; the first click with these
    /// amounts approves, the second deposits.
    pub async fn add_liquidity(
        &self,
        amount_a: U256,
        amount_b: U256,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<Outcome, Error> {
        let outcome = self
            .gate_add
            .run(
                status,
                self.pair.address,
                &[(&self.token_a, amount_a), (&self.token_b, amount_b)],
                || async {
                    status.report(Severity::Info, "Adding liquidity...");
                    self.pair.add_liquidity(amount_a, amount_b).await
                },
            )
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;

        if outcome == Outcome::ActionComplete {
            refresh::refresh_pool(self, LIQUIDITY_TARGETS, display).await;
            status.report(Severity::Success, "Liquidity added!");
        }
        Ok(outcome)
    }

    /// Burning shares needs no allowance, so this runs in one click.
    pub async fn remove_liquidity(
        &self,
        shares: U256,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<(), Error> {
        self.gate_remove
            .run(status, self.pair.address, &[], || async {
                status.report(Severity::Info, "Removing liquidity...");
                self.pair.remove_liquidity(shares).await
            })
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;

        refresh::refresh_pool(self, LIQUIDITY_TARGETS, display).await;
        status.report(Severity::Success, "Liquidity removed!");
        Ok(())
    }

    /// Gated on an approval for token A.
    pub async fn swap_a_for_b(
        &self,
        amount_in: U256,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<Outcome, Error> {
        let outcome = self
            .gate_swap_a
            .run(
                status,
                self.pair.address,
                &[(&self.token_a, amount_in)],
                || async {
                    status.report(Severity::Info, "Swapping...");
                    self.pair.swap_a_for_b(amount_in).await
                },
            )
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;

        if outcome == Outcome::ActionComplete {
            refresh::refresh_pool(self, SWAP_TARGETS, display).await;
            status.report(Severity::Success, "Swap complete!");
        }
        Ok(outcome)
    }

    /// Gated on an approval for token B.
    pub async fn swap_b_for_a(
        &self,
        amount_in: U256,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<Outcome, Error> {
        let outcome = self
            .gate_swap_b
            .run(
                status,
                self.pair.address,
                &[(&self.token_b, amount_in)],
                || async {
                    status.report(Severity::Info, "Swapping...");
                    self.pair.swap_b_for_a(amount_in).await
                },
            )
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;

        if outcome == Outcome::ActionComplete {
            refresh::refresh_pool(self, SWAP_TARGETS, display).await;
            status.report(Severity::Success, "Swap complete!");
        }
        Ok(outcome)
    }

    /// One-time starter-token mint for the connected account.
    pub async fn initial_funding(
        &self,
        status: &dyn StatusSink,
        display: &dyn DisplaySink,
    ) -> Result<(), Error> {
        self.gate_fund
            .run(status, self.pair.address, &[], || async {
                status.report(Severity::Info, "Requesting starter tokens...");
                self.pair.initial_funding(self.account).await
            })
            .await
            .inspect_err(|e| status.report(Severity::Error, &e.to_string()))?;

        refresh::refresh_pool(self, FUNDING_TARGETS, display).await;
        status.report(Severity::Success, "Starter tokens received!");
        Ok(())
    }
}

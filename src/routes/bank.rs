use std::rc::Rc;
use std::str::FromStr;

use leptos::html::Input;
use leptos::prelude::*;
use tracing::info;

use metamask::MetaMask;
use minnow_sdk::provider::Provider;
use minnow_sdk::refresh::Slot;
use minnow_sdk::session::{connect_bank, Connected};
use minnow_sdk::status::{Severity, StatusSink};
use minnow_sdk::types::Address;
use minnow_sdk::utils::{parse_token_amount, shorten_address};
use minnow_sdk::Error;

use crate::constants::{CONTRACTS, DECIMALS};
use crate::state::{BankStore, Displays, GlobalStatus};
use crate::utils::reload_page;

#[component]
pub fn Bank() -> impl IntoView {
    info!("rendering <Bank/>");

    let status = use_context::<GlobalStatus>().expect("global status context missing!");
    let displays = use_context::<Displays>().expect("displays context missing!");
    let bank = use_context::<BankStore>().expect("bank store context missing!");

    let connect: Action<(), (), LocalStorage> = Action::new_unsync(move |_: &()| async move {
        let wallet = match MetaMask::new() {
            Ok(wallet) => wallet,
            Err(_) => {
                status.report(Severity::Error, &Error::NoWallet.to_string());
                return;
            }
        };
        let provider: Rc<dyn Provider> = Rc::new(wallet);
        match connect_bank(provider, CONTRACTS, &status, &displays).await {
            Ok(Connected::Ready(session)) => bank.session.set(Some(Rc::new(session))),
            Ok(Connected::PendingChainSwitch) => reload_page(),
            // already reported through the status line
            Err(_) => {}
        }
    });

    let deposit: Action<String, (), LocalStorage> = Action::new_unsync(move |amount: &String| {
        let amount = amount.clone();
        async move {
            let Some(session) = bank.session.get_untracked() else {
                return;
            };
            let amount = match parse_token_amount(&amount, DECIMALS) {
                Ok(amount) => amount,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session.deposit(amount, &status, &displays).await;
        }
    });

    let withdraw: Action<String, (), LocalStorage> = Action::new_unsync(move |amount: &String| {
        let amount = amount.clone();
        async move {
            let Some(session) = bank.session.get_untracked() else {
                return;
            };
            let amount = match parse_token_amount(&amount, DECIMALS) {
                Ok(amount) => amount,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session.withdraw(amount, &status, &displays).await;
        }
    });

    let transfer: Action<(String, String), (), LocalStorage> =
        Action::new_unsync(move |(amount, recipient): &(String, String)| {
        let amount = amount.clone();
        let recipient = recipient.clone();
        async move {
            let Some(session) = bank.session.get_untracked() else {
                return;
            };
            let recipient = match Address::from_str(recipient.trim()) {
                Ok(recipient) => recipient,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            let amount = match parse_token_amount(&amount, DECIMALS) {
                Ok(amount) => amount,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session.transfer(amount, recipient, &status, &displays).await;
        }
    });

    let check_balance: Action<String, (), LocalStorage> =
        Action::new_unsync(move |address: &String| {
        let address = address.clone();
        async move {
            let Some(session) = bank.session.get_untracked() else {
                return;
            };
            if address.trim().is_empty() {
                status.report(Severity::Error, "Please enter an address");
                return;
            }
            let address = match Address::from_str(address.trim()) {
                Ok(address) => address,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session.check_balance(address, &status, &displays).await;
        }
    });

    let deposit_input = NodeRef::<Input>::new();
    let check_address_input = NodeRef::<Input>::new();
    let withdraw_input = NodeRef::<Input>::new();
    let transfer_amount_input = NodeRef::<Input>::new();
    let transfer_to_input = NodeRef::<Input>::new();

    let pending = move || {
        connect.pending().get()
            || deposit.pending().get()
            || withdraw.pending().get()
            || transfer.pending().get()
            || check_balance.pending().get()
    };
    let connected = move || bank.session.with(|session| session.is_some());
    let my_address = move || {
        bank.session
            .with(|session| session.as_ref().map(|s| shorten_address(&s.account)))
    };

    view! {
        <div class="p-2 max-w-lg">
            <div class="text-3xl font-bold mb-4">"Bank"</div>
            <button on:click=move |_| {
                _ = connect.dispatch(());
            } prop:disabled=pending>
                {move || if connected() { "Connected" } else { "Connect Wallet" }}
            </button>
            <span class="ml-2">{my_address}</span>

            <Show when=connected>
                <div class="mt-4">
                    <span>"Your balance: "</span>
                    <strong>{move || displays.get(Slot::BankBalance)}</strong>
                </div>

                <div class="flex flex-col gap-2 mt-4">
                    <div class="font-bold">"Deposit"</div>
                    <input type="text" placeholder="Amount" node_ref=deposit_input />
                    <button prop:disabled=pending on:click=move |_| {
                        let amount = deposit_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = deposit.dispatch(amount);
                    }>"Deposit"</button>
                </div>

                <div class="flex flex-col gap-2 mt-4">
                    <div class="font-bold">"Withdraw"</div>
                    <input type="text" placeholder="Amount" node_ref=withdraw_input />
                    <button prop:disabled=pending on:click=move |_| {
                        let amount = withdraw_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = withdraw.dispatch(amount);
                    }>"Withdraw"</button>
                </div>

                <div class="flex flex-col gap-2 mt-4">
                    <div class="font-bold">"Transfer"</div>
                    <input type="text" placeholder="Amount" node_ref=transfer_amount_input />
                    <input
                        type="text"
                        placeholder="Recipient address"
                        node_ref=transfer_to_input
                    />
                    <button prop:disabled=pending on:click=move |_| {
                        let amount = transfer_amount_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        let recipient = transfer_to_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = transfer.dispatch((amount, recipient));
                    }>"Transfer"</button>
                </div>

                <div class="flex flex-col gap-2 mt-4">
                    <div class="font-bold">"Check Balance"</div>
                    <input type="text" placeholder="Address" node_ref=check_address_input />
                    <button prop:disabled=pending on:click=move |_| {
                        let address = check_address_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = check_balance.dispatch(address);
                    }>"Check Balance"</button>
                    <div>
                        <span>"Balance: "</span>
                        <strong>{move || displays.get(Slot::CheckedBalance)}</strong>
                    </div>
                </div>
            </Show>
        </div>
    }
}

use std::rc::Rc;

use leptos::html::Input;
use leptos::prelude::*;
use tracing::info;

use metamask::MetaMask;
use minnow_sdk::provider::Provider;
use minnow_sdk::refresh::Slot;
use minnow_sdk::session::{connect_pool, Connected};
use minnow_sdk::status::{Severity, StatusSink};
use minnow_sdk::utils::{parse_token_amount, shorten_address};
use minnow_sdk::Error;

use crate::constants::{CONTRACTS, DECIMALS};
use crate::state::{Displays, GlobalStatus, PoolStore};
use crate::utils::reload_page;

#[component]
pub fn Pool() -> impl IntoView {
    info!("rendering <Pool/>");

    let status = use_context::<GlobalStatus>().expect("global status context missing!");
    let displays = use_context::<Displays>().expect("displays context missing!");
    let pool = use_context::<PoolStore>().expect("pool store context missing!");

    let connect: Action<(), (), LocalStorage> = Action::new_unsync(move |_: &()| async move {
        let wallet = match MetaMask::new() {
            Ok(wallet) => wallet,
            Err(_) => {
                status.report(Severity::Error, &Error::NoWallet.to_string());
                return;
            }
        };
        let provider: Rc<dyn Provider> = Rc::new(wallet);
        match connect_pool(provider, CONTRACTS, &status, &displays).await {
            Ok(Connected::Ready(session)) => pool.session.set(Some(Rc::new(session))),
            Ok(Connected::PendingChainSwitch) => reload_page(),
            // already reported through the status line
            Err(_) => {}
        }
    });

    // each handler parses its own inputs; a bad amount never reaches the
    // session layer

    let add_liquidity: Action<(String, String), (), LocalStorage> =
        Action::new_unsync(move |(amount_a, amount_b): &(String, String)| {
        let amount_a = amount_a.clone();
        let amount_b = amount_b.clone();
        async move {
            let Some(session) = pool.session.get_untracked() else {
                return;
            };
            let (amount_a, amount_b) = match (
                parse_token_amount(&amount_a, DECIMALS),
                parse_token_amount(&amount_b, DECIMALS),
            ) {
                (Ok(amount_a), Ok(amount_b)) => (amount_a, amount_b),
                (Err(error), _) | (_, Err(error)) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session
                .add_liquidity(amount_a, amount_b, &status, &displays)
                .await;
        }
    });

    let remove_liquidity: Action<String, (), LocalStorage> =
        Action::new_unsync(move |shares: &String| {
        let shares = shares.clone();
        async move {
            let Some(session) = pool.session.get_untracked() else {
                return;
            };
            let shares = match parse_token_amount(&shares, DECIMALS) {
                Ok(shares) => shares,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session.remove_liquidity(shares, &status, &displays).await;
        }
    });

    let swap_a: Action<String, (), LocalStorage> = Action::new_unsync(move |amount: &String| {
        let amount = amount.clone();
        async move {
            let Some(session) = pool.session.get_untracked() else {
                return;
            };
            let amount = match parse_token_amount(&amount, DECIMALS) {
                Ok(amount) => amount,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session.swap_a_for_b(amount, &status, &displays).await;
        }
    });

    let swap_b: Action<String, (), LocalStorage> = Action::new_unsync(move |amount: &String| {
        let amount = amount.clone();
        async move {
            let Some(session) = pool.session.get_untracked() else {
                return;
            };
            let amount = match parse_token_amount(&amount, DECIMALS) {
                Ok(amount) => amount,
                Err(error) => {
                    status.report(Severity::Error, &error.to_string());
                    return;
                }
            };
            _ = session.swap_b_for_a(amount, &status, &displays).await;
        }
    });

    let get_starter_tokens: Action<(), (), LocalStorage> = Action::new_unsync(move |_: &()| async move {
        let Some(session) = pool.session.get_untracked() else {
            return;
        };
        _ = session.initial_funding(&status, &displays).await;
    });

    let add_a_input = NodeRef::<Input>::new();
    let add_b_input = NodeRef::<Input>::new();
    let remove_input = NodeRef::<Input>::new();
    let swap_a_input = NodeRef::<Input>::new();
    let swap_b_input = NodeRef::<Input>::new();

    let pending = move || {
        connect.pending().get()
            || add_liquidity.pending().get()
            || remove_liquidity.pending().get()
            || swap_a.pending().get()
            || swap_b.pending().get()
            || get_starter_tokens.pending().get()
    };
    let connected = move || pool.session.with(|session| session.is_some());
    let my_address = move || {
        pool.session
            .with(|session| session.as_ref().map(|s| shorten_address(&s.account)))
    };

    view! {
        <div class="p-2 max-w-lg">
            <div class="text-3xl font-bold mb-4">"Pool"</div>
            <button on:click=move |_| {
                _ = connect.dispatch(());
            } prop:disabled=pending>
                {move || if connected() { "Connected" } else { "Connect Wallet" }}
            </button>
            <span class="ml-2">{my_address}</span>

            <Show when=connected>
                <div class="mt-4">
                    <div>"Reserve A: " {move || displays.get(Slot::ReserveA)}</div>
                    <div>"Reserve B: " {move || displays.get(Slot::ReserveB)}</div>
                    <div>"Your shares: " {move || displays.get(Slot::Shares)}</div>
                    <div>"Token A balance: " {move || displays.get(Slot::BalanceA)}</div>
                    <div>"Token B balance: " {move || displays.get(Slot::BalanceB)}</div>
                </div>

                <div class="mt-4">
                    <button prop:disabled=pending on:click=move |_| {
                        _ = get_starter_tokens.dispatch(());
                    }>"Get Starter Tokens"</button>
                </div>

                <div class="flex flex-col gap-2 mt-4">
                    <div class="font-bold">"Add Liquidity"</div>
                    <input type="text" placeholder="Amount A" node_ref=add_a_input />
                    <input type="text" placeholder="Amount B" node_ref=add_b_input />
                    <button prop:disabled=pending on:click=move |_| {
                        let amount_a = add_a_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        let amount_b = add_b_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = add_liquidity.dispatch((amount_a, amount_b));
                    }>"Add Liquidity"</button>
                </div>

                <div class="flex flex-col gap-2 mt-4">
                    <div class="font-bold">"Remove Liquidity"</div>
                    <input type="text" placeholder="Shares" node_ref=remove_input />
                    <button prop:disabled=pending on:click=move |_| {
                        let shares = remove_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = remove_liquidity.dispatch(shares);
                    }>"Remove Liquidity"</button>
                </div>

                <div class="flex flex-col gap-2 mt-4">
                    <div class="font-bold">"Swap"</div>
                    <input type="text" placeholder="Amount A in" node_ref=swap_a_input />
                    <button prop:disabled=pending on:click=move |_| {
                        let amount = swap_a_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = swap_a.dispatch(amount);
                    }>"Swap A for B"</button>
                    <input type="text" placeholder="Amount B in" node_ref=swap_b_input />
                    <button prop:disabled=pending on:click=move |_| {
                        let amount = swap_b_input
                            .get()
                            .expect("<input> should be mounted")
                            .value();
                        _ = swap_b.dispatch(amount);
                    }>"Swap B for A"</button>
                </div>
            </Show>
        </div>
    }
}

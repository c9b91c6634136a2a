use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use tracing::info;

use minnow_sdk::status::{Severity, StatusMessage};

mod constants;
mod routes;
mod state;
mod utils;

use routes::{bank::Bank, nav::Nav, pool::Pool};
use state::{BankStore, Displays, GlobalStatus, PoolStore};

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(GlobalStatus::new());
    provide_context(Displays::new());
    provide_context(BankStore::new());
    provide_context(PoolStore::new());

    let status = use_context::<GlobalStatus>().expect("global status context missing!");

    let status_class = move || match status.message.get() {
        Some(StatusMessage {
            severity: Severity::Error,
            ..
        }) => "status error",
        Some(StatusMessage {
            severity: Severity::Success,
            ..
        }) => "status success",
        _ => "status",
    };
    let status_text = move || status.message.get().map(|message| message.text);

    view! {
        <Router>
            <Title text="Minnow" />
            <Nav />
            <div class=status_class>{status_text}</div>
            <main>
                <Routes transition=true fallback=|| "This page could not be found.">
                    <Route path=path!("/") view=Bank />
                    <Route path=path!("/pool") view=Pool />
                </Routes>
            </main>
        </Router>
    }
}

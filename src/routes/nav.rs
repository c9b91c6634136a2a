use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <A href="/">"Bank"</A>
            <A href="/pool">"Pool"</A>
            <a href="https://sepolia.etherscan.io" target="_blank" rel="noopener">
                "Explorer"
            </a>
        </nav>
    }
}

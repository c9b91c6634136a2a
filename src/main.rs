use leptos::mount::mount_to_body;
use leptos::prelude::*;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

use minnow::App;

fn main() {
    fmt()
        .with_writer(
            MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG),
        )
        .with_max_level(tracing::Level::DEBUG)
        // the wasm target has no clock; timestamps would panic
        .without_time()
        .init();
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App /> });
}

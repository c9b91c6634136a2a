use leptos::prelude::window;

/// Full page reload. Used after the wallet accepts a chain switch, since
/// every signal and session built against the old chain is stale.
pub fn reload_page() {
    let _ = window().location().reload();
}

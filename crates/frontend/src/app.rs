use crate::layout::shell::Shell;
use crate::shared::state::ui_store::UiStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the UI preference store to the whole app via context.
    let store = UiStore::new();
    store.init_router_integration();
    provide_context(store);

    view! {
        <Shell />
    }
}

use leptos::prelude::*;

use crate::shared::components::search_input::SearchInput;
use crate::shared::state::ui_store::use_ui;

#[component]
pub fn Header() -> impl IntoView {
    let ui = use_ui();

    view! {
        <header class="app-header">
            <button
                class="app-header__menu-btn"
                on:click=move |_| ui.toggle_sidebar()
                title="Mostrar/ocultar menú"
            >
                "☰"
            </button>
            <div class="app-header__title">{move || ui.active_page.get().title()}</div>
            <div class="app-header__actions">
                <SearchInput
                    value=ui.search_query
                    on_change=Callback::new(move |q| ui.set_search_query(q))
                    placeholder="Buscar en la página..."
                />
                <button
                    class="app-header__theme-btn"
                    on:click=move |_| ui.toggle_dark_mode()
                    title="Cambiar tema"
                >
                    {move || if ui.dark_mode.get() { "☀" } else { "🌙" }}
                </button>
            </div>
        </header>
    }
}

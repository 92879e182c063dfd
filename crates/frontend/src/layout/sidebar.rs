use leptos::prelude::*;

use crate::shared::state::ui_store::{use_ui, Page};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = use_ui();

    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__brand">"Panel BI"</div>
            <nav class="app-sidebar__nav">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        let is_active = move || ui.active_page.get() == page;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "app-sidebar__item active"
                                    } else {
                                        "app-sidebar__item"
                                    }
                                }
                                on:click=move |_| ui.navigate(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

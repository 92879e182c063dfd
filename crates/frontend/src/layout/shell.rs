use leptos::prelude::*;

use crate::dashboards::financial::AnalisisFinancieroPage;
use crate::dashboards::home::DashboardPage;
use crate::dashboards::sales_summary::ResumenVentasPage;
use crate::dashboards::vendors::VendedoresPage;
use crate::domain::clients::ClientsPage;
use crate::domain::companies::CompaniesPage;
use crate::domain::facturas::FacturasPage;
use crate::domain::pedidos::PedidosPage;
use crate::domain::products::ProductsPage;
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::shared::state::ui_store::{use_ui, Page};

/// Application frame: sidebar, header and the active page.
#[component]
pub fn Shell() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div class="app-shell">
            <Show when=move || ui.sidebar_open.get()>
                <Sidebar />
            </Show>
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    {move || match ui.active_page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Clients => view! { <ClientsPage /> }.into_any(),
                        Page::Companies => view! { <CompaniesPage /> }.into_any(),
                        Page::Products => view! { <ProductsPage /> }.into_any(),
                        Page::Pedidos => view! { <PedidosPage /> }.into_any(),
                        Page::Facturas => view! { <FacturasPage /> }.into_any(),
                        Page::ResumenVentas => view! { <ResumenVentasPage /> }.into_any(),
                        Page::Vendedores => view! { <VendedoresPage /> }.into_any(),
                        Page::AnalisisFinanciero => view! { <AnalisisFinancieroPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

//! Overview dashboard: master-data counters and two distributions.

use contracts::domain::client::Client;
use contracts::domain::company::Company;
use contracts::domain::product::Product;
use contracts::shared::aggregation::group_and_sum;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::clients::api::fetch_clients;
use crate::domain::companies::api::fetch_companies;
use crate::domain::products::api::fetch_products;
use crate::shared::components::bar_list::BarList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format_utils::format_number;

type Loaded<T> = Option<Result<Vec<T>, String>>;

fn count_card<T>(data: Loaded<T>) -> (Option<String>, bool) {
    match data {
        None => (None, false),
        Some(Ok(list)) => (Some(format_number(Some(list.len() as f64), 0)), false),
        Some(Err(_)) => (Some("Error".to_string()), true),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (clients, set_clients) = signal(None::<Result<Vec<Client>, String>>);
    let (companies, set_companies) = signal(None::<Result<Vec<Company>, String>>);
    let (products, set_products) = signal(None::<Result<Vec<Product>, String>>);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = fetch_clients().await;
            if let Err(e) = &result {
                log::error!("Error al cargar clientes: {}", e);
            }
            set_clients.set(Some(result));
        });
        spawn_local(async move {
            let result = fetch_companies().await;
            if let Err(e) = &result {
                log::error!("Error al cargar compañías: {}", e);
            }
            set_companies.set(Some(result));
        });
        spawn_local(async move {
            let result = fetch_products().await;
            if let Err(e) = &result {
                log::error!("Error al cargar productos: {}", e);
            }
            set_products.set(Some(result));
        });
    });

    let clients_card = Signal::derive(move || count_card(clients.get()));
    let products_card = Signal::derive(move || count_card(products.get()));
    let active_companies_card = Signal::derive(move || match companies.get() {
        None => (None, false),
        Some(Ok(list)) => {
            let active = list.iter().filter(|c| c.is_active()).count();
            (Some(format_number(Some(active as f64), 0)), false)
        }
        Some(Err(_)) => (Some("Error".to_string()), true),
    });

    // Product operation indicators as a distribution.
    let product_indicators = Signal::derive(move || match products.get() {
        Some(Ok(list)) => vec![
            (
                "Indicador Compra".to_string(),
                list.iter().filter(|p| p.ind_compra).count() as f64,
            ),
            (
                "Indicador Venta".to_string(),
                list.iter().filter(|p| p.ind_venta).count() as f64,
            ),
            (
                "Indicador Manufactura".to_string(),
                list.iter().filter(|p| p.ind_manufactura).count() as f64,
            ),
        ],
        _ => Vec::new(),
    });

    // Companies per last closed fiscal year, chronological. Companies
    // that never closed a year are left out.
    let companies_by_year = Signal::derive(move || match companies.get() {
        Some(Ok(list)) => {
            let closed: Vec<&Company> =
                list.iter().filter(|c| c.f010_ult_ano_cerrado > 0).collect();
            let mut groups = group_and_sum(
                &closed,
                |c| Some(c.f010_ult_ano_cerrado.to_string()),
                |_| 1.0,
                "Sin Año",
            );
            groups.sort_by(|a, b| a.0.cmp(&b.0));
            groups
        }
        _ => Vec::new(),
    });

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle="Resumen general de clientes, compañías y productos"
            />

            <div class="stat-grid">
                <StatCard
                    label="Total Clientes"
                    value=Signal::derive(move || clients_card.get().0)
                    has_error=Signal::derive(move || clients_card.get().1)
                />
                <StatCard
                    label="Compañías Activas"
                    value=Signal::derive(move || active_companies_card.get().0)
                    has_error=Signal::derive(move || active_companies_card.get().1)
                />
                <StatCard
                    label="Total Productos"
                    value=Signal::derive(move || products_card.get().0)
                    has_error=Signal::derive(move || products_card.get().1)
                />
            </div>

            <div class="page__grid">
                <section class="card">
                    <h2>"Productos por Indicadores"</h2>
                    <BarList
                        items=product_indicators
                        format_value=|v| format_number(Some(v), 0)
                        show_percent=true
                    />
                </section>
                <section class="card">
                    <h2>"Compañías por Año"</h2>
                    <BarList
                        items=companies_by_year
                        format_value=|v| format_number(Some(v), 0)
                    />
                </section>
            </div>
        </div>
    }
}

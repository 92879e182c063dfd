//! Vendor performance dashboard with center/company filters.

use contracts::domain::sales::Vendor;
use contracts::shared::aggregation::{distinct_values, group_and_sum, top_n};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::bar_list::BarList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format_utils::{format_currency, truncate};
use crate::shared::state::ui_store::use_ui;

const FALLBACK_NAME: &str = "Sin Nombre";
const FALLBACK_DELIVERY: &str = "Sin Tipo";

/// Combined subtotal/net totals per vendor, ranked by net value.
fn combined_totals(vendors: &[Vendor], n: usize) -> Vec<(String, f64, f64, f64)> {
    let subtotals = group_and_sum(
        vendors,
        |v: &Vendor| Some(v.nombre_vendedor.clone()),
        |v| v.valor_subtotal,
        FALLBACK_NAME,
    );
    let netos = group_and_sum(
        vendors,
        |v: &Vendor| Some(v.nombre_vendedor.clone()),
        |v| v.valor_neto,
        FALLBACK_NAME,
    );

    top_n(&netos, n)
        .into_iter()
        .map(|(nombre, neto)| {
            let subtotal = subtotals
                .iter()
                .find(|(k, _)| k == &nombre)
                .map(|(_, v)| *v)
                .unwrap_or(0.0);
            (truncate(&nombre, 20), subtotal, neto, neto - subtotal)
        })
        .collect()
}

#[component]
pub fn VendedoresPage() -> impl IntoView {
    let ui = use_ui();

    let (vendors, set_vendors) = signal(Vec::<Vendor>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    // "all" selects everything, any other value is an exact match.
    let (selected_center, set_selected_center) = signal("all".to_string());
    let (selected_company, set_selected_company) = signal(
        ui.selected_company
            .get_untracked()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "all".to_string()),
    );

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_vendors().await {
                Ok(rows) => {
                    set_vendors.set(rows);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error al cargar vendedores: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| load());

    let filtered = Signal::derive(move || {
        let center = selected_center.get();
        let company = selected_company.get();
        vendors
            .get()
            .into_iter()
            .filter(|v| center == "all" || v.centro_op == center)
            .filter(|v| company == "all" || v.compania.to_string() == company)
            .collect::<Vec<_>>()
    });

    let centers = Signal::derive(move || {
        let rows = vendors.get();
        let mut values = distinct_values(&rows, |v: &Vendor| Some(v.centro_op.clone()));
        values.sort();
        values
    });
    let companies = Signal::derive(move || {
        let rows = vendors.get();
        let mut values: Vec<i64> = distinct_values(&rows, |v: &Vendor| {
            Some(v.compania.to_string())
        })
        .into_iter()
        .filter_map(|c| c.parse().ok())
        .collect();
        values.sort_unstable();
        values
    });

    // Top 15 vendors by net value.
    let sales_by_vendor = Signal::derive(move || {
        let rows = filtered.get();
        let groups = group_and_sum(
            &rows,
            |v: &Vendor| Some(v.nombre_vendedor.clone()),
            |v| v.valor_neto,
            FALLBACK_NAME,
        );
        top_n(&groups, 15)
            .into_iter()
            .map(|(nombre, total)| (truncate(&nombre, 25), total))
            .collect::<Vec<_>>()
    });

    // Net value split by delivery type.
    let delivery_types = Signal::derive(move || {
        let rows = filtered.get();
        group_and_sum(
            &rows,
            |v: &Vendor| Some(v.tipo_entrega.clone()),
            |v| v.valor_neto,
            FALLBACK_DELIVERY,
        )
    });

    let combined = Signal::derive(move || combined_totals(&filtered.get(), 10));

    let total_neto = Signal::derive(move || {
        filtered.with(|rows| rows.iter().map(|v| v.valor_neto).sum::<f64>())
    });

    view! {
        <div class="page">
            <PageHeader
                title="Vendedores"
                subtitle="Desempeño por vendedor, tipo de entrega y centro de operación"
            />

            <div class="filter-card">
                <label>
                    "Centro de Operación"
                    <select on:change=move |ev| set_selected_center.set(event_target_value(&ev))>
                        <option value="all" selected=move || selected_center.get() == "all">
                            "Todos"
                        </option>
                        {move || {
                            centers
                                .get()
                                .into_iter()
                                .map(|center| {
                                    let value = center.clone();
                                    let is_selected =
                                        move || selected_center.get() == value;
                                    view! {
                                        <option value=center.clone() selected=is_selected>
                                            {center.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label>
                    "Compañía"
                    <select on:change=move |ev| set_selected_company.set(event_target_value(&ev))>
                        <option value="all" selected=move || selected_company.get() == "all">
                            "Todas"
                        </option>
                        {move || {
                            companies
                                .get()
                                .into_iter()
                                .map(|company| {
                                    let value = company.to_string();
                                    let option_value = value.clone();
                                    let is_selected =
                                        move || selected_company.get() == value;
                                    view! {
                                        <option value=option_value selected=is_selected>
                                            {company.to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <button
                    class="btn-secondary"
                    on:click=move |_| {
                        set_selected_center.set("all".to_string());
                        set_selected_company.set("all".to_string());
                        ui.set_selected_company(None);
                    }
                >
                    "Limpiar Filtros"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="page__loading">"Cargando vendedores..."</div> }
                        .into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <div class="page__error">
                            <p>"No se pudieron obtener los datos"</p>
                            <p class="page__error-detail">{err}</p>
                            <button on:click=move |_| load()>"Reintentar"</button>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div>
                        <div class="stat-grid">
                            <StatCard
                                label="Ventas Netas (filtro actual)"
                                value=Signal::derive(move || {
                                    Some(format_currency(Some(total_neto.get())))
                                })
                            />
                            <StatCard
                                label="Registros"
                                value=Signal::derive(move || {
                                    Some(filtered.get().len().to_string())
                                })
                            />
                        </div>

                        <div class="page__grid">
                            <section class="card">
                                <h2>"Valor Neto por Vendedor (Top 15)"</h2>
                                <BarList
                                    items=sales_by_vendor
                                    format_value=|v| format_currency(Some(v))
                                />
                            </section>
                            <section class="card">
                                <h2>"Distribución por Tipo de Entrega"</h2>
                                <BarList
                                    items=delivery_types
                                    format_value=|v| format_currency(Some(v))
                                    show_percent=true
                                />
                            </section>
                            <section class="card">
                                <h2>"Subtotal vs Valor Neto (Top 10)"</h2>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Vendedor"</th>
                                            <th>"Valor Subtotal"</th>
                                            <th>"Valor Neto"</th>
                                            <th>"Margen"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            combined
                                                .get()
                                                .into_iter()
                                                .map(|(nombre, subtotal, neto, margen)| {
                                                    view! {
                                                        <tr>
                                                            <td>{nombre}</td>
                                                            <td class="num">
                                                                {format_currency(Some(subtotal))}
                                                            </td>
                                                            <td class="num">
                                                                {format_currency(Some(neto))}
                                                            </td>
                                                            <td class="num">
                                                                {format_currency(Some(margen))}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </tbody>
                                </table>
                            </section>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

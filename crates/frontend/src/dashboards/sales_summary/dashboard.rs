//! Sales summary dashboard.
//!
//! Every view here is a derivation over the same fetched record set:
//! vendor totals, shares of the total, per-hour evolution and the
//! vendor/document-type unit matrix.

use contracts::domain::sales::SalesSummary;
use contracts::shared::aggregation::{distinct_values, group_and_sum, top_n};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

use super::api;
use crate::shared::components::bar_list::BarList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format_utils::{
    format_currency, format_number, hour_bucket, truncate,
};

const FALLBACK_VENDOR: &str = "Sin Vendedor";
const FALLBACK_PRODUCT: &str = "Sin Producto";

/// Unit totals per vendor broken down by document type. Vendors beyond
/// the first eight distinct ones are left out, like the source report.
fn units_matrix(sales: &[SalesSummary]) -> (Vec<String>, Vec<(String, Vec<f64>)>) {
    let vendors: Vec<String> = distinct_values(sales, |s: &SalesSummary| {
        Some(s.vendedor.clone())
    })
    .into_iter()
    .take(8)
    .collect();
    let doc_types = distinct_values(sales, |s: &SalesSummary| {
        Some(s.grupo_clase_docto.clone())
    });

    let rows = vendors
        .into_iter()
        .map(|vendor| {
            let cells = doc_types
                .iter()
                .map(|doc_type| {
                    sales
                        .iter()
                        .filter(|s| s.vendedor == vendor && &s.grupo_clase_docto == doc_type)
                        .map(|s| s.unidades)
                        .sum()
                })
                .collect();
            (truncate(&vendor, 20), cells)
        })
        .collect();

    (doc_types, rows)
}

#[component]
pub fn ResumenVentasPage() -> impl IntoView {
    let (sales, set_sales) = signal(Vec::<SalesSummary>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_sales_summary().await {
                Ok(rows) => {
                    set_sales.set(rows);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error al cargar resumen de ventas: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| load());

    // Net value per vendor, ranked.
    let sales_by_vendor = Signal::derive(move || {
        let rows = sales.get();
        let groups = group_and_sum(
            &rows,
            |s: &SalesSummary| Some(s.vendedor.clone()),
            |s| s.valor_neto,
            FALLBACK_VENDOR,
        );
        top_n(&groups, groups.len())
            .into_iter()
            .map(|(vendor, total)| (truncate(&vendor, 25), total))
            .collect::<Vec<_>>()
    });

    // Net value per hour of day, chronological.
    let sales_by_hour = Signal::derive(move || {
        let rows = sales.get();
        let mut groups = group_and_sum(
            &rows,
            |s: &SalesSummary| hour_bucket(&s.fecha_documento),
            |s| s.valor_neto,
            "Sin Hora",
        );
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        groups
    });

    let matrix = Signal::derive(move || units_matrix(&sales.get()));

    let total_ventas = Signal::derive(move || {
        sales.with(|rows| rows.iter().map(|s| s.valor_neto).sum::<f64>())
    });
    let total_unidades = Signal::derive(move || {
        sales.with(|rows| rows.iter().map(|s| s.unidades).sum::<f64>())
    });
    let documentos_unicos = Signal::derive(move || {
        sales.with(|rows| {
            rows.iter()
                .map(|s| s.guid_documento)
                .collect::<HashSet<_>>()
                .len()
        })
    });
    let top_vendor = Signal::derive(move || sales_by_vendor.get().into_iter().next());
    let top_product = Signal::derive(move || {
        let rows = sales.get();
        let groups = group_and_sum(
            &rows,
            |s: &SalesSummary| Some(s.item_resumen.clone()),
            |s| s.unidades,
            FALLBACK_PRODUCT,
        );
        top_n(&groups, 1).into_iter().next()
    });

    view! {
        <div class="page">
            <PageHeader
                title="Resumen de Ventas"
                subtitle="Ventas consolidadas del día por vendedor, hora y tipo de documento"
            />

            {move || {
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
                if loading.get() {
                    return view! {
                        <div class="page__loading">"Cargando resumen de ventas..."</div>
                    }
                    .into_any();
                }
                view! {
                    <div>
                        <div class="stat-grid">
                            <StatCard
                                label="Ventas Totales"
                                value=Signal::derive(move || {
                                    Some(format_currency(Some(total_ventas.get())))
                                })
                            />
                            <StatCard
                                label="Unidades Vendidas"
                                value=Signal::derive(move || {
                                    Some(format_number(Some(total_unidades.get()), 0))
                                })
                            />
                            <StatCard
                                label="Documentos Únicos"
                                value=Signal::derive(move || {
                                    Some(format_number(Some(documentos_unicos.get() as f64), 0))
                                })
                            />
                            <StatCard
                                label="Vendedor Top"
                                value=Signal::derive(move || {
                                    top_vendor.get().map(|(vendor, _)| vendor)
                                })
                                subtitle=Signal::derive(move || {
                                    top_vendor
                                        .get()
                                        .map(|(_, total)| format_currency(Some(total)))
                                })
                            />
                            <StatCard
                                label="Producto Top"
                                value=Signal::derive(move || {
                                    top_product.get().map(|(name, _)| truncate(&name, 25))
                                })
                                subtitle=Signal::derive(move || {
                                    top_product.get().map(|(_, units)| {
                                        format!("{} unidades", format_number(Some(units), 0))
                                    })
                                })
                            />
                        </div>

                        <div class="page__grid">
                            <section class="card">
                                <h2>"Ventas por Vendedor"</h2>
                                <BarList
                                    items=sales_by_vendor
                                    format_value=|v| format_currency(Some(v))
                                />
                            </section>
                            <section class="card">
                                <h2>"Distribución del Total por Vendedor"</h2>
                                <BarList
                                    items=sales_by_vendor
                                    format_value=|v| format_currency(Some(v))
                                    show_percent=true
                                />
                            </section>
                            <section class="card">
                                <h2>"Evolución del Valor Neto por Hora"</h2>
                                <BarList
                                    items=sales_by_hour
                                    format_value=|v| format_currency(Some(v))
                                />
                            </section>
                            <section class="card">
                                <h2>"Unidades por Vendedor y Tipo de Documento"</h2>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Vendedor"</th>
                                            {move || {
                                                matrix
                                                    .get()
                                                    .0
                                                    .into_iter()
                                                    .map(|doc_type| view! { <th>{doc_type}</th> })
                                                    .collect_view()
                                            }}
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            matrix
                                                .get()
                                                .1
                                                .into_iter()
                                                .map(|(vendor, cells)| {
                                                    view! {
                                                        <tr>
                                                            <td>{vendor}</td>
                                                            {cells
                                                                .into_iter()
                                                                .map(|units| {
                                                                    view! {
                                                                        <td class="num">
                                                                            {format_number(Some(units), 0)}
                                                                        </td>
                                                                    }
                                                                })
                                                                .collect_view()}
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

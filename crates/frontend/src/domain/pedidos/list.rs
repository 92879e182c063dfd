use chrono::Utc;
use contracts::domain::order::{DailyOrder, PedidosParams};
use contracts::shared::aggregation::group_and_sum;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use super::api;
use crate::shared::components::bar_list::BarList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::format_utils::{format_date, format_number, hour_bucket};
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::state::ui_store::use_ui;

impl Searchable for DailyOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.estado.to_lowercase().contains(&filter)
            || self.desc_co.to_lowercase().contains(&filter)
            || self.id_co.to_lowercase().contains(&filter)
    }
}

impl Sortable for DailyOrder {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "estado" => self.estado.cmp(&other.estado),
            "centro" => self.desc_co.cmp(&other.desc_co),
            "hora" => self.hora_creacion_dt.cmp(&other.hora_creacion_dt),
            _ => self.fecha_docto.cmp(&other.fecha_docto),
        }
    }
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[component]
pub fn PedidosPage() -> impl IntoView {
    let ui = use_ui();

    let (fecha_inicial, set_fecha_inicial) = signal(today());
    let (fecha_final, set_fecha_final) = signal(today());
    let (items, set_items) = signal(Vec::<DailyOrder>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (searched, set_searched) = signal(false);
    let (sort_field, set_sort_field) = signal("hora".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let load = move || {
        let params = PedidosParams {
            fecha_inicial: fecha_inicial.get_untracked(),
            fecha_final: fecha_final.get_untracked(),
        };
        set_loading.set(true);
        set_error.set(None);
        set_searched.set(true);
        spawn_local(async move {
            match api::fetch_pedidos(&params).await {
                Ok(pedidos) => {
                    set_items.set(pedidos);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error al cargar pedidos: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    let visible = move || {
        let mut rows = filter_list(items.get(), &ui.search_query.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    // Order volume per hour of day, in chronological order.
    let orders_by_hour = Signal::derive(move || {
        let mut groups = group_and_sum(
            &items.get(),
            |o: &DailyOrder| hour_bucket(&o.hora_creacion_dt),
            |_| 1.0,
            "Sin Hora",
        );
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        groups
    });

    let header = move |label: &'static str, field: &'static str| {
        let on_click =
            create_sort_toggle(field, sort_field.into(), set_sort_field, set_sort_ascending);
        view! {
            <th on:click=on_click>
                {label}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title="Pedidos"
                subtitle="Pedidos del día por centro de operación"
            />

            <div class="filter-card">
                <label>
                    "Fecha Inicial"
                    <input
                        type="date"
                        prop:value=move || fecha_inicial.get()
                        on:input=move |ev| set_fecha_inicial.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Fecha Final"
                    <input
                        type="date"
                        prop:value=move || fecha_final.get()
                        on:input=move |ev| set_fecha_final.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn-primary" on:click=move |_| load()>
                    "Buscar Pedidos"
                </button>
            </div>

            {move || {
                if !searched.get() {
                    return view! {
                        <div class="page__hint">"Seleccione un rango de fechas y busque"</div>
                    }
                    .into_any();
                }
                if loading.get() {
                    return view! { <div class="page__loading">"Cargando pedidos..."</div> }
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
                    <div class="page__grid">
                        <section class="card">
                            <h2>"Pedidos por Hora"</h2>
                            <BarList
                                items=orders_by_hour
                                format_value=|v| format_number(Some(v), 0)
                            />
                        </section>
                        <section class="card">
                            <h2>{move || format!("Pedidos ({})", items.get().len())}</h2>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        {header("Fecha", "fecha")}
                                        {header("Hora", "hora")}
                                        <th>"ID CO"</th>
                                        {header("Centro", "centro")}
                                        {header("Estado", "estado")}
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        visible()
                                            .into_iter()
                                            .map(|order| {
                                                view! {
                                                    <tr>
                                                        <td>{format_date(&order.fecha_docto)}</td>
                                                        <td>{order.hora_creacion.clone()}</td>
                                                        <td>{order.id_co.clone()}</td>
                                                        <td>{order.desc_co.clone()}</td>
                                                        <td>{order.estado.clone()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                        </section>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

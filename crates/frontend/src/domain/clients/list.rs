use contracts::domain::client::Client;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use super::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::format_utils::{format_currency, format_date};
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::state::ui_store::use_ui;

impl Searchable for Client {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.nombre.to_lowercase().contains(&filter)
            || self.apellido.to_lowercase().contains(&filter)
            || self.email.to_lowercase().contains(&filter)
            || self.telefono.contains(&filter)
    }
}

impl Sortable for Client {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self.email.cmp(&other.email),
            "fecha_registro" => self.fecha_registro.cmp(&other.fecha_registro),
            "total_compras" => self
                .total_compras
                .partial_cmp(&other.total_compras)
                .unwrap_or(Ordering::Equal),
            "estado" => self.estado.cmp(&other.estado),
            _ => self.full_name().cmp(&other.full_name()),
        }
    }
}

fn estado_class(estado: &str) -> &'static str {
    match estado {
        "activo" => "badge badge--ok",
        "suspendido" => "badge badge--danger",
        _ => "badge badge--muted",
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let ui = use_ui();

    let (items, set_items) = signal(Vec::<Client>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (sort_field, set_sort_field) = signal("nombre".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(clients) => {
                    set_items.set(clients);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error al cargar clientes: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| load());

    let visible = move || {
        let filtered = filter_list(items.get(), &ui.search_query.get());
        let mut rows = filtered;
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

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
                title="Clientes"
                subtitle="Listado y estado de los clientes registrados"
            />

            {move || {
                if loading.get() {
                    view! { <div class="page__loading">"Cargando clientes..."</div> }.into_any()
                } else if let Some(err) = error.get() {
                    view! {
                        <div class="page__error">
                            <p>"No se pudieron obtener los datos"</p>
                            <p class="page__error-detail">{err}</p>
                            <button on:click=move |_| load()>"Reintentar"</button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    {header("Nombre", "nombre")}
                                    {header("Email", "email")}
                                    <th>"Teléfono"</th>
                                    {header("Registro", "fecha_registro")}
                                    {header("Total Compras", "total_compras")}
                                    {header("Estado", "estado")}
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    visible()
                                        .into_iter()
                                        .map(|client| {
                                            view! {
                                                <tr>
                                                    <td>{client.full_name()}</td>
                                                    <td>{client.email.clone()}</td>
                                                    <td>{client.telefono.clone()}</td>
                                                    <td>{format_date(&client.fecha_registro)}</td>
                                                    <td class="num">
                                                        {format_currency(Some(client.total_compras))}
                                                    </td>
                                                    <td>
                                                        <span class=estado_class(&client.estado)>
                                                            {client.estado.clone()}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

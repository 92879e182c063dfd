use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use super::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::format_utils::format_currency;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::state::ui_store::use_ui;

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.referencia.to_lowercase().contains(&filter)
            || self.descripcion.to_lowercase().contains(&filter)
            || self.categoria.to_lowercase().contains(&filter)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "referencia" => self.referencia.cmp(&other.referencia),
            "precio" => self.precio.partial_cmp(&other.precio).unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(&other.stock),
            "categoria" => self.categoria.cmp(&other.categoria),
            _ => self.descripcion.cmp(&other.descripcion),
        }
    }
}

fn indicator(active: bool) -> &'static str {
    if active {
        "Sí"
    } else {
        "No"
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let ui = use_ui();

    let (items, set_items) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (sort_field, set_sort_field) = signal("descripcion".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(products) => {
                    set_items.set(products);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error al cargar productos: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| load());

    let visible = move || {
        let mut rows = filter_list(items.get(), &ui.search_query.get());
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
                title="Productos"
                subtitle="Catálogo de productos con indicadores de operación"
            />

            {move || {
                if loading.get() {
                    view! { <div class="page__loading">"Cargando productos..."</div> }.into_any()
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
                                    {header("Referencia", "referencia")}
                                    {header("Descripción", "descripcion")}
                                    {header("Precio", "precio")}
                                    {header("Stock", "stock")}
                                    {header("Categoría", "categoria")}
                                    <th>"Compra"</th>
                                    <th>"Venta"</th>
                                    <th>"Manufactura"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    visible()
                                        .into_iter()
                                        .map(|product| {
                                            view! {
                                                <tr>
                                                    <td>{product.referencia.clone()}</td>
                                                    <td>{product.descripcion.clone()}</td>
                                                    <td class="num">
                                                        {format_currency(Some(product.precio))}
                                                    </td>
                                                    <td class="num">{product.stock}</td>
                                                    <td>{product.categoria.clone()}</td>
                                                    <td>{indicator(product.ind_compra)}</td>
                                                    <td>{indicator(product.ind_venta)}</td>
                                                    <td>{indicator(product.ind_manufactura)}</td>
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

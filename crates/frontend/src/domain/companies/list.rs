use contracts::domain::company::Company;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use super::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::state::ui_store::use_ui;

impl Searchable for Company {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.f010_razon_social.to_lowercase().contains(&filter)
            || self.f010_nit.contains(&filter)
    }
}

impl Sortable for Company {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nit" => self.f010_nit.cmp(&other.f010_nit),
            "estado" => self.f010_ind_estado.cmp(&other.f010_ind_estado),
            "ano_cerrado" => self.f010_ult_ano_cerrado.cmp(&other.f010_ult_ano_cerrado),
            _ => self.f010_razon_social.cmp(&other.f010_razon_social),
        }
    }
}

/// Company list. Clicking a row selects the company for the
/// vendor report filters.
#[component]
pub fn CompaniesPage() -> impl IntoView {
    let ui = use_ui();

    let (items, set_items) = signal(Vec::<Company>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (sort_field, set_sort_field) = signal("razon_social".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_companies().await {
                Ok(companies) => {
                    set_items.set(companies);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error al cargar compañías: {}", e);
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
                title="Compañías"
                subtitle="Compañías registradas en el ERP"
            />

            {move || {
                if loading.get() {
                    view! { <div class="page__loading">"Cargando compañías..."</div> }.into_any()
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
                                    {header("Razón Social", "razon_social")}
                                    {header("NIT", "nit")}
                                    {header("Estado", "estado")}
                                    {header("Último Año Cerrado", "ano_cerrado")}
                                    <th>"Email"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let selected = ui.selected_company.get();
                                    visible()
                                        .into_iter()
                                        .map(|company| {
                                            let id = company.f010_id;
                                            let row_class = if selected == Some(id) {
                                                "selected"
                                            } else {
                                                ""
                                            };
                                            view! {
                                                <tr
                                                    class=row_class
                                                    on:click=move |_| {
                                                        ui.set_selected_company(Some(id))
                                                    }
                                                >
                                                    <td>{company.f010_razon_social.clone()}</td>
                                                    <td>{company.f010_nit.clone()}</td>
                                                    <td>
                                                        <span class=if company.is_active() {
                                                            "badge badge--ok"
                                                        } else {
                                                            "badge badge--muted"
                                                        }>
                                                            {if company.is_active() {
                                                                "Activa"
                                                            } else {
                                                                "Inactiva"
                                                            }}
                                                        </span>
                                                    </td>
                                                    <td class="num">
                                                        {if company.f010_ult_ano_cerrado > 0 {
                                                            company.f010_ult_ano_cerrado.to_string()
                                                        } else {
                                                            "N/A".to_string()
                                                        }}
                                                    </td>
                                                    <td>
                                                        {company
                                                            .f010_email
                                                            .clone()
                                                            .unwrap_or_else(|| "N/A".to_string())}
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

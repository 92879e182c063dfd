use contracts::domain::factura::FacturasParams;
use contracts::shared::columns::{infer_columns, Column};
use contracts::shared::records::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::RecordTable;
use crate::shared::format_utils::format_periodo;

/// Parses a YYYYMM text field; anything non-numeric or longer than six
/// digits is ignored.
fn parse_periodo(input: &str) -> Option<u32> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || digits.len() > 6 {
        return None;
    }
    digits.parse().ok()
}

/// Invoice search with dynamic columns: the first row of each result
/// defines the table schema.
#[component]
pub fn FacturasPage() -> impl IntoView {
    let (periodo_inicial, set_periodo_inicial) = signal("202401".to_string());
    let (periodo_final, set_periodo_final) = signal("202412".to_string());
    let (page, set_page) = signal(1u32);
    let (page_size, set_page_size) = signal(1000u32);

    let (records, set_records) = signal(Vec::<Record>::new());
    let (total, set_total) = signal(None::<u64>);
    let (total_pages, set_total_pages) = signal(None::<u32>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (searched, set_searched) = signal(false);

    let load = move || {
        let params = FacturasParams {
            periodo_inicial: parse_periodo(&periodo_inicial.get_untracked()),
            periodo_final: parse_periodo(&periodo_final.get_untracked()),
            page: Some(page.get_untracked().max(1)),
            page_size: Some(page_size.get_untracked().clamp(1, 5000)),
        };
        set_loading.set(true);
        set_error.set(None);
        set_searched.set(true);
        spawn_local(async move {
            match api::fetch_facturas(&params).await {
                Ok(response) => {
                    set_total.set(response.total);
                    set_total_pages.set(response.total_pages);
                    set_records.set(response.data);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error al obtener facturas: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Column set follows the data: first record's keys, in order.
    let columns = Signal::derive(move || {
        records.with(|r| infer_columns(r, &[], &[]))
    });

    let periodo_hint = move |value: ReadSignal<String>| {
        parse_periodo(&value.get()).map(|p| {
            view! { <p class="filter-card__hint">{format_periodo(p)}</p> }
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title="Gestión de Ventas"
                subtitle="Consulta y gestión de facturas de ventas"
            />

            <div class="filter-card">
                <label>
                    "Periodo Inicial (YYYYMM)"
                    <input
                        type="text"
                        maxlength="6"
                        placeholder="202401"
                        prop:value=move || periodo_inicial.get()
                        on:input=move |ev| set_periodo_inicial.set(event_target_value(&ev))
                    />
                    {move || periodo_hint(periodo_inicial)}
                </label>
                <label>
                    "Periodo Final (YYYYMM)"
                    <input
                        type="text"
                        maxlength="6"
                        placeholder="202412"
                        prop:value=move || periodo_final.get()
                        on:input=move |ev| set_periodo_final.set(event_target_value(&ev))
                    />
                    {move || periodo_hint(periodo_final)}
                </label>
                <label>
                    "Página"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || page.get().to_string()
                        on:input=move |ev| {
                            set_page.set(event_target_value(&ev).parse().unwrap_or(1).max(1))
                        }
                    />
                </label>
                <label>
                    "Registros por página (Máx. 5000)"
                    <input
                        type="number"
                        min="1"
                        max="5000"
                        prop:value=move || page_size.get().to_string()
                        on:input=move |ev| {
                            let value: u32 = event_target_value(&ev).parse().unwrap_or(1000);
                            set_page_size.set(value.clamp(1, 5000));
                        }
                    />
                </label>
                <button class="btn-primary" on:click=move |_| load()>
                    "Buscar Facturas"
                </button>
            </div>

            {move || {
                if !searched.get() {
                    return view! { <></> }.into_any();
                }
                if loading.get() {
                    return view! { <div class="page__loading">"Cargando facturas..."</div> }
                        .into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <div class="page__error">
                            <p>"Error al cargar facturas"</p>
                            <p class="page__error-detail">{err}</p>
                            <button on:click=move |_| load()>"Reintentar"</button>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <section class="card">
                        <h2>
                            {move || {
                                match (total.get(), total_pages.get()) {
                                    (Some(t), Some(tp)) => {
                                        format!(
                                            "Facturas ({} en total, página {} de {})",
                                            t,
                                            page.get(),
                                            tp,
                                        )
                                    }
                                    _ => format!("Facturas ({})", records.get().len()),
                                }
                            }}
                        </h2>
                        <RecordTable records=records columns=columns />
                    </section>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_periodo;

    #[test]
    fn parse_periodo_accepts_yyyymm() {
        assert_eq!(parse_periodo("202401"), Some(202401));
        assert_eq!(parse_periodo(" 2024"), Some(2024));
    }

    #[test]
    fn parse_periodo_rejects_long_or_empty() {
        assert_eq!(parse_periodo(""), None);
        assert_eq!(parse_periodo("20240101"), None);
        assert_eq!(parse_periodo("abc"), None);
    }
}

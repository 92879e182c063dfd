//! Financial analysis: statements, profit and loss, monthly trend.
//!
//! The statement rows are flexible-shape records; their table shows a
//! synthesized "Cuenta" column (code + name) that sorts by the account
//! code, with the raw code/name columns hidden.

use contracts::domain::financial::{PerdidasGanancias, PeriodoParams, TendenciaMensual};
use contracts::shared::columns::{infer_columns, Column};
use contracts::shared::records::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::facturas::api;
use crate::shared::components::bar_list::BarList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::RecordTable;
use crate::shared::format_utils::{format_currency, format_periodo};

/// Statement columns: synthesized account column up front, inferred
/// columns after it, raw account fields hidden.
fn estado_columns(records: &[Record]) -> Vec<Column> {
    if records.is_empty() {
        return Vec::new();
    }
    let mut columns = vec![Column::combined(
        "Cuenta",
        &["Código Cuenta", "Nombre de la Cuenta"],
        " - ",
        "Código Cuenta",
    )];
    columns.extend(infer_columns(
        records,
        &["Compañía", "Código Cuenta", "Nombre de la Cuenta"],
        &["Total Cuenta"],
    ));
    columns
}

#[component]
pub fn AnalisisFinancieroPage() -> impl IntoView {
    let (periodo_inicial, set_periodo_inicial) = signal("202401".to_string());
    let (periodo_final, set_periodo_final) = signal("202412".to_string());

    let (estados, set_estados) = signal(Vec::<Record>::new());
    let (perdidas, set_perdidas) = signal(Vec::<PerdidasGanancias>::new());
    let (tendencia, set_tendencia) = signal(Vec::<TendenciaMensual>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (searched, set_searched) = signal(false);

    let load = move || {
        let params = PeriodoParams {
            periodo_inicial: periodo_inicial.get_untracked().parse().ok(),
            periodo_final: periodo_final.get_untracked().parse().ok(),
        };
        set_loading.set(true);
        set_error.set(None);
        set_searched.set(true);
        spawn_local(async move {
            let estados_result = api::fetch_estados_financieros(&params).await;
            let perdidas_result = api::fetch_perdidas_ganancias(&params).await;
            let tendencia_result = api::fetch_tendencia_mensual(&params).await;

            match (estados_result, perdidas_result, tendencia_result) {
                (Ok(e), Ok(p), Ok(t)) => {
                    set_estados.set(e);
                    set_perdidas.set(p);
                    set_tendencia.set(t);
                    set_loading.set(false);
                }
                (e, p, t) => {
                    let first_error = [
                        e.err(),
                        p.err(),
                        t.err(),
                    ]
                    .into_iter()
                    .flatten()
                    .next()
                    .unwrap_or_else(|| "Error desconocido".to_string());
                    log::error!("Error al cargar análisis financiero: {}", first_error);
                    set_error.set(Some(first_error));
                    set_loading.set(false);
                }
            }
        });
    };

    let columns = Signal::derive(move || estados.with(|r| estado_columns(r)));

    // Profit per period for the trend bars.
    let utilidad_por_periodo = Signal::derive(move || {
        tendencia
            .get()
            .iter()
            .map(|t| (format_periodo(t.periodo), t.utilidad))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader
                title="Análisis Financiero"
                subtitle="Estados financieros, estado de resultados y tendencia mensual"
            />

            <div class="filter-card">
                <label>
                    "Periodo Inicial (YYYYMM)"
                    <input
                        type="text"
                        maxlength="6"
                        prop:value=move || periodo_inicial.get()
                        on:input=move |ev| set_periodo_inicial.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Periodo Final (YYYYMM)"
                    <input
                        type="text"
                        maxlength="6"
                        prop:value=move || periodo_final.get()
                        on:input=move |ev| set_periodo_final.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn-primary" on:click=move |_| load()>
                    "Consultar"
                </button>
            </div>

            {move || {
                if !searched.get() {
                    return view! {
                        <div class="page__hint">"Seleccione un rango de periodos y consulte"</div>
                    }
                    .into_any();
                }
                if loading.get() {
                    return view! {
                        <div class="page__loading">"Cargando análisis financiero..."</div>
                    }
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
                            <h2>"Estados Financieros"</h2>
                            <RecordTable records=estados columns=columns />
                        </section>
                        <section class="card">
                            <h2>"Estado de Resultados"</h2>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Tipo de Cuenta"</th>
                                        <th>"Cuenta"</th>
                                        <th>"Total"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        perdidas
                                            .get()
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <tr>
                                                        <td>{row.tipo_cuenta.clone()}</td>
                                                        <td>{row.cuenta.clone()}</td>
                                                        <td class="num">
                                                            {format_currency(Some(row.total))}
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </tbody>
                            </table>
                        </section>
                        <section class="card">
                            <h2>"Utilidad por Periodo"</h2>
                            <BarList
                                items=utilidad_por_periodo
                                format_value=|v| format_currency(Some(v))
                            />
                        </section>
                        <section class="card">
                            <h2>"Tendencia Mensual"</h2>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Periodo"</th>
                                        <th>"Ingresos"</th>
                                        <th>"Costos"</th>
                                        <th>"Gastos"</th>
                                        <th>"Utilidad"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        tendencia
                                            .get()
                                            .into_iter()
                                            .map(|t| {
                                                view! {
                                                    <tr>
                                                        <td>{format_periodo(t.periodo)}</td>
                                                        <td class="num">
                                                            {format_currency(Some(t.ingresos))}
                                                        </td>
                                                        <td class="num">
                                                            {format_currency(Some(t.costos))}
                                                        </td>
                                                        <td class="num">
                                                            {format_currency(Some(t.gastos))}
                                                        </td>
                                                        <td class="num">
                                                            {format_currency(Some(t.utilidad))}
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
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::estado_columns;
    use contracts::shared::columns::ColumnKind;
    use contracts::shared::records::Record;

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn estado_columns_empty_input() {
        assert!(estado_columns(&[]).is_empty());
    }

    #[test]
    fn estado_columns_combines_and_hides_account_fields() {
        let records = vec![record(
            r#"{"Compañía":1,"Código Cuenta":"1105","Nombre de la Cuenta":"Caja",
                "Nombre Compañía":"ACME","Total Cuenta":5000,"Saldo Inicial":100}"#,
        )];
        let columns = estado_columns(&records);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Cuenta", "Total Cuenta", "Nombre Compañía", "Saldo Inicial"]
        );
        assert!(matches!(columns[0].kind, ColumnKind::Combined { .. }));
    }
}

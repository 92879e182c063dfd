//! Invoice and financial-statement endpoints.
//!
//! Invoices and financial statements come back with no fixed schema,
//! so their rows stay flexible [`Record`]s; the profit-and-loss and
//! monthly-trend reports are typed.

use contracts::domain::factura::FacturasParams;
use contracts::domain::financial::{PerdidasGanancias, PeriodoParams, TendenciaMensual};
use contracts::shared::envelope::FacturasResponse;
use contracts::shared::records::Record;

use crate::shared::api_utils::{get_envelope, get_json, get_records, with_query};
use crate::shared::retry::with_retry;

/// Invoice search with period and paging filters.
pub async fn fetch_facturas(params: &FacturasParams) -> Result<FacturasResponse, String> {
    let path = with_query("/factura/facturas", params);
    let response = with_retry(|| get_json::<FacturasResponse>(&path)).await?;
    if !response.success {
        return Err("Respuesta inválida del servidor".to_string());
    }
    Ok(response)
}

/// Financial statements for a period range (flexible shape).
pub async fn fetch_estados_financieros(params: &PeriodoParams) -> Result<Vec<Record>, String> {
    let path = with_query("/factura/estados-financieros", params);
    with_retry(|| get_records(&path)).await
}

/// Profit and loss (estado de resultados) for a period range.
pub async fn fetch_perdidas_ganancias(
    params: &PeriodoParams,
) -> Result<Vec<PerdidasGanancias>, String> {
    let path = with_query("/factura/perdidas-ganancias", params);
    with_retry(|| get_envelope::<PerdidasGanancias>(&path)).await
}

/// Monthly income/cost/expense trend for a period range.
pub async fn fetch_tendencia_mensual(
    params: &PeriodoParams,
) -> Result<Vec<TendenciaMensual>, String> {
    let path = with_query("/factura/tendencia-mensual", params);
    with_retry(|| get_envelope::<TendenciaMensual>(&path)).await
}

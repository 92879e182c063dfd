use contracts::domain::order::{DailyOrder, PedidosParams};

use crate::shared::api_utils::{get_envelope, with_query};
use crate::shared::retry::with_retry;

/// Fetch the daily orders for a date range.
pub async fn fetch_pedidos(params: &PedidosParams) -> Result<Vec<DailyOrder>, String> {
    let path = with_query("/pedidos", params);
    with_retry(|| get_envelope::<DailyOrder>(&path)).await
}

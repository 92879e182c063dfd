use contracts::domain::sales::SalesSummary;

use crate::shared::api_utils::get_envelope;
use crate::shared::retry::with_retry;

/// Fetch the consolidated sales-summary report.
pub async fn fetch_sales_summary() -> Result<Vec<SalesSummary>, String> {
    with_retry(|| get_envelope::<SalesSummary>("/reports/sales-summary")).await
}

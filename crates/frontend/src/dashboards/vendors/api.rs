use contracts::domain::sales::Vendor;

use crate::shared::api_utils::get_envelope;
use crate::shared::retry::with_retry;

/// Fetch the vendor totals report.
pub async fn fetch_vendors() -> Result<Vec<Vendor>, String> {
    with_retry(|| get_envelope::<Vendor>("/reports/vendors")).await
}

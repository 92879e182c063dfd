use contracts::domain::company::Company;

use crate::shared::api_utils::get_envelope;
use crate::shared::retry::with_retry;

/// Fetch the full company list.
pub async fn fetch_companies() -> Result<Vec<Company>, String> {
    with_retry(|| get_envelope::<Company>("/companies")).await
}

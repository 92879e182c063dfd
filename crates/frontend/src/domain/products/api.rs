use contracts::domain::product::Product;

use crate::shared::api_utils::get_envelope;
use crate::shared::retry::with_retry;

/// Fetch the product catalog.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    with_retry(|| get_envelope::<Product>("/products")).await
}

use contracts::domain::client::Client;

use crate::shared::api_utils::get_envelope;
use crate::shared::retry::with_retry;

/// Fetch the full client list.
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    with_retry(|| get_envelope::<Client>("/clients")).await
}

//! API utilities for talking to the reporting service.
//!
//! Provides the base-URL helpers and the envelope-validating fetch
//! helpers used by the per-feature api modules.

use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::records::{records_from_json, Record};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests.
///
/// Defaults to the `/api` reverse-proxy path; a deployment can bake in
/// an absolute base with the `API_BASE_URL` compile-time variable.
pub fn api_base() -> String {
    match option_env!("API_BASE_URL") {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => "/api".to_string(),
    }
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/reports/vendors");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a raw JSON body. The transport owns its own timeout behavior;
/// this helper only maps transport and HTTP-status failures to strings.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET an `{ success, data }` envelope and unwrap its data array.
pub async fn get_envelope<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let envelope: ApiEnvelope<T> = get_json(path).await?;
    if !envelope.success {
        return Err("Respuesta inválida del servidor".to_string());
    }
    Ok(envelope.data)
}

/// GET an envelope whose rows have no fixed schema.
///
/// The array-of-objects precondition of the aggregation pipeline is
/// enforced here, before any derived view is computed.
pub async fn get_records(path: &str) -> Result<Vec<Record>, String> {
    let envelope: ApiEnvelope<serde_json::Value> = get_json(path).await?;
    if !envelope.success {
        return Err("Respuesta inválida del servidor".to_string());
    }
    records_from_json(serde_json::Value::Array(envelope.data)).map_err(|e| e.to_string())
}

/// Appends a `serde_qs`-encoded query to a path, omitting the `?` when
/// the parameter struct serializes to nothing.
pub fn with_query<P: serde::Serialize>(path: &str, params: &P) -> String {
    match serde_qs::to_string(params) {
        Ok(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::factura::FacturasParams;

    #[test]
    fn with_query_serializes_only_present_params() {
        let params = FacturasParams {
            periodo_inicial: Some(202401),
            periodo_final: Some(202412),
            page: None,
            page_size: Some(1000),
        };
        assert_eq!(
            with_query("/factura/facturas", &params),
            "/factura/facturas?periodoInicial=202401&periodoFinal=202412&pageSize=1000"
        );
    }

    #[test]
    fn with_query_keeps_path_when_empty() {
        let params = FacturasParams::default();
        assert_eq!(with_query("/factura/facturas", &params), "/factura/facturas");
    }
}

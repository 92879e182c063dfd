//! Wire envelopes of the reporting service.
//!
//! Every endpoint wraps its payload in `{ success, data }`; the invoice
//! search additionally carries paging metadata.

use serde::{Deserialize, Serialize};

use super::records::Record;

/// Standard `{ success, data }` response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Invoice search response: flexible-shape rows plus optional paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacturasResponse {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<Record>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_data() {
        let parsed: ApiEnvelope<i32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn facturas_response_reads_paging_fields() {
        let json = r#"{
            "success": true,
            "data": [{"Periodo": 202401, "Valor": 10.5}],
            "total": 120, "page": 2, "pageSize": 50, "totalPages": 3
        }"#;
        let parsed: FacturasResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.total, Some(120));
        assert_eq!(parsed.page_size, Some(50));
        assert_eq!(parsed.data[0].number_or_zero("Valor"), 10.5);
    }
}

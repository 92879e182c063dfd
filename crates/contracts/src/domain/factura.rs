//! Invoice search. Invoice rows have no fixed schema and travel as
//! [`crate::shared::records::Record`]; only the filter parameters are
//! typed.

use serde::{Deserialize, Serialize};

/// Invoice search filter. Periods use the YYYYMM convention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacturasParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo_inicial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo_final: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

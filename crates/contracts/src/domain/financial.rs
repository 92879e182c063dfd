use serde::{Deserialize, Serialize};

/// Profit-and-loss line (estado de resultados).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerdidasGanancias {
    #[serde(rename = "TipoCuenta")]
    pub tipo_cuenta: String,
    #[serde(rename = "Cuenta")]
    pub cuenta: String,
    #[serde(rename = "Total")]
    pub total: f64,
}

/// Monthly income/cost/expense trend point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TendenciaMensual {
    /// Period in YYYYMM.
    #[serde(rename = "Periodo")]
    pub periodo: u32,
    #[serde(rename = "Ingresos")]
    pub ingresos: f64,
    #[serde(rename = "Costos")]
    pub costos: f64,
    #[serde(rename = "Gastos")]
    pub gastos: f64,
    #[serde(rename = "Utilidad")]
    pub utilidad: f64,
}

/// YYYYMM period range shared by the financial report endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo_inicial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo_final: Option<u32>,
}

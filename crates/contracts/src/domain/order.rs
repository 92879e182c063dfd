use serde::{Deserialize, Serialize};

/// One daily order row (`/pedidos`). The service exposes the original
/// report headers verbatim, hence the renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOrder {
    pub rowid: i64,
    #[serde(rename = "Fecha docto")]
    pub fecha_docto: String,
    #[serde(rename = "Hora creacion")]
    pub hora_creacion: String,
    #[serde(rename = "ID. CO")]
    pub id_co: String,
    #[serde(rename = "Estado")]
    pub estado: String,
    #[serde(rename = "Desc. CO")]
    pub desc_co: String,
    /// Full creation timestamp, ISO-8601.
    #[serde(rename = "Hora creacion dt")]
    pub hora_creacion_dt: String,
}

/// Date-range filter for the daily order search (YYYY-MM-DD).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedidosParams {
    pub fecha_inicial: String,
    pub fecha_final: String,
}

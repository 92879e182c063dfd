use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One sales document line from the sales-summary report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "Fecha documento")]
    pub fecha_documento: String,
    #[serde(rename = "Guid documento")]
    pub guid_documento: Uuid,
    /// May be blank; pages bucket blank vendors under "Sin Vendedor".
    #[serde(rename = "Vendedor", default)]
    pub vendedor: String,
    #[serde(rename = "Vlr. Neto documento", default)]
    pub valor_neto: f64,
    #[serde(rename = "Numero de unidades docto", default)]
    pub unidades: f64,
    #[serde(rename = "Item resumen", default)]
    pub item_resumen: String,
    #[serde(rename = "Desc. grupo clase docto.", default)]
    pub grupo_clase_docto: String,
    #[serde(rename = "Centro de OP", default)]
    pub centro_op: String,
    #[serde(rename = "Compania")]
    pub compania: i64,
}

/// Vendor totals row from the vendors report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(rename = "Codigo vendedor")]
    pub codigo_vendedor: String,
    #[serde(rename = "Nombre vendedor", default)]
    pub nombre_vendedor: String,
    #[serde(rename = "Tipo de entrega", default)]
    pub tipo_entrega: String,
    #[serde(rename = "Valor subtotal", default)]
    pub valor_subtotal: f64,
    #[serde(rename = "Valor neto", default)]
    pub valor_neto: f64,
    #[serde(rename = "compania")]
    pub compania: i64,
    #[serde(rename = "centro de op", default)]
    pub centro_op: String,
}

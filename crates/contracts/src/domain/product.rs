use serde::{Deserialize, Serialize};

/// Product catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub referencia: String,
    pub descripcion: String,
    pub precio: f64,
    pub stock: i64,
    pub categoria: String,
    pub ind_compra: bool,
    pub ind_venta: bool,
    pub ind_manufactura: bool,
    pub maneja_lotes: bool,
    pub maneja_serial: bool,
    pub controlado: bool,
    pub fecha_creacion: String,
    pub ultima_actualizacion: String,
}

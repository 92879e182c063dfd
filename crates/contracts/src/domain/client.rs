use serde::{Deserialize, Serialize};

/// Client master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    pub fecha_registro: String,
    pub ultima_compra: String,
    pub total_compras: f64,
    /// "activo", "inactivo", "suspendido" or "pendiente".
    pub estado: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

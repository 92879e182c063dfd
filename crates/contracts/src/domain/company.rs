use serde::{Deserialize, Serialize};

/// Company record as exposed by the ERP (`f010_*` column naming).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub f010_id: i64,
    pub f010_razon_social: String,
    pub f010_nit: String,
    /// 1 = active.
    pub f010_ind_estado: i32,
    /// Last closed fiscal year, 0 when never closed.
    pub f010_ult_ano_cerrado: i32,
    #[serde(default)]
    pub f010_direccion: Option<String>,
    #[serde(default)]
    pub f010_telefono: Option<String>,
    #[serde(default)]
    pub f010_email: Option<String>,
    #[serde(default)]
    pub f010_fecha_creacion: Option<String>,
    #[serde(default)]
    pub f010_ultima_actualizacion: Option<String>,
}

impl Company {
    pub fn is_active(&self) -> bool {
        self.f010_ind_estado == 1
    }
}

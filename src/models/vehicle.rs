//! Modelo de Vehicle
//!
//! Vehículo tal como lo devuelve `GET /api/vehicles`. La categoría requerida
//! llega como entero (1-3) o como letra y se normaliza a `LicenseCategory`.

use serde::{Deserialize, Serialize};

use crate::models::category::LicenseCategory;
use crate::utils::serde_ext::string_or_empty;

/// Vehicle principal - mapea al JSON del backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub plate_number: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub color: String,
    #[serde(default)]
    pub required_driver_category: LicenseCategory,
    #[serde(default)]
    pub vehicle_type_id: Option<i64>,
    #[serde(default)]
    pub vehicle_type_name: Option<String>,
}

impl Vehicle {
    /// Color para el swatch de la tabla
    pub fn color_swatch(&self) -> String {
        color_swatch(&self.color)
    }
}

/// Nombres de color que el navegador no reconoce se traducen a hex
pub fn color_swatch(color: &str) -> String {
    let lower = color.trim().to_lowercase();
    match lower.as_str() {
        "silver" => "#c0c0c0".to_string(),
        "gray" => "#808080".to_string(),
        _ => lower,
    }
}

//! Modelo de VehicleType

use serde::{Deserialize, Serialize};

use crate::utils::serde_ext::{string_or_empty, string_or_number};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
}

impl VehicleType {
    /// Id numérico, para el `vehicleTypeId` de los DTOs de vehículo
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }
}

use serde::{Deserialize, Serialize};

// Request para crear un tipo de vehículo (POST /api/vehicle-types)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleTypeDto {
    pub name: String,
    pub description: String,
}

// Request para actualizar un tipo de vehículo (PUT /api/vehicle-types)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleTypeDto {
    pub id: i64,
    pub name: String,
    pub description: String,
}

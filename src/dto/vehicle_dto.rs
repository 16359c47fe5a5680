use serde::{Deserialize, Serialize};

// Request para crear un vehículo (POST /api/vehicles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleDto {
    pub plate_number: String,
    pub model: Option<String>,
    pub color: String,
    pub required_driver_category: i64,
    pub vehicle_type_id: Option<i64>,
}

// Request para actualizar un vehículo (PUT /api/vehicles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleDto {
    pub id: i64,
    pub plate_number: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub required_driver_category: i64,
    pub vehicle_type_id: Option<i64>,
}

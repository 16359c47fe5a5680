use serde::{Deserialize, Serialize};

// Request para crear un conductor (POST /api/drivers/add)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDriverDto {
    pub full_name: String,
    pub birth_year: String, // YYYY-MM-DD, el backend lo llama BirthYear pero es DateOnly
    pub address: String,
    pub driver_categories: String, // letra de la categoría
    pub employment_type: String,   // "FullTime" / "PartTime"
}

// Request para actualizar un conductor (PUT /api/drivers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverDto {
    pub id: i64,
    pub full_name: Option<String>,
    pub birth_year: String,
    pub address: Option<String>,
    pub driver_category: i64, // B=1, C=2, D=3
    pub employment_type: i64, // FullTime=0, PartTime=1
}

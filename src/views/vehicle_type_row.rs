//! Fila de la tabla de tipos de vehículo

use crate::models::vehicle_type::VehicleType;

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleTypeRow {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl VehicleTypeRow {
    pub fn from_vehicle_type(vehicle_type: &VehicleType) -> Self {
        Self {
            id: vehicle_type.id.clone(),
            name: vehicle_type.name.clone(),
            description: vehicle_type.description.clone(),
        }
    }

    pub fn render(&self) -> String {
        format!("#{:<4} {:<16} {}", self.id, self.name, self.description)
    }
}

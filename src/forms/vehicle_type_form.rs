//! Formulario de tipos de vehículo

use validator::Validate;

use crate::dto::{CreateVehicleTypeDto, UpdateVehicleTypeDto};
use crate::models::vehicle_type::VehicleType;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_not_empty;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct VehicleTypeForm {
    /// `None` en alta, id del tipo en edición
    pub id: Option<String>,
    #[validate(custom = "validate_not_empty")]
    pub name: String,
    #[validate(custom = "validate_not_empty")]
    pub description: String,
}

impl VehicleTypeForm {
    pub fn from_vehicle_type(vehicle_type: &VehicleType) -> Self {
        Self {
            id: Some(vehicle_type.id.clone()),
            name: vehicle_type.name.clone(),
            description: vehicle_type.description.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_create_dto(&self) -> AppResult<CreateVehicleTypeDto> {
        self.validate()?;
        Ok(CreateVehicleTypeDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn to_update_dto(&self) -> AppResult<UpdateVehicleTypeDto> {
        self.validate()?;
        let raw_id = self.id.as_deref().unwrap_or_default();
        let id = raw_id
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("Invalid vehicle type id '{}'", raw_id)))?;

        Ok(UpdateVehicleTypeDto {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

//! Formularios de alta y edición de vehículos

use validator::Validate;

use crate::dto::{CreateVehicleDto, UpdateVehicleDto};
use crate::models::category::LicenseCategory;
use crate::models::vehicle::Vehicle;
use crate::models::vehicle_type::VehicleType;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{trimmed_or_none, validate_not_empty};

/// Formulario "Add a Car"
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct AddVehicleForm {
    #[validate(custom = "validate_not_empty")]
    pub plate_number: String,
    #[validate(custom = "validate_not_empty")]
    pub model: String,
    #[validate(custom = "validate_not_empty")]
    pub color: String,
    pub vehicle_type_id: Option<i64>,
    pub category: Option<LicenseCategory>,
    /// Opciones del desplegable; vacío si el endpoint no está disponible
    pub vehicle_types: Vec<VehicleType>,
}

impl AddVehicleForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Vacía los campos y carga las opciones de tipo de vehículo
    pub fn reset_with_options(&mut self, vehicle_types: Vec<VehicleType>) {
        *self = Self {
            vehicle_types,
            ..Self::default()
        };
    }

    pub fn shows_vehicle_type(&self) -> bool {
        !self.vehicle_types.is_empty()
    }

    pub fn to_dto(&self) -> AppResult<CreateVehicleDto> {
        self.validate()?;
        let category = self
            .category
            .ok_or_else(|| validation_error("Please select the required license category"))?;
        if let Some(id) = self.vehicle_type_id {
            if self.shows_vehicle_type()
                && !self.vehicle_types.iter().any(|t| t.numeric_id() == Some(id))
            {
                return Err(validation_error("Please select a valid vehicle type"));
            }
        } else if self.shows_vehicle_type() {
            return Err(validation_error("Please select a vehicle type"));
        }

        Ok(CreateVehicleDto {
            plate_number: self.plate_number.trim().to_string(),
            model: trimmed_or_none(&self.model),
            color: self.color.trim().to_string(),
            required_driver_category: category.code(),
            vehicle_type_id: self.vehicle_type_id,
        })
    }
}

/// Formulario "Edit Car"
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct EditVehicleForm {
    pub id: i64,
    #[validate(custom = "validate_not_empty")]
    pub plate_number: String,
    pub model: String,
    #[validate(custom = "validate_not_empty")]
    pub color: String,
    pub category: LicenseCategory,
    pub vehicle_type_id: Option<i64>,
    /// Opciones del desplegable; vacío si el endpoint no está disponible
    pub vehicle_types: Vec<VehicleType>,
}

impl EditVehicleForm {
    pub fn from_vehicle(vehicle: &Vehicle, vehicle_types: Vec<VehicleType>) -> Self {
        Self {
            id: vehicle.id,
            plate_number: vehicle.plate_number.clone(),
            model: vehicle.model.clone().unwrap_or_default(),
            color: vehicle.color.clone(),
            category: vehicle.required_driver_category,
            vehicle_type_id: vehicle.vehicle_type_id,
            vehicle_types,
        }
    }

    /// El campo de tipo de vehículo solo se muestra si hay opciones
    pub fn shows_vehicle_type(&self) -> bool {
        !self.vehicle_types.is_empty()
    }

    pub fn to_dto(&self) -> AppResult<UpdateVehicleDto> {
        self.validate()?;

        Ok(UpdateVehicleDto {
            id: self.id,
            plate_number: trimmed_or_none(&self.plate_number),
            model: trimmed_or_none(&self.model),
            color: trimmed_or_none(&self.color),
            required_driver_category: self.category.code(),
            vehicle_type_id: self.vehicle_type_id,
        })
    }
}

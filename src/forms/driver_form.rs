//! Formularios de alta y edición de conductores
//!
//! Los campos son texto libre; `to_dto` normaliza (trim, etiqueta -> enum)
//! usando las tablas de `models::category`.

use chrono::NaiveDate;
use validator::Validate;

use crate::dto::{AddDriverDto, UpdateDriverDto};
use crate::models::category::{EmploymentType, LicenseCategory};
use crate::models::driver::Driver;
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::{
    trimmed_or_none, validate_date, validate_not_empty, validate_not_future,
};

/// Formulario "Add a Driver"
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct AddDriverForm {
    #[validate(custom = "validate_not_empty")]
    pub full_name: String,
    #[validate(custom = "validate_not_empty")]
    pub birth_date: String,
    #[validate(custom = "validate_not_empty")]
    pub address: String,
    pub category: Option<LicenseCategory>,
    pub employment_type: Option<EmploymentType>,
}

impl AddDriverForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_dto(&self, today: NaiveDate) -> AppResult<AddDriverDto> {
        self.validate()?;
        let birth_date = parse_birth_date(&self.birth_date, today)?;
        let category = self
            .category
            .ok_or_else(|| validation_error("Please select a license category"))?;
        let employment_type = self
            .employment_type
            .ok_or_else(|| validation_error("Please select an employment type"))?;

        Ok(AddDriverDto {
            full_name: self.full_name.trim().to_string(),
            birth_year: birth_date.format("%Y-%m-%d").to_string(),
            address: self.address.trim().to_string(),
            driver_categories: category.letter().to_string(),
            employment_type: employment_type.wire_name().to_string(),
        })
    }
}

/// Formulario "Edit Driver", precargado desde el conductor seleccionado
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct EditDriverForm {
    pub id: String,
    #[validate(custom = "validate_not_empty")]
    pub full_name: String,
    pub birth_date: String,
    #[validate(custom = "validate_not_empty")]
    pub address: String,
    pub category: LicenseCategory,
    pub employment_type: EmploymentType,
}

impl EditDriverForm {
    /// Sin fecha de nacimiento real se estima el 1 de enero de `año actual - edad`
    pub fn from_driver(driver: &Driver, current_year: i32) -> Self {
        let birth_date = driver
            .age
            .filter(|age| *age > 0)
            .and_then(|age| i32::try_from(age).ok())
            .and_then(|age| current_year.checked_sub(age))
            .filter(|year| *year > 0)
            .map(|year| format!("{:04}-01-01", year))
            .unwrap_or_default();

        let category = driver
            .categories()
            .iter()
            .find_map(|c| LicenseCategory::from_letter(c))
            .unwrap_or_default();

        Self {
            id: driver.id.clone(),
            full_name: driver.full_name.clone(),
            birth_date,
            address: driver.address.clone(),
            category,
            employment_type: driver.employment_type,
        }
    }

    pub fn to_dto(&self, today: NaiveDate) -> AppResult<UpdateDriverDto> {
        if self.birth_date.trim().is_empty() {
            return Err(validation_error("Please select a birth date"));
        }
        let birth_date = parse_birth_date(&self.birth_date, today)?;
        self.validate()?;

        let id = self
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("Invalid driver id '{}'", self.id)))?;

        Ok(UpdateDriverDto {
            id,
            full_name: trimmed_or_none(&self.full_name),
            birth_year: birth_date.format("%Y-%m-%d").to_string(),
            address: trimmed_or_none(&self.address),
            driver_category: self.category.code(),
            employment_type: self.employment_type.code(),
        })
    }
}

fn parse_birth_date(value: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    let date = validate_date(value)
        .map_err(|_| validation_error("Birth date must be in YYYY-MM-DD format"))?;
    validate_not_future(date, today)
        .map_err(|_| validation_error("Birth date cannot be in the future"))?;
    Ok(date)
}

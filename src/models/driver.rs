//! Modelo de Driver
//!
//! Conductor tal como lo devuelve `GET /api/drivers`. La edad la calcula
//! el backend a partir de la fecha de nacimiento.

use serde::{Deserialize, Serialize};

use crate::models::category::EmploymentType;
use crate::utils::serde_ext::{string_or_empty, string_or_number};

/// Driver principal - mapea exactamente al JSON del backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub full_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub address: String,
    #[serde(default)]
    pub employment_type: EmploymentType,
    /// Letras separadas por comas, p.ej. "B,C"
    #[serde(default, deserialize_with = "string_or_empty")]
    pub license_category: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Driver {
    /// Categorías individuales, sin espacios ni entradas vacías
    pub fn categories(&self) -> Vec<String> {
        self.license_category
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_from_backend_json() {
        let driver: Driver = serde_json::from_str(
            r#"{"id":"1","fullName":"Jane Doe","age":34,"address":"1 Main St",
                "employmentType":"FullTime","licenseCategory":"B,C","isActive":true}"#,
        )
        .unwrap();

        assert_eq!(driver.id, "1");
        assert_eq!(driver.full_name, "Jane Doe");
        assert_eq!(driver.age, Some(34));
        assert_eq!(driver.employment_type, EmploymentType::FullTime);
        assert_eq!(driver.categories(), vec!["B", "C"]);
        assert_eq!(driver.status_label(), "Active");
    }

    #[test]
    fn test_driver_with_numeric_id_and_missing_fields() {
        let driver: Driver = serde_json::from_str(r#"{"id":12,"licenseCategory":null}"#).unwrap();
        assert_eq!(driver.id, "12");
        assert!(driver.categories().is_empty());
        assert_eq!(driver.status_label(), "Inactive");
    }

    #[test]
    fn test_categories_ignore_blank_parts() {
        let driver: Driver =
            serde_json::from_str(r#"{"id":"3","licenseCategory":" B, ,D "}"#).unwrap();
        assert_eq!(driver.categories(), vec!["B", "D"]);
    }
}

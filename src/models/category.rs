//! Tablas de correspondencia entre etiquetas y enums del backend
//!
//! Única fuente de verdad para categoría de licencia (B=1, C=2, D=3) y
//! tipo de empleo (FullTime=0, PartTime=1). Todos los formularios y vistas
//! pasan por aquí.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Categoría de licencia de conducir - mapea al enum numérico del backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LicenseCategory {
    #[default]
    B,
    C,
    D,
}

/// (categoría, código, letra, descripción)
const LICENSE_TABLE: [(LicenseCategory, i64, &str, &str); 3] = [
    (LicenseCategory::B, 1, "B", "Standard Vehicle"),
    (LicenseCategory::C, 2, "C", "Medium Vehicle"),
    (LicenseCategory::D, 3, "D", "Large Vehicle / Bus"),
];

impl LicenseCategory {
    pub const ALL: [LicenseCategory; 3] = [LicenseCategory::B, LicenseCategory::C, LicenseCategory::D];

    fn row(self) -> &'static (LicenseCategory, i64, &'static str, &'static str) {
        LICENSE_TABLE
            .iter()
            .find(|row| row.0 == self)
            .unwrap_or(&LICENSE_TABLE[0])
    }

    pub fn code(self) -> i64 {
        self.row().1
    }

    pub fn letter(self) -> &'static str {
        self.row().2
    }

    pub fn description(self) -> &'static str {
        self.row().3
    }

    pub fn from_code(code: i64) -> Option<Self> {
        LICENSE_TABLE.iter().find(|row| row.1 == code).map(|row| row.0)
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        let letter = letter.trim();
        LICENSE_TABLE
            .iter()
            .find(|row| row.2.eq_ignore_ascii_case(letter))
            .map(|row| row.0)
    }

    /// Acepta la letra o el código numérico ("B", "b", "1")
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::from_letter(value).or_else(|| value.parse::<i64>().ok().and_then(Self::from_code))
    }
}

impl fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl Serialize for LicenseCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnumValue {
    Code(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for LicenseCategory {
    /// Valores desconocidos caen en B, igual que el formulario de edición
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match Option::<RawEnumValue>::deserialize(deserializer)? {
            Some(RawEnumValue::Code(code)) => Self::from_code(code),
            Some(RawEnumValue::Text(text)) => Self::parse_lenient(&text),
            None => None,
        };
        Ok(parsed.unwrap_or_default())
    }
}

/// Tipo de empleo del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
}

/// (tipo, código, nombre en el wire, etiqueta)
const EMPLOYMENT_TABLE: [(EmploymentType, i64, &str, &str); 2] = [
    (EmploymentType::FullTime, 0, "FullTime", "Full-Time"),
    (EmploymentType::PartTime, 1, "PartTime", "Part-Time"),
];

impl EmploymentType {
    pub const ALL: [EmploymentType; 2] = [EmploymentType::FullTime, EmploymentType::PartTime];

    fn row(self) -> &'static (EmploymentType, i64, &'static str, &'static str) {
        EMPLOYMENT_TABLE
            .iter()
            .find(|row| row.0 == self)
            .unwrap_or(&EMPLOYMENT_TABLE[0])
    }

    pub fn code(self) -> i64 {
        self.row().1
    }

    pub fn wire_name(self) -> &'static str {
        self.row().2
    }

    pub fn label(self) -> &'static str {
        self.row().3
    }

    pub fn from_code(code: i64) -> Option<Self> {
        EMPLOYMENT_TABLE.iter().find(|row| row.1 == code).map(|row| row.0)
    }

    /// Acepta "FullTime", "full-time", "Full Time", "part_time" o el código
    pub fn parse(value: &str) -> Option<Self> {
        let compact: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        EMPLOYMENT_TABLE
            .iter()
            .find(|row| row.2.eq_ignore_ascii_case(&compact))
            .map(|row| row.0)
            .or_else(|| compact.parse::<i64>().ok().and_then(Self::from_code))
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EmploymentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for EmploymentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match Option::<RawEnumValue>::deserialize(deserializer)? {
            Some(RawEnumValue::Code(code)) => Self::from_code(code),
            Some(RawEnumValue::Text(text)) => Self::parse(&text),
            None => None,
        };
        Ok(parsed.unwrap_or_default())
    }
}

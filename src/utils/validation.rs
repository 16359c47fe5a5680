//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de formularios
//! y normalización de valores antes de enviarlos al backend.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use validator::ValidationError;

/// Extensiones aceptadas por el upload de reportes
pub const SPREADSHEET_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

lazy_static! {
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r#"[\\/:*?"<>|\s]+"#).unwrap();
}

/// Validar que un string no esté vacío (equivalente al atributo `required`)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("is required".into());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a fecha (YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error.message = Some("must be a date in YYYY-MM-DD format".into());
        error
    })
}

/// Validar que una fecha no esté en el futuro
pub fn validate_not_future(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date > today {
        let mut error = ValidationError::new("future_date");
        error.message = Some("cannot be in the future".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que el archivo tenga una extensión de hoja de cálculo
pub fn validate_spreadsheet_path(path: &Path) -> Result<(), ValidationError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension {
        Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => {
            let mut error = ValidationError::new("extension");
            error.message = Some("must be an .xlsx, .xls or .csv file".into());
            Err(error)
        }
    }
}

/// Convertir una descripción libre en un nombre de archivo seguro
pub fn sanitize_file_name(value: &str) -> String {
    let cleaned = UNSAFE_FILE_CHARS.replace_all(value.trim(), "_");
    let cleaned = cleaned.trim_matches('_');
    if cleaned.is_empty() {
        "report".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Trim, y `None` si queda vacío
pub fn trimmed_or_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

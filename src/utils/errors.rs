//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del cliente y su conversión
//! a mensajes de alerta para el usuario.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("No token returned from login")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cuerpo de error que devuelve el backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AppError {
    /// Construir un error de API a partir de una respuesta no-2xx
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        AppError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Fallo de conexión (fetch lanzó una excepción)
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// Fallo a nivel de aplicación (el backend respondió con un mensaje)
    pub fn is_application(&self) -> bool {
        matches!(self, AppError::Api { .. })
    }

    /// Código HTTP si el error viene del backend
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Texto que se muestra al usuario en la alerta
    pub fn alert_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            AppError::Api { message, .. } => message.clone(),
            AppError::Decode(_) => "Unexpected response from the server.".to_string(),
            AppError::Validation(msg) | AppError::Unauthorized(msg) => msg.clone(),
            AppError::MissingToken => self.to_string(),
            AppError::Io(e) => format!("File error: {}", e),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{} {}", field, detail)
            })
            .collect();
        fields.sort();
        AppError::Validation(fields.join("; "))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_taken_from_json_body() {
        let err = AppError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Plate number already exists"}"#,
        );
        assert_eq!(err.alert_message(), "Plate number already exists");
        assert_eq!(err.status(), Some(400));
        assert!(err.is_application());
        assert!(!err.is_network());
    }

    #[test]
    fn test_message_falls_back_to_raw_body() {
        let err = AppError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.alert_message(), "boom");
    }

    #[test]
    fn test_message_falls_back_to_reason() {
        let err = AppError::from_response(StatusCode::NOT_FOUND, "  ");
        assert_eq!(err.alert_message(), "Not Found");
    }

    #[test]
    fn test_validation_errors_are_flattened() {
        use validator::{ValidationError, ValidationErrors};

        let mut errors = ValidationErrors::new();
        let mut e = ValidationError::new("blank");
        e.message = Some("is required".into());
        errors.add("full_name", e);

        let err: AppError = errors.into();
        assert_eq!(err.alert_message(), "full_name is required");
    }
}

//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de formularios y helpers de deserialización.

pub mod errors;
pub mod serde_ext;
pub mod validation;

pub use errors::{AppError, AppResult};

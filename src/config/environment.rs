//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del cliente: URL base del backend,
//! timeouts, tamaños de página y directorio de exportación.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::errors::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5147";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DRIVERS_PAGE_SIZE: u32 = 30;
pub const DEFAULT_VEHICLE_TYPES_PAGE_SIZE: u32 = 10;

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub drivers_page_size: u32,
    pub vehicle_types_page_size: u32,
    pub export_dir: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            drivers_page_size: DEFAULT_DRIVERS_PAGE_SIZE,
            vehicle_types_page_size: DEFAULT_VEHICLE_TYPES_PAGE_SIZE,
            export_dir: PathBuf::from("."),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("FLEET_API_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url),
            request_timeout_secs: parse_var(
                &lookup,
                "FLEET_API_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            drivers_page_size: parse_var(
                &lookup,
                "FLEET_DRIVERS_PAGE_SIZE",
                defaults.drivers_page_size,
            )?,
            vehicle_types_page_size: parse_var(
                &lookup,
                "FLEET_VEHICLE_TYPES_PAGE_SIZE",
                defaults.vehicle_types_page_size,
            )?,
            export_dir: lookup("FLEET_EXPORT_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
        })
    }

    /// Configuración por defecto apuntando a otro backend
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| {
            AppError::Validation(format!("{} must be a valid number, got '{}'", key, raw))
        }),
        _ => Ok(default),
    }
}

//! Envelopes de respuesta del backend
//!
//! Todas las respuestas JSON vienen envueltas en `{statusCode, data, message}`;
//! los listados paginados añaden `pageNumber`, `pageSize` y `totalPages`.

use serde::{Deserialize, Serialize};

use crate::utils::serde_ext::null_as_default;

/// Envelope genérico `{statusCode, data, message}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// `data` ausente equivale a lista vacía
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Respuesta paginada
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl<T> PaginatedResponse<T> {
    /// Respuesta vacía (204 o cuerpo vacío)
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            page_number: None,
            page_size: None,
            total_pages: None,
            status_code: None,
        }
    }

    /// Información de paginación, rellenando con la petición original
    pub fn page_info(&self, requested: PageRequest) -> PageInfo {
        PageInfo {
            page_number: self.page_number.unwrap_or(requested.page_number),
            page_size: self.page_size.unwrap_or(requested.page_size),
            total_pages: self.total_pages.unwrap_or(1).max(1),
        }
    }
}

/// Parámetros `PageNumber` / `PageSize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn first(page_size: u32) -> Self {
        Self {
            page_number: 1,
            page_size,
        }
    }

    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("PageNumber", self.page_number.to_string()),
            ("PageSize", self.page_size.to_string()),
        ]
    }
}

/// Paginación reportada por el backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

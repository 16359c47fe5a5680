//! Formulario de subida de reportes
//!
//! Asocia una hoja de cálculo local a un periodo. El archivo se lee de disco
//! al enviar.

use std::path::{Path, PathBuf};

use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_spreadsheet_path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportUploadForm {
    pub period_id: Option<i64>,
    pub file_path: String,
}

/// Archivo listo para el multipart
#[derive(Debug, Clone, PartialEq)]
pub struct ReportUpload {
    pub period_id: i64,
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl ReportUploadForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nombre del archivo seleccionado, para la etiqueta "Selected: ..."
    pub fn selected_file_name(&self) -> Option<String> {
        let trimmed = self.file_path.trim();
        if trimmed.is_empty() {
            return None;
        }
        Path::new(trimmed)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub async fn load(&self) -> AppResult<ReportUpload> {
        let period_id = self
            .period_id
            .ok_or_else(|| validation_error("Please select a report period"))?;

        let path = PathBuf::from(self.file_path.trim());
        let file_name = self
            .selected_file_name()
            .ok_or_else(|| validation_error("Please choose a file to upload"))?;
        validate_spreadsheet_path(&path)
            .map_err(|_| validation_error("Only .xlsx, .xls or .csv files can be uploaded"))?;

        let contents = tokio::fs::read(&path).await?;

        Ok(ReportUpload {
            period_id,
            file_name,
            contents,
        })
    }
}

//! Servicio de reportes
//!
//! Tres acciones independientes sobre un periodo: subir la hoja de cálculo,
//! disparar el motor de asignación remoto y descargar el reporte generado.
//! El cliente no impone ningún orden entre ellas.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::client::FleetApiClient;
use crate::dto::{ApiEnvelope, AssignmentResult};
use crate::models::report::ReportPeriod;
use crate::utils::errors::{AppError, AppResult};

#[async_trait]
pub trait ReportService: Send + Sync {
    /// 204 o cuerpo vacío se tratan como "sin periodos"
    async fn list_report_periods(&self) -> AppResult<Vec<ReportPeriod>>;

    /// Devuelve el `message` del backend, si lo hay
    async fn upload_report(
        &self,
        period_id: i64,
        file_name: &str,
        contents: Vec<u8>,
    ) -> AppResult<Option<String>>;

    async fn run_assignment(&self, period_id: i64) -> AppResult<AssignmentResult>;

    async fn export_report(&self, period_id: i64) -> AppResult<Vec<u8>>;
}

#[async_trait]
impl ReportService for FleetApiClient {
    async fn list_report_periods(&self) -> AppResult<Vec<ReportPeriod>> {
        let builder = self.request(Method::GET, "/api/report-periods").await;
        let response = self.send(builder, "GET /api/report-periods").await?;
        let envelope: Option<ApiEnvelope<Vec<ReportPeriod>>> =
            Self::read_optional_json(response).await?;

        Ok(envelope.map(ApiEnvelope::into_items).unwrap_or_default())
    }

    async fn upload_report(
        &self,
        period_id: i64,
        file_name: &str,
        contents: Vec<u8>,
    ) -> AppResult<Option<String>> {
        log::info!(
            "📤 Subiendo '{}' ({} bytes) al periodo {}",
            file_name,
            contents.len(),
            period_id
        );

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(spreadsheet_mime(file_name))
            .map_err(|e| AppError::Validation(format!("Invalid file type: {}", e)))?;
        let form = Form::new().part("file", part);

        let path = format!("/api/reports/upload/{}", period_id);
        let builder = self.request(Method::POST, &path).await.multipart(form);
        let response = self.send(builder, "POST /api/reports/upload/{periodId}").await?;

        let envelope: Option<ApiEnvelope<serde_json::Value>> =
            Self::read_optional_json(response).await.unwrap_or(None);
        Ok(envelope.and_then(|e| e.message))
    }

    async fn run_assignment(&self, period_id: i64) -> AppResult<AssignmentResult> {
        log::info!("⚙️ Ejecutando motor de asignación para el periodo {}", period_id);

        let path = format!("/api/reports/assign/{}", period_id);
        let builder = self.request(Method::POST, &path).await;
        let response = self.send(builder, "POST /api/reports/assign/{periodId}").await?;

        let envelope: Option<ApiEnvelope<serde_json::Value>> =
            Self::read_optional_json(response).await?;
        let (data, message) = match envelope {
            Some(envelope) => (envelope.data, envelope.message),
            None => (None, None),
        };

        let summary = match data {
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Null) | None => message.clone().unwrap_or_default(),
            Some(other) => other.to_string(),
        };
        log::info!("✅ Asignación completada: {}", summary);

        Ok(AssignmentResult { summary, message })
    }

    async fn export_report(&self, period_id: i64) -> AppResult<Vec<u8>> {
        let path = format!("/api/reports/export/{}", period_id);
        let builder = self.request(Method::GET, &path).await;
        let response = self.send(builder, "GET /api/reports/export/{periodId}").await?;

        let bytes = response.bytes().await?;
        log::info!("📥 Reporte del periodo {} descargado ({} bytes)", period_id, bytes.len());
        Ok(bytes.to_vec())
    }
}

fn spreadsheet_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".xlsx") {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    } else if lower.ends_with(".xls") {
        "application/vnd.ms-excel"
    } else if lower.ends_with(".csv") {
        "text/csv"
    } else {
        "application/octet-stream"
    }
}

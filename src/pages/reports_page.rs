//! Página de reportes
//!
//! Tres acciones independientes por periodo: subir la hoja de cálculo,
//! ejecutar el motor de asignación remoto y exportar el resultado a disco.
//! No hay orden impuesto en el cliente entre ellas.

use std::path::PathBuf;

use crate::dto::ExportedReport;
use crate::forms::ReportUploadForm;
use crate::models::report::ReportPeriod;
use crate::services::ReportService;
use crate::state::{ActionOutcome, ErrorPolicy, ListState, ModalMode, ModalState, SubmitOutcome};
use crate::utils::errors::AppResult;
use crate::utils::validation::sanitize_file_name;
use crate::views::{render_list, PageLabels, RenderedPage, ReportRow};

pub const REPORTS_LOAD_ERROR: &str = "Failed to load report periods from the server.";
pub const ASSIGNMENT_CONNECTION_ERROR: &str = "Failed to connect to the assignment engine.";
pub const EXPORT_FAILED: &str = "Export failed. Make sure assignments were generated first.";

pub struct ReportsPage<S> {
    service: S,
    list: ListState<ReportPeriod>,
    processing_id: Option<i64>,
    modal: ModalState,
    pub upload_form: ReportUploadForm,
    export_dir: PathBuf,
}

impl<S: ReportService> ReportsPage<S> {
    pub fn new(service: S, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            service,
            list: ListState::new(ErrorPolicy::Blocking),
            processing_id: None,
            modal: ModalState::default(),
            upload_form: ReportUploadForm::default(),
            export_dir: export_dir.into(),
        }
    }

    pub fn list(&self) -> &ListState<ReportPeriod> {
        &self.list
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Periodo cuya asignación está en curso
    pub fn processing_id(&self) -> Option<i64> {
        self.processing_id
    }

    pub async fn refresh(&mut self) {
        self.list.begin_fetch();
        match self.service.list_report_periods().await {
            Ok(periods) => self.list.finish_ok(periods),
            Err(e) => {
                log::error!("❌ Error cargando periodos: {}", e);
                self.list.finish_err(REPORTS_LOAD_ERROR);
            }
        }
    }

    pub fn open_upload(&mut self, period_id: Option<i64>) {
        self.upload_form.reset();
        self.upload_form.period_id = period_id;
        self.modal.open(ModalMode::Add);
    }

    pub fn close_upload(&mut self) {
        self.modal.close();
        self.upload_form.reset();
    }

    pub async fn submit_upload(&mut self) -> SubmitOutcome {
        if !self.modal.is_open() {
            return SubmitOutcome::Ignored;
        }
        let upload = match self.upload_form.load().await {
            Ok(upload) => upload,
            Err(e) => return SubmitOutcome::Failed(e.alert_message()),
        };
        if !self.modal.begin_submit() {
            return SubmitOutcome::Ignored;
        }

        match self
            .service
            .upload_report(upload.period_id, &upload.file_name, upload.contents)
            .await
        {
            Ok(message) => {
                self.close_upload();
                self.refresh().await;
                SubmitOutcome::Saved(Some(
                    message.unwrap_or_else(|| "File uploaded successfully.".to_string()),
                ))
            }
            Err(e) => {
                log::error!("❌ Error subiendo reporte: {}", e);
                self.modal.end_submit();
                SubmitOutcome::Failed(e.alert_message())
            }
        }
    }

    /// Ejecuta el motor; con éxito la alerta es el resumen y se recargan los periodos
    pub async fn run_assignment(&mut self, period_id: i64) -> ActionOutcome {
        if self.processing_id.is_some() {
            return ActionOutcome::Cancelled;
        }

        self.processing_id = Some(period_id);
        let result = self.service.run_assignment(period_id).await;
        self.processing_id = None;

        match result {
            Ok(assignment) => {
                self.refresh().await;
                ActionOutcome::Done(assignment.summary)
            }
            Err(e) if e.is_application() => {
                log::warn!("⚠️ Asignación rechazada para el periodo {}: {}", period_id, e);
                ActionOutcome::Failed(format!("Error: {}", e.alert_message()))
            }
            Err(e) => {
                log::error!("❌ Error ejecutando asignación: {}", e);
                ActionOutcome::Failed(ASSIGNMENT_CONNECTION_ERROR.to_string())
            }
        }
    }

    /// Descarga el reporte y lo guarda como `Report_{descripción}.xlsx`
    pub async fn export_to_disk(&self, period_id: i64) -> AppResult<ExportedReport> {
        let description = self
            .list
            .find(|p| p.id == period_id)
            .map(|p| p.description.clone())
            .unwrap_or_else(|| period_id.to_string());

        let bytes = self.service.export_report(period_id).await?;

        tokio::fs::create_dir_all(&self.export_dir).await?;
        let path = self
            .export_dir
            .join(format!("Report_{}.xlsx", sanitize_file_name(&description)));
        tokio::fs::write(&path, &bytes).await?;
        log::info!("💾 Reporte guardado en {}", path.display());

        Ok(ExportedReport {
            path,
            bytes_written: bytes.len(),
        })
    }

    pub async fn export(&self, period_id: i64) -> ActionOutcome {
        match self.export_to_disk(period_id).await {
            Ok(report) => ActionOutcome::Done(format!("Report saved to {}", report.path.display())),
            Err(e) => {
                log::error!("❌ Error exportando el periodo {}: {}", period_id, e);
                ActionOutcome::Failed(EXPORT_FAILED.to_string())
            }
        }
    }

    pub fn render(&self) -> RenderedPage {
        let processing_id = self.processing_id;
        render_list(&self.list, &PageLabels::REPORTS, |p| {
            ReportRow::from_period(p, processing_id).to_row()
        })
    }
}

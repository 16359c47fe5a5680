//! Fila de la tabla de periodos de reporte

use crate::models::report::ReportPeriod;
use crate::views::{Badge, RenderedRow, Tone};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: i64,
    pub description: String,
    pub date_range: String,
    pub status: Badge,
    /// "Run Engine" o "Assigning..." mientras corre la asignación de este periodo
    pub run_label: &'static str,
    pub run_enabled: bool,
}

impl ReportRow {
    pub fn from_period(period: &ReportPeriod, processing_id: Option<i64>) -> Self {
        let processing = processing_id == Some(period.id);
        let tone = if period.status.is_finalized() {
            Tone::Positive
        } else {
            Tone::Warning
        };

        Self {
            id: period.id,
            description: period.description.clone(),
            date_range: period.date_range(),
            status: Badge::new(period.status.as_str(), tone),
            run_label: if processing { "Assigning..." } else { "Run Engine" },
            run_enabled: !processing,
        }
    }

    pub fn to_row(&self) -> RenderedRow {
        RenderedRow::with_badge(self.render(), self.status.clone())
    }

    pub fn render(&self) -> String {
        format!(
            "#{:<4} {:<20} {:<25} [{}]  {}",
            self.id, self.description, self.date_range, self.status.label, self.run_label
        )
    }
}

//! Vistas de presentación
//!
//! Renderizado puro de entidades (cards y filas) y de páginas completas a
//! partir de su `ListState`. El shell solo añade color al imprimir.

pub mod driver_card;
pub mod list_view;
pub mod report_row;
pub mod settings;
pub mod user_row;
pub mod vehicle_row;
pub mod vehicle_type_row;

pub use driver_card::DriverCard;
pub use list_view::{render_list, PageLabels, RenderedPage, RenderedRow};
pub use report_row::ReportRow;
pub use user_row::UserRow;
pub use vehicle_row::VehicleRow;
pub use vehicle_type_row::VehicleTypeRow;

/// Tono de un badge de estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

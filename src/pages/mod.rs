//! Controladores de página
//!
//! Cada página es genérica sobre el trait de servicio que consume, guarda su
//! `ListState` y sus modales, y devuelve resultados (`SubmitOutcome`,
//! `ActionOutcome`) que el shell convierte en alertas.

pub mod cars_page;
pub mod drivers_page;
pub mod reports_page;
pub mod users_page;
pub mod vehicle_types_page;

pub use cars_page::CarsPage;
pub use drivers_page::DriversPage;
pub use reports_page::ReportsPage;
pub use users_page::UsersPage;
pub use vehicle_types_page::VehicleTypesPage;

use chrono::{Local, NaiveDate};

use crate::utils::errors::AppError;

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Texto de alerta: fallos de red usan el mensaje propio de la acción
pub(crate) fn failure_alert(error: &AppError, network_fallback: &str) -> String {
    if error.is_network() {
        network_fallback.to_string()
    } else {
        error.alert_message()
    }
}

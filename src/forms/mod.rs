//! Formularios de los modales
//!
//! Estado local de cada modal y su conversión a DTO.

pub mod auth_form;
pub mod driver_form;
pub mod report_form;
pub mod vehicle_form;
pub mod vehicle_type_form;

pub use auth_form::LoginForm;
pub use driver_form::{AddDriverForm, EditDriverForm};
pub use report_form::{ReportUpload, ReportUploadForm};
pub use vehicle_form::{AddVehicleForm, EditVehicleForm};
pub use vehicle_type_form::VehicleTypeForm;

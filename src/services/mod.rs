//! Services module
//!
//! Este módulo contiene un servicio por recurso del backend. Cada servicio
//! es un trait implementado por `FleetApiClient`; las páginas dependen del
//! trait para poder probarse contra cualquier backend.

pub mod auth_service;
pub mod driver_service;
pub mod report_service;
pub mod user_service;
pub mod vehicle_service;
pub mod vehicle_type_service;

pub use auth_service::AuthService;
pub use driver_service::DriverService;
pub use report_service::ReportService;
pub use user_service::UserService;
pub use vehicle_service::VehicleService;
pub use vehicle_type_service::VehicleTypeService;

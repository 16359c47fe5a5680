//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al JSON del backend de flota, más la sesión y las tablas de enums.

pub mod auth;
pub mod category;
pub mod driver;
pub mod report;
pub mod user;
pub mod vehicle;
pub mod vehicle_type;

pub use auth::{new_session_handle, Session, SessionHandle};
pub use category::{EmploymentType, LicenseCategory};
pub use driver::Driver;
pub use report::{ReportPeriod, ReportStatus};
pub use user::User;
pub use vehicle::Vehicle;
pub use vehicle_type::VehicleType;

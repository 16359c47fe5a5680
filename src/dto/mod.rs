//! DTOs de request/response
//!
//! Cuerpos que se envían al backend y envelopes que se reciben.

pub mod api_response;
pub mod auth_dto;
pub mod driver_dto;
pub mod report_dto;
pub mod vehicle_dto;
pub mod vehicle_type_dto;

pub use api_response::{ApiEnvelope, PageInfo, PageRequest, PaginatedResponse};
pub use auth_dto::{LoginData, LoginRequest};
pub use driver_dto::{AddDriverDto, UpdateDriverDto};
pub use report_dto::{AssignmentResult, ExportedReport};
pub use vehicle_dto::{CreateVehicleDto, UpdateVehicleDto};
pub use vehicle_type_dto::{CreateVehicleTypeDto, UpdateVehicleTypeDto};

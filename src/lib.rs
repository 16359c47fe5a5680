//! Fleet Admin
//!
//! Cliente de administración de flota: conductores, vehículos, tipos de
//! vehículo, periodos de reporte y usuarios, contra un backend REST.

pub mod client;
pub mod config;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pages;
pub mod services;
pub mod shell;
pub mod state;
pub mod utils;
pub mod views;

pub use client::FleetApiClient;
pub use config::EnvironmentConfig;
pub use utils::errors::{AppError, AppResult};

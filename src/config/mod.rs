//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del cliente leída desde
//! variables de entorno.

pub mod environment;

pub use environment::*;

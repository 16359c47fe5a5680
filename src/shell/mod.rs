//! Shell interactivo de terminal
//!
//! Sidebar de navegación, cabecera de sesión y el bucle que despacha las
//! acciones de cada página.

pub mod app;
pub mod header;
pub mod page;

pub use app::App;
pub use page::{Page, FOOTER_ITEMS, NAV_ITEMS};

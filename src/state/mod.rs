//! Estado de las páginas
//!
//! Patrones compartidos por todas las páginas: listado con refresh y
//! modal de envío.

pub mod list_state;
pub mod modal_state;

pub use list_state::{ErrorPolicy, ListState, ListView};
pub use modal_state::{ActionOutcome, ModalMode, ModalState, SubmitOutcome};

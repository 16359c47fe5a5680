//! Estado de un modal de formulario
//!
//! Mientras hay un envío en curso el botón de envío queda deshabilitado:
//! `begin_submit` devuelve `false` y no se emite una segunda request.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit(String),
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    mode: Option<ModalMode>,
    submitting: bool,
}

impl ModalState {
    pub fn open(&mut self, mode: ModalMode) {
        self.mode = Some(mode);
        self.submitting = false;
    }

    pub fn close(&mut self) {
        self.mode = None;
        self.submitting = false;
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<&ModalMode> {
        self.mode.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn begin_submit(&mut self) -> bool {
        if !self.is_open() || self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }
}

/// Resultado de enviar un formulario
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx: la lista se recargó y el modal se cerró. Lleva el mensaje del backend si lo hubo
    Saved(Option<String>),
    /// Fallo: el modal sigue abierto y la lista no cambió. Lleva el texto de la alerta
    Failed(String),
    /// Modal cerrado o envío ya en curso
    Ignored,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

/// Resultado de una acción puntual (borrar, asignar, exportar)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Done(String),
    Failed(String),
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_open_modal() {
        let mut modal = ModalState::default();
        assert!(!modal.begin_submit());

        modal.open(ModalMode::Add);
        assert!(modal.begin_submit());
        assert!(!modal.begin_submit(), "second submit while in flight");

        modal.end_submit();
        assert!(modal.begin_submit());
    }

    #[test]
    fn test_close_resets_state() {
        let mut modal = ModalState::default();
        modal.open(ModalMode::Edit("4".to_string()));
        assert_eq!(modal.mode(), Some(&ModalMode::Edit("4".to_string())));
        modal.begin_submit();
        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.is_submitting());
    }
}

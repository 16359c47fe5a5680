//! Página de conductores
//!
//! Listado paginado con cards, alta y edición en modal y borrado con
//! confirmación. Un fallo de refresh conserva los conductores ya cargados.

use chrono::Datelike;

use crate::dto::{PageInfo, PageRequest};
use crate::forms::{AddDriverForm, EditDriverForm};
use crate::models::driver::Driver;
use crate::pages::{failure_alert, today};
use crate::services::DriverService;
use crate::state::{ActionOutcome, ErrorPolicy, ListState, ModalMode, ModalState, SubmitOutcome};
use crate::views::{render_list, DriverCard, PageLabels, RenderedPage};

pub const DRIVERS_LOAD_ERROR: &str = "Failed to load driver data from the server.";

pub struct DriversPage<S> {
    service: S,
    list: ListState<Driver>,
    page: PageRequest,
    page_info: Option<PageInfo>,
    modal: ModalState,
    pub add_form: AddDriverForm,
    pub edit_form: Option<EditDriverForm>,
}

impl<S: DriverService> DriversPage<S> {
    pub fn new(service: S, page_size: u32) -> Self {
        Self {
            service,
            list: ListState::new(ErrorPolicy::KeepPrevious),
            page: PageRequest::first(page_size),
            page_info: None,
            modal: ModalState::default(),
            add_form: AddDriverForm::default(),
            edit_form: None,
        }
    }

    pub fn list(&self) -> &ListState<Driver> {
        &self.list
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn page_request(&self) -> PageRequest {
        self.page
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        self.page_info
    }

    /// Recarga la página actual (también es el "Retry" de la vista de error)
    pub async fn refresh(&mut self) {
        self.list.begin_fetch();
        match self.service.list_drivers(self.page).await {
            Ok(response) => {
                self.page_info = Some(response.page_info(self.page));
                log::debug!("📋 {} conductores recibidos", response.data.len());
                self.list.finish_ok(response.data);
            }
            Err(e) => {
                log::error!("❌ Error cargando conductores: {}", e);
                self.list.finish_err(DRIVERS_LOAD_ERROR);
            }
        }
    }

    /// Avanza de página si el backend reporta más; `false` si ya es la última
    pub async fn next_page(&mut self) -> bool {
        match self.page_info {
            Some(info) if info.has_next() => {
                self.go_to_page(info.page_number + 1).await;
                true
            }
            _ => false,
        }
    }

    pub async fn prev_page(&mut self) -> bool {
        match self.page_info {
            Some(info) if info.has_previous() => {
                self.go_to_page(info.page_number - 1).await;
                true
            }
            _ => false,
        }
    }

    /// Solo conserva el nuevo número de página si la carga tuvo éxito
    async fn go_to_page(&mut self, page_number: u32) {
        let previous = self.page.page_number;
        self.page.page_number = page_number;
        self.refresh().await;
        if self.list.error().is_some() {
            self.page.page_number = previous;
        }
    }

    pub fn open_add(&mut self) {
        self.add_form.reset();
        self.modal.open(ModalMode::Add);
    }

    /// Abre el modal de edición precargado; `false` si el id no está en la lista
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(driver) = self.list.find(|d| d.id == id) else {
            return false;
        };
        self.edit_form = Some(EditDriverForm::from_driver(driver, today().year()));
        self.modal.open(ModalMode::Edit(id.to_string()));
        true
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.edit_form = None;
    }

    pub async fn submit_add(&mut self) -> SubmitOutcome {
        if self.modal.mode() != Some(&ModalMode::Add) {
            return SubmitOutcome::Ignored;
        }
        let dto = match self.add_form.to_dto(today()) {
            Ok(dto) => dto,
            Err(e) => return SubmitOutcome::Failed(e.alert_message()),
        };
        if !self.modal.begin_submit() {
            return SubmitOutcome::Ignored;
        }

        match self.service.add_driver(&dto).await {
            Ok(()) => {
                self.modal.close();
                self.add_form.reset();
                self.refresh().await;
                SubmitOutcome::Saved(None)
            }
            Err(e) => {
                log::error!("❌ Error creando conductor: {}", e);
                self.modal.end_submit();
                SubmitOutcome::Failed(failure_alert(&e, "Submission failed"))
            }
        }
    }

    pub async fn submit_edit(&mut self) -> SubmitOutcome {
        if !matches!(self.modal.mode(), Some(ModalMode::Edit(_))) {
            return SubmitOutcome::Ignored;
        }
        let Some(form) = self.edit_form.as_ref() else {
            return SubmitOutcome::Ignored;
        };
        let dto = match form.to_dto(today()) {
            Ok(dto) => dto,
            Err(e) => return SubmitOutcome::Failed(e.alert_message()),
        };
        if !self.modal.begin_submit() {
            return SubmitOutcome::Ignored;
        }

        match self.service.update_driver(&dto).await {
            Ok(()) => {
                self.close_modal();
                self.refresh().await;
                SubmitOutcome::Saved(None)
            }
            Err(e) => {
                log::error!("❌ Error actualizando conductor {}: {}", dto.id, e);
                self.modal.end_submit();
                let alert = if e.is_network() {
                    "Error updating driver. Please check your connection.".to_string()
                } else {
                    format!(
                        "Failed to update driver. Please check the form and try again. ({})",
                        e.alert_message()
                    )
                };
                SubmitOutcome::Failed(alert)
            }
        }
    }

    /// Borra tras confirmación; con 2xx quita solo ese conductor de la lista
    pub async fn delete(&mut self, id: &str, confirmed: bool) -> ActionOutcome {
        if !confirmed {
            return ActionOutcome::Cancelled;
        }

        match self.service.delete_driver(id).await {
            Ok(()) => {
                self.list.remove_where(|d| d.id == id);
                ActionOutcome::Done("Driver deleted successfully.".to_string())
            }
            Err(e) => {
                log::error!("❌ Error eliminando conductor {}: {}", id, e);
                ActionOutcome::Failed(failure_alert(
                    &e,
                    "Error deleting driver. Please check your connection.",
                ))
            }
        }
    }

    pub fn render(&self) -> RenderedPage {
        render_list(&self.list, &PageLabels::DRIVERS, |d| {
            DriverCard::from_driver(d).to_row()
        })
    }
}

//! Página de tipos de vehículo

use crate::dto::{PageInfo, PageRequest};
use crate::forms::VehicleTypeForm;
use crate::models::vehicle_type::VehicleType;
use crate::pages::failure_alert;
use crate::services::VehicleTypeService;
use crate::state::{ActionOutcome, ErrorPolicy, ListState, ModalMode, ModalState, SubmitOutcome};
use crate::views::{render_list, PageLabels, RenderedPage, VehicleTypeRow};

pub const VEHICLE_TYPES_LOAD_ERROR: &str = "Failed to load vehicle types from the server.";

pub struct VehicleTypesPage<S> {
    service: S,
    list: ListState<VehicleType>,
    page: PageRequest,
    page_info: Option<PageInfo>,
    modal: ModalState,
    pub form: VehicleTypeForm,
}

impl<S: VehicleTypeService> VehicleTypesPage<S> {
    pub fn new(service: S, page_size: u32) -> Self {
        Self {
            service,
            list: ListState::new(ErrorPolicy::Blocking),
            page: PageRequest::first(page_size),
            page_info: None,
            modal: ModalState::default(),
            form: VehicleTypeForm::default(),
        }
    }

    pub fn list(&self) -> &ListState<VehicleType> {
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

    pub async fn refresh(&mut self) {
        self.list.begin_fetch();
        match self.service.list_vehicle_types(self.page).await {
            Ok(response) => {
                self.page_info = Some(response.page_info(self.page));
                self.list.finish_ok(response.data);
            }
            Err(e) => {
                log::error!("❌ Error cargando tipos de vehículo: {}", e);
                self.list.finish_err(VEHICLE_TYPES_LOAD_ERROR);
            }
        }
    }

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
        self.form.reset();
        self.modal.open(ModalMode::Add);
    }

    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(vehicle_type) = self.list.find(|t| t.id == id) else {
            return false;
        };
        self.form = VehicleTypeForm::from_vehicle_type(vehicle_type);
        self.modal.open(ModalMode::Edit(id.to_string()));
        true
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.form.reset();
    }

    /// Envía el formulario como alta o edición según el modo del modal
    pub async fn submit(&mut self) -> SubmitOutcome {
        let editing = match self.modal.mode() {
            Some(ModalMode::Add) => false,
            Some(ModalMode::Edit(_)) => true,
            None => return SubmitOutcome::Ignored,
        };

        let result = if editing {
            let dto = match self.form.to_update_dto() {
                Ok(dto) => dto,
                Err(e) => return SubmitOutcome::Failed(e.alert_message()),
            };
            if !self.modal.begin_submit() {
                return SubmitOutcome::Ignored;
            }
            self.service.update_vehicle_type(&dto).await
        } else {
            let dto = match self.form.to_create_dto() {
                Ok(dto) => dto,
                Err(e) => return SubmitOutcome::Failed(e.alert_message()),
            };
            if !self.modal.begin_submit() {
                return SubmitOutcome::Ignored;
            }
            self.service.add_vehicle_type(&dto).await
        };

        match result {
            Ok(()) => {
                self.close_modal();
                self.refresh().await;
                SubmitOutcome::Saved(None)
            }
            Err(e) => {
                log::error!("❌ Error guardando tipo de vehículo: {}", e);
                self.modal.end_submit();
                SubmitOutcome::Failed(failure_alert(
                    &e,
                    "Error saving vehicle type. Please check your connection.",
                ))
            }
        }
    }

    pub async fn delete(&mut self, id: &str, confirmed: bool) -> ActionOutcome {
        if !confirmed {
            return ActionOutcome::Cancelled;
        }

        match self.service.delete_vehicle_type(id).await {
            Ok(()) => {
                self.list.remove_where(|t| t.id == id);
                ActionOutcome::Done("Vehicle type deleted successfully.".to_string())
            }
            Err(e) => {
                log::error!("❌ Error eliminando tipo de vehículo {}: {}", id, e);
                ActionOutcome::Failed(failure_alert(
                    &e,
                    "Error deleting vehicle type. Please check your connection.",
                ))
            }
        }
    }

    pub fn render(&self) -> RenderedPage {
        render_list(&self.list, &PageLabels::VEHICLE_TYPES, |t| {
            VehicleTypeRow::from_vehicle_type(t).render()
        })
    }
}

//! Página de vehículos
//!
//! Tabla de vehículos con alta, edición y borrado. Al abrir el alta o la
//! edición se consultan los tipos de vehículo para el desplegable.

use crate::forms::{AddVehicleForm, EditVehicleForm};
use crate::models::vehicle::Vehicle;
use crate::pages::failure_alert;
use crate::services::{VehicleService, VehicleTypeService};
use crate::state::{ActionOutcome, ErrorPolicy, ListState, ModalMode, ModalState, SubmitOutcome};
use crate::views::{render_list, PageLabels, RenderedPage, VehicleRow};

pub const VEHICLES_LOAD_ERROR: &str = "Failed to load vehicles from the server.";

pub struct CarsPage<S> {
    service: S,
    list: ListState<Vehicle>,
    modal: ModalState,
    pub add_form: AddVehicleForm,
    pub edit_form: Option<EditVehicleForm>,
}

impl<S> CarsPage<S>
where
    S: VehicleService + VehicleTypeService,
{
    pub fn new(service: S) -> Self {
        Self {
            service,
            list: ListState::new(ErrorPolicy::Blocking),
            modal: ModalState::default(),
            add_form: AddVehicleForm::default(),
            edit_form: None,
        }
    }

    pub fn list(&self) -> &ListState<Vehicle> {
        &self.list
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub async fn refresh(&mut self) {
        self.list.begin_fetch();
        match self.service.list_vehicles().await {
            Ok(vehicles) => self.list.finish_ok(vehicles),
            Err(e) => {
                log::error!("❌ Error cargando vehículos: {}", e);
                self.list.finish_err(VEHICLES_LOAD_ERROR);
            }
        }
    }

    pub async fn open_add(&mut self) {
        let vehicle_types = self.service.lookup_vehicle_types().await;
        self.add_form.reset_with_options(vehicle_types);
        self.modal.open(ModalMode::Add);
    }

    pub async fn open_edit(&mut self, id: i64) -> bool {
        let Some(vehicle) = self.list.find(|v| v.id == id).cloned() else {
            return false;
        };
        let vehicle_types = self.service.lookup_vehicle_types().await;
        self.edit_form = Some(EditVehicleForm::from_vehicle(&vehicle, vehicle_types));
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
        let dto = match self.add_form.to_dto() {
            Ok(dto) => dto,
            Err(e) => return SubmitOutcome::Failed(e.alert_message()),
        };
        if !self.modal.begin_submit() {
            return SubmitOutcome::Ignored;
        }

        match self.service.add_vehicle(&dto).await {
            Ok(()) => {
                self.modal.close();
                self.add_form.reset();
                self.refresh().await;
                SubmitOutcome::Saved(None)
            }
            Err(e) => {
                log::error!("❌ Error creando vehículo: {}", e);
                self.modal.end_submit();
                SubmitOutcome::Failed(failure_alert(
                    &e,
                    "Error adding vehicle. Please check your connection.",
                ))
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
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(e) => return SubmitOutcome::Failed(e.alert_message()),
        };
        if !self.modal.begin_submit() {
            return SubmitOutcome::Ignored;
        }

        match self.service.update_vehicle(&dto).await {
            Ok(()) => {
                self.close_modal();
                self.refresh().await;
                SubmitOutcome::Saved(None)
            }
            Err(e) => {
                log::error!("❌ Error actualizando vehículo {}: {}", dto.id, e);
                self.modal.end_submit();
                let alert = if e.is_network() {
                    "Error updating vehicle. Please check your connection.".to_string()
                } else {
                    format!(
                        "Failed to update vehicle. Please try again. ({})",
                        e.alert_message()
                    )
                };
                SubmitOutcome::Failed(alert)
            }
        }
    }

    pub async fn delete(&mut self, id: i64, confirmed: bool) -> ActionOutcome {
        if !confirmed {
            return ActionOutcome::Cancelled;
        }

        match self.service.delete_vehicle(id).await {
            Ok(()) => {
                self.list.remove_where(|v| v.id == id);
                ActionOutcome::Done("Vehicle deleted successfully.".to_string())
            }
            Err(e) => {
                log::error!("❌ Error eliminando vehículo {}: {}", id, e);
                ActionOutcome::Failed(failure_alert(
                    &e,
                    "Error deleting vehicle. Please check your connection.",
                ))
            }
        }
    }

    pub fn render(&self) -> RenderedPage {
        render_list(&self.list, &PageLabels::VEHICLES, |v| {
            VehicleRow::from_vehicle(v).render()
        })
    }
}

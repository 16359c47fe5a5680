//! Servicio de vehículos
//!
//! Endpoints `/api/vehicles`. El borrado usa el query param `?id=`.

use async_trait::async_trait;
use reqwest::Method;

use crate::client::FleetApiClient;
use crate::dto::{ApiEnvelope, CreateVehicleDto, UpdateVehicleDto};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleService: Send + Sync {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>>;

    async fn add_vehicle(&self, dto: &CreateVehicleDto) -> AppResult<()>;

    async fn update_vehicle(&self, dto: &UpdateVehicleDto) -> AppResult<()>;

    async fn delete_vehicle(&self, id: i64) -> AppResult<()>;
}

#[async_trait]
impl VehicleService for FleetApiClient {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let builder = self.request(Method::GET, "/api/vehicles").await;
        let response = self.send(builder, "GET /api/vehicles").await?;
        let envelope: Option<ApiEnvelope<Vec<Vehicle>>> =
            Self::read_optional_json(response).await?;

        let vehicles = envelope.map(ApiEnvelope::into_items).unwrap_or_default();
        log::info!("🚗 {} vehículos cargados", vehicles.len());
        Ok(vehicles)
    }

    async fn add_vehicle(&self, dto: &CreateVehicleDto) -> AppResult<()> {
        let builder = self.request(Method::POST, "/api/vehicles").await.json(dto);
        self.send(builder, "POST /api/vehicles").await?;
        log::info!("✅ Vehículo '{}' creado", dto.plate_number);
        Ok(())
    }

    async fn update_vehicle(&self, dto: &UpdateVehicleDto) -> AppResult<()> {
        let builder = self.request(Method::PUT, "/api/vehicles").await.json(dto);
        self.send(builder, "PUT /api/vehicles").await?;
        log::info!("✅ Vehículo {} actualizado", dto.id);
        Ok(())
    }

    async fn delete_vehicle(&self, id: i64) -> AppResult<()> {
        let builder = self
            .request(Method::DELETE, "/api/vehicles")
            .await
            .query(&[("id", id)]);
        self.send(builder, "DELETE /api/vehicles").await?;
        log::info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }
}

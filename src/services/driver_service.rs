//! Servicio de conductores
//!
//! Endpoints `/api/drivers`: listado paginado, alta, edición y borrado.

use async_trait::async_trait;
use reqwest::Method;

use crate::client::{path_segment, FleetApiClient};
use crate::dto::{AddDriverDto, PageRequest, PaginatedResponse, UpdateDriverDto};
use crate::models::driver::Driver;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait DriverService: Send + Sync {
    async fn list_drivers(&self, page: PageRequest) -> AppResult<PaginatedResponse<Driver>>;

    async fn add_driver(&self, dto: &AddDriverDto) -> AppResult<()>;

    async fn update_driver(&self, dto: &UpdateDriverDto) -> AppResult<()>;

    async fn delete_driver(&self, id: &str) -> AppResult<()>;
}

#[async_trait]
impl DriverService for FleetApiClient {
    async fn list_drivers(&self, page: PageRequest) -> AppResult<PaginatedResponse<Driver>> {
        log::info!(
            "👥 Cargando conductores (página {}, tamaño {})",
            page.page_number,
            page.page_size
        );

        let builder = self
            .request(Method::GET, "/api/drivers")
            .await
            .query(&page.query()[..]);
        let response = self.send(builder, "GET /api/drivers").await?;

        let page_response: Option<PaginatedResponse<Driver>> =
            Self::read_optional_json(response).await?;
        Ok(page_response.unwrap_or_else(PaginatedResponse::empty))
    }

    async fn add_driver(&self, dto: &AddDriverDto) -> AppResult<()> {
        let builder = self.request(Method::POST, "/api/drivers/add").await.json(dto);
        self.send(builder, "POST /api/drivers/add").await?;
        log::info!("✅ Conductor '{}' creado", dto.full_name);
        Ok(())
    }

    async fn update_driver(&self, dto: &UpdateDriverDto) -> AppResult<()> {
        let builder = self.request(Method::PUT, "/api/drivers").await.json(dto);
        self.send(builder, "PUT /api/drivers").await?;
        log::info!("✅ Conductor {} actualizado", dto.id);
        Ok(())
    }

    async fn delete_driver(&self, id: &str) -> AppResult<()> {
        let path = format!("/api/drivers/{}", path_segment(id));
        let builder = self.request(Method::DELETE, &path).await;
        self.send(builder, "DELETE /api/drivers/{id}").await?;
        log::info!("🗑️ Conductor {} eliminado", id);
        Ok(())
    }
}

//! Servicio de tipos de vehículo
//!
//! Endpoints `/api/vehicle-types`. Además del listado paginado ofrece una
//! búsqueda tolerante para el desplegable del formulario de vehículo: si el
//! endpoint falla o no existe, se registra un warning y se devuelve vacío.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Method};
use serde_json::Value;

use crate::client::{path_segment, FleetApiClient};
use crate::dto::{CreateVehicleTypeDto, PageRequest, PaginatedResponse, UpdateVehicleTypeDto};
use crate::models::vehicle_type::VehicleType;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleTypeService: Send + Sync {
    async fn list_vehicle_types(
        &self,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<VehicleType>>;

    /// Opciones para el desplegable; nunca falla
    async fn lookup_vehicle_types(&self) -> Vec<VehicleType>;

    async fn add_vehicle_type(&self, dto: &CreateVehicleTypeDto) -> AppResult<()>;

    async fn update_vehicle_type(&self, dto: &UpdateVehicleTypeDto) -> AppResult<()>;

    async fn delete_vehicle_type(&self, id: &str) -> AppResult<()>;
}

#[async_trait]
impl VehicleTypeService for FleetApiClient {
    async fn list_vehicle_types(
        &self,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<VehicleType>> {
        let builder = self
            .request(Method::GET, "/api/vehicle-types")
            .await
            .query(&page.query()[..]);
        let response = self.send(builder, "GET /api/vehicle-types").await?;

        let page_response: Option<PaginatedResponse<VehicleType>> =
            Self::read_optional_json(response).await?;
        Ok(page_response.unwrap_or_else(PaginatedResponse::empty))
    }

    async fn lookup_vehicle_types(&self) -> Vec<VehicleType> {
        let builder = self.request(Method::GET, "/api/vehicle-types").await;
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("⚠️ Vehicle types endpoint error: {}", e);
                return Vec::new();
            }
        };

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            log::warn!("⚠️ Vehicle types endpoint not available - field will be optional");
            return Vec::new();
        }

        let ok = response.status().is_success();
        let text = match response.text().await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::warn!("⚠️ Empty response from vehicle types endpoint");
                return Vec::new();
            }
            Err(e) => {
                log::warn!("⚠️ Vehicle types endpoint error: {}", e);
                return Vec::new();
            }
        };

        if !ok {
            log::warn!("⚠️ Vehicle types endpoint returned an error: {}", text);
            return Vec::new();
        }

        parse_vehicle_type_options(&text)
    }

    async fn add_vehicle_type(&self, dto: &CreateVehicleTypeDto) -> AppResult<()> {
        let builder = self
            .request(Method::POST, "/api/vehicle-types")
            .await
            .json(dto);
        self.send(builder, "POST /api/vehicle-types").await?;
        log::info!("✅ Tipo de vehículo '{}' creado", dto.name);
        Ok(())
    }

    async fn update_vehicle_type(&self, dto: &UpdateVehicleTypeDto) -> AppResult<()> {
        let builder = self
            .request(Method::PUT, "/api/vehicle-types")
            .await
            .json(dto);
        self.send(builder, "PUT /api/vehicle-types").await?;
        log::info!("✅ Tipo de vehículo {} actualizado", dto.id);
        Ok(())
    }

    async fn delete_vehicle_type(&self, id: &str) -> AppResult<()> {
        let path = format!("/api/vehicle-types/{}", path_segment(id));
        let builder = self.request(Method::DELETE, &path).await;
        self.send(builder, "DELETE /api/vehicle-types/{id}").await?;
        log::info!("🗑️ Tipo de vehículo {} eliminado", id);
        Ok(())
    }
}

/// Acepta `{data: [...]}` o un array plano
pub fn parse_vehicle_type_options(text: &str) -> Vec<VehicleType> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("⚠️ Vehicle types endpoint error: {}", e);
            return Vec::new();
        }
    };

    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => data,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    serde_json::from_value(items).unwrap_or_else(|e| {
        log::warn!("⚠️ Vehicle types payload not understood: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_envelope() {
        let types = parse_vehicle_type_options(
            r#"{"data":[{"id":1,"name":"Van","description":"Cargo"}],"statusCode":200}"#,
        );
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Van");
        assert_eq!(types[0].numeric_id(), Some(1));
    }

    #[test]
    fn test_options_from_bare_array() {
        let types = parse_vehicle_type_options(r#"[{"id":"2","name":"SUV","description":""}]"#);
        assert_eq!(types[0].id, "2");
    }

    #[test]
    fn test_options_from_garbage() {
        assert!(parse_vehicle_type_options("not json").is_empty());
        assert!(parse_vehicle_type_options(r#"{"message":"nope"}"#).is_empty());
        assert!(parse_vehicle_type_options("42").is_empty());
    }
}

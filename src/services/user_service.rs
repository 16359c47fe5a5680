//! Servicio de usuarios
//!
//! `GET /users` requiere la sesión: sin token no se emite la request.

use async_trait::async_trait;
use reqwest::Method;

use crate::client::FleetApiClient;
use crate::dto::ApiEnvelope;
use crate::models::user::User;
use crate::utils::errors::{AppError, AppResult};

#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

#[async_trait]
impl UserService for FleetApiClient {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        if !self.session().read().await.is_authenticated() {
            return Err(AppError::Unauthorized(
                "Please log in to view users.".to_string(),
            ));
        }

        let builder = self.request(Method::GET, "/users").await;
        let response = self.send(builder, "GET /users").await?;
        let envelope: Option<ApiEnvelope<Vec<User>>> = Self::read_optional_json(response).await?;

        Ok(envelope.map(ApiEnvelope::into_items).unwrap_or_default())
    }
}

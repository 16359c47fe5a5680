//! Servicio de autenticación
//!
//! Login contra `POST /login`; el token devuelto se guarda en la sesión
//! compartida del cliente. Logout solo limpia la sesión local.

use async_trait::async_trait;
use reqwest::Method;

use crate::client::FleetApiClient;
use crate::dto::{ApiEnvelope, LoginData, LoginRequest};
use crate::models::auth::Session;
use crate::utils::errors::{AppError, AppResult};

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Inicia sesión y devuelve el token emitido
    async fn login(&self, username: &str, password: &str) -> AppResult<String>;

    async fn logout(&self);

    async fn current_session(&self) -> Session;
}

#[async_trait]
impl AuthService for FleetApiClient {
    async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        log::info!("🔐 Iniciando sesión para '{}'", username);

        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };

        let builder = self.request(Method::POST, "/login").await.json(&request);
        let response = self.send(builder, "POST /login").await?;
        let envelope: ApiEnvelope<LoginData> = Self::read_json(response).await?;

        let token = envelope
            .into_data()
            .and_then(|data| data.token)
            .filter(|token| !token.trim().is_empty())
            .ok_or(AppError::MissingToken)?;

        *self.session().write().await = Session::issue(token.clone(), request.username.clone());
        log::info!("✅ Sesión iniciada para '{}'", request.username);

        Ok(token)
    }

    async fn logout(&self) {
        let mut session = self.session().write().await;
        if let Some(username) = session.username() {
            log::info!("🚪 Cerrando sesión de '{}'", username);
        }
        *session = Session::Anonymous;
    }

    async fn current_session(&self) -> Session {
        self.session().read().await.clone()
    }
}

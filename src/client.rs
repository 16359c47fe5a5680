//! Cliente HTTP para el backend de flota
//!
//! Este módulo contiene el cliente reqwest ligado a una URL base y a la
//! sesión compartida. Los servicios en `services/` construyen cada
//! endpoint encima de estos helpers.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::SessionHandle;
use crate::utils::errors::{AppError, AppResult};

/// Cliente HTTP para la API de flota
#[derive(Clone)]
pub struct FleetApiClient {
    client: Client,
    base_url: String,
    session: SessionHandle,
}

impl FleetApiClient {
    /// Crear nuevo cliente HTTP con la URL y timeout configurados
    pub fn new(config: &EnvironmentConfig, session: SessionHandle) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request con Accept JSON y, si hay sesión, `Authorization: Bearer`
    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header("Accept", "application/json");

        match self.session.read().await.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Enviar la request y convertir cualquier respuesta no-2xx en `AppError::Api`
    pub(crate) async fn send(&self, builder: RequestBuilder, action: &str) -> AppResult<Response> {
        let response = builder.send().await.map_err(|e| {
            log::error!("❌ {} falló: {}", action, e);
            AppError::Network(e)
        })?;

        let status = response.status();
        log::debug!("📡 {} -> {}", action, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = AppError::from_response(status, &body);
        log::warn!("⚠️ {} rechazado por el backend: {}", action, error);
        Err(error)
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            log::error!("❌ Respuesta JSON inválida: {}", e);
            AppError::Decode(e.to_string())
        })
    }

    /// Igual que `read_json` pero 204 o cuerpo vacío devuelven `None`
    pub(crate) async fn read_optional_json<T: DeserializeOwned>(
        response: Response,
    ) -> AppResult<Option<T>> {
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text).map(Some).map_err(|e| {
            log::error!("❌ Respuesta JSON inválida: {}", e);
            AppError::Decode(e.to_string())
        })
    }
}

/// Segmento de path codificado para ids libres
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::new_session_handle;

    #[test]
    fn test_client_creation() {
        let config = EnvironmentConfig::with_base_url("http://localhost:5147/");
        let client = FleetApiClient::new(&config, new_session_handle()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5147");
        assert_eq!(client.url("/api/drivers"), "http://localhost:5147/api/drivers");
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment("12"), "12");
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
    }
}

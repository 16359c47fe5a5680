//! Backend falso para los tests de integración
//!
//! Servidor axum en un puerto efímero que graba cada request recibida y
//! responde con la respuesta configurada para `(método, path)`.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fleet_admin::config::EnvironmentConfig;
use fleet_admin::models::{new_session_handle, SessionHandle};
use fleet_admin::FleetApiClient;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Clone)]
pub struct Canned {
    status: u16,
    content_type: Option<&'static str>,
    body: Vec<u8>,
}

impl Canned {
    pub fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            content_type: Some("application/json; charset=utf-8"),
            body: value.to_string().into_bytes(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn bytes(status: u16, content_type: &'static str, body: &[u8]) -> Self {
        Self {
            status,
            content_type: Some(content_type),
            body: body.to_vec(),
        }
    }
}

#[derive(Default)]
struct Shared {
    requests: Mutex<Vec<Recorded>>,
    responses: Mutex<HashMap<(String, String), Canned>>,
}

pub struct FakeBackend {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            shared,
        }
    }

    /// Fija la respuesta para `(método, path)`; reemplaza la anterior
    pub fn respond(&self, method: &str, path: &str, canned: Canned) {
        self.shared
            .responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), canned);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn config(&self) -> EnvironmentConfig {
        EnvironmentConfig::with_base_url(&self.base_url)
    }

    pub fn client(&self) -> FleetApiClient {
        self.client_with_session(new_session_handle())
    }

    pub fn client_with_session(&self, session: SessionHandle) -> FleetApiClient {
        FleetApiClient::new(&self.config(), session).unwrap()
    }
}

async fn handle(State(shared): State<Arc<Shared>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap().to_vec();
    let header_value = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let recorded = Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    };
    let key = (recorded.method.clone(), recorded.path.clone());
    shared.requests.lock().unwrap().push(recorded);

    let canned = shared
        .responses
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or_else(|| Canned::empty(404));

    let mut builder = Response::builder().status(StatusCode::from_u16(canned.status).unwrap());
    if let Some(content_type) = canned.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(canned.body)).unwrap()
}

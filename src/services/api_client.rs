// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests a /api/me
// El trait MeTransport es la costura para tests (sin navegador)
// ============================================================================

use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::config::AppConfig;
use crate::models::{MeResponse, Profile};
use crate::services::ApiError;

/// Transporte de `/api/me`
///
/// Futuros `!Send`: todo corre en el hilo de UI.
#[allow(async_fn_in_trait)]
pub trait MeTransport {
    /// `GET /api/me`
    async fn fetch_me(&self) -> Result<Profile, ApiError>;

    /// `PUT /api/me` con `body` tal cual
    async fn put_me(&self, body: &Value) -> Result<MeResponse, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    me_path: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            me_path: crate::utils::constants::ME_ENDPOINT.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            me_path: config.me_endpoint.clone(),
        }
    }

    /// URL completa del recurso
    pub fn me_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.me_path.trim_start_matches('/')
        )
    }
}

impl MeTransport for ApiClient {
    async fn fetch_me(&self) -> Result<Profile, ApiError> {
        let url = self.me_url();
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        let response = ensure_ok(response).await?;

        response
            .json::<Profile>()
            .await
            .map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))
    }

    async fn put_me(&self, body: &Value) -> Result<MeResponse, ApiError> {
        let url = self.me_url();
        let response = Request::put(&url)
            .json(body)
            .map_err(|e| ApiError::Serialization(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        let response = ensure_ok(response).await?;

        // 204 / body vacío / body no reconocido → MeResponse::Empty (re-sync)
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))?;
        Ok(MeResponse::from_put_body(&text))
    }
}

/// Non-2xx → `ApiError::Http` con el body como mensaje (o el status text)
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| response.status_text());
    Err(ApiError::Http { status, message })
}

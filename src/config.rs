use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    BACKEND_URL, ME_ENDPOINT, TOAST_DEFAULT_TIMEOUT_MS, TOAST_ERROR_TIMEOUT_MS,
};

/// Cómo se reconcilia `data` después de un PUT exitoso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconcilePolicy {
    /// Mergear los campos devueltos por el servidor (GET solo si no hay body)
    MergeResponse,
    /// Ignorar el body y volver a pedir el perfil completo
    Refetch,
}

impl ReconcilePolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "merge" | "merge_response" => Some(Self::MergeResponse),
            "refetch" => Some(Self::Refetch),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub me_endpoint: String,
    pub enable_logging: bool,
    pub reconcile_policy: ReconcilePolicy,
    /// Guardar también los errores de PUT en el slot `error` del store
    pub record_update_errors: bool,
    pub toast_config: ToastConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            me_endpoint: ME_ENDPOINT.to_string(),
            enable_logging: true,
            reconcile_policy: ReconcilePolicy::MergeResponse,
            record_update_errors: false,
            toast_config: ToastConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// success / info
    pub default_timeout_ms: u32,
    /// error / warning
    pub error_timeout_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: TOAST_DEFAULT_TIMEOUT_MS,
            error_timeout_ms: TOAST_ERROR_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            me_endpoint: option_env!("ME_ENDPOINT")
                .unwrap_or(ME_ENDPOINT).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            reconcile_policy: option_env!("RECONCILE_POLICY")
                .and_then(ReconcilePolicy::parse)
                .unwrap_or(ReconcilePolicy::MergeResponse),
            record_update_errors: option_env!("RECORD_UPDATE_ERRORS")
                .unwrap_or("false").parse().unwrap_or(false),
            toast_config: ToastConfig {
                default_timeout_ms: option_env!("TOAST_DEFAULT_TIMEOUT_MS")
                    .unwrap_or("3000").parse().unwrap_or(TOAST_DEFAULT_TIMEOUT_MS),
                error_timeout_ms: option_env!("TOAST_ERROR_TIMEOUT_MS")
                    .unwrap_or("4000").parse().unwrap_or(TOAST_ERROR_TIMEOUT_MS),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática (solo lectura; el estado vive en AppContext)
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

// ============================================================================
// API ERROR - Errores del borde HTTP
// ============================================================================
// Cada variante ya lleva el mensaje listo para mostrar al usuario
// ============================================================================

use thiserror::Error;

/// Mensaje genérico cuando el error no trae nada útil
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Fallo de red antes de obtener respuesta
    #[error("{0}")]
    Network(String),
    /// Respuesta no-2xx
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// Body ilegible
    #[error("{0}")]
    Parse(String),
    /// No se pudo serializar el payload
    #[error("{0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Mensaje para la UI; vacío o ausente → mensaje genérico
pub fn error_message(error: Option<&ApiError>) -> String {
    match error.map(|e| e.to_string()) {
        Some(message) if !message.trim().is_empty() => message,
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}

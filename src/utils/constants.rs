/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: cadena vacía (mismo origen que la app)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Recurso del perfil del usuario actual
pub const ME_ENDPOINT: &str = "/api/me";

/// Valor que ocupa el identificador cuando `noTaxId` / `noSsn` está marcado
pub const NO_ID_SENTINEL: &str = "N/A";

/// Duraciones por defecto de los toasts (ms)
pub const TOAST_DEFAULT_TIMEOUT_MS: u32 = 3000;
pub const TOAST_ERROR_TIMEOUT_MS: u32 = 4000;

// Mensajes de formularios
pub const INVALID_FORM_MESSAGE: &str = "Please correct the highlighted fields.";
pub const PERSONAL_SAVED_MESSAGE: &str = "Personal data saved successfully";
pub const BANK_SAVED_MESSAGE: &str = "Bank details saved successfully";
pub const TAX_SAVED_MESSAGE: &str = "Tax and Insurance data saved successfully";
pub const SAVING_MESSAGE: &str = "Saving...";

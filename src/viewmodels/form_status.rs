use std::collections::BTreeMap;

use crate::models::ToastId;
use crate::services::{error_message, ApiError};
use crate::state::ToastStore;
use crate::utils::constants::{INVALID_FORM_MESSAGE, SAVING_MESSAGE};
use crate::utils::validation::Rule;

/// Mensajes de validación por campo (nombre del wire → mensaje)
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Aplicar `rule` a `value` y anotar el fallo
pub(crate) fn check_field(errors: &mut FieldErrors, field: &'static str, value: &str, rule: &Rule) {
    if let Err(message) = rule(value) {
        errors.insert(field, message);
    }
}

/// Estado de envío compartido por todos los formularios
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStatus {
    pub saving: bool,
    pub success: bool,
    pub error: Option<String>,
    pub field_errors: FieldErrors,
}

impl FormStatus {
    /// Limpiar el resultado del envío anterior
    pub fn reset(&mut self) {
        self.success = false;
        self.error = None;
        self.field_errors.clear();
    }

    /// `false` si hay errores (quedan en `field_errors`)
    pub(crate) fn accept(&mut self, errors: FieldErrors) -> bool {
        if errors.is_empty() {
            return true;
        }
        log::warn!("⚠️ Formulario inválido: {} campos", errors.len());
        self.field_errors = errors;
        self.error = Some(INVALID_FORM_MESSAGE.to_string());
        false
    }

    /// Marca `saving` y muestra el toast de carga
    pub(crate) fn start_saving(&mut self, toasts: &ToastStore) -> ToastId {
        self.saving = true;
        toasts.loading(SAVING_MESSAGE)
    }

    /// Cerrar el envío: quita el toast de carga y refleja el resultado
    pub(crate) fn settle(
        &mut self,
        result: Result<(), ApiError>,
        toasts: &ToastStore,
        loading: ToastId,
        saved_message: &str,
    ) -> bool {
        self.saving = false;
        toasts.dismiss(Some(loading));

        match result {
            Ok(()) => {
                self.success = true;
                toasts.success(saved_message);
                true
            }
            Err(e) => {
                let message = error_message(Some(&e));
                self.error = Some(message.clone());
                toasts.error(message);
                false
            }
        }
    }
}

// ============================================================================
// VIEWMODELS - Formularios (copia local + validación + submit)
// ============================================================================
// Las vistas solo pintan; aquí vive el estado del formulario
// ============================================================================

pub mod bank_form;
pub mod form_status;
pub mod personal_form;
pub mod tax_form;

pub use bank_form::BankForm;
pub use form_status::{FieldErrors, FormStatus};
pub use personal_form::PersonalForm;
pub use tax_form::TaxForm;

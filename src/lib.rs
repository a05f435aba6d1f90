// ============================================================================
// EMPLOYEE SELF-SERVICE - FRONTEND CORE (RUST PURO)
// ============================================================================
// Arquitectura:
// - Models: Perfil y payloads compartidos con backend (/api/me)
// - Services: SOLO comunicación API
// - State: Stores con Rc<RefCell> + subscribers (perfil, toasts)
// - ViewModels: Formularios (copia local, validación, submit)
// - Hooks: Contexto de Yew y hooks para componentes
// ============================================================================

pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::config::CONFIG;

pub use crate::hooks::{AppContext, AppContextProvider};
pub use crate::services::{ApiClient, ApiError, MeTransport};
pub use crate::state::{MeStore, ToastStore};

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Employee self-service - Rust Puro");
    log::info!(
        "🔧 Backend: '{}{}' (reconcile: {:?})",
        CONFIG.backend_url,
        CONFIG.me_endpoint,
        CONFIG.reconcile_policy
    );

    Ok(())
}

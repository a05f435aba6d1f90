// ============================================================================
// ME STATE - Perfil compartido del usuario + operaciones de lectura/escritura
// ============================================================================
// Una instancia por contexto de aplicación (ver hooks::app_context).
// Los clones comparten estado. Ningún borrow se mantiene a través de un await.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::config::{AppConfig, ReconcilePolicy};
use crate::models::{
    BankPayload, InsurancePayload, PersonalPayload, Profile, ProfilePatch, TaxPayload,
};
use crate::services::{ApiError, MeTransport};
use crate::state::reactivity::{SubscriptionId, Subscribers};

/// Política del store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeStoreOptions {
    pub reconcile: ReconcilePolicy,
    pub record_update_errors: bool,
}

impl Default for MeStoreOptions {
    fn default() -> Self {
        Self {
            reconcile: ReconcilePolicy::MergeResponse,
            record_update_errors: false,
        }
    }
}

impl From<&AppConfig> for MeStoreOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            reconcile: config.reconcile_policy,
            record_update_errors: config.record_update_errors,
        }
    }
}

/// Estado del perfil
pub struct MeStore<T> {
    transport: Rc<T>,
    data: Rc<RefCell<Option<Profile>>>,
    /// Número de GET en vuelo; `pending()` es `> 0`
    in_flight: Rc<RefCell<usize>>,
    error: Rc<RefCell<Option<ApiError>>>,
    options: MeStoreOptions,
    subscribers: Subscribers,
}

impl<T> Clone for MeStore<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            data: self.data.clone(),
            in_flight: self.in_flight.clone(),
            error: self.error.clone(),
            options: self.options,
            subscribers: self.subscribers.clone(),
        }
    }
}

/// Dos handles son iguales si apuntan al mismo estado
impl<T> PartialEq for MeStore<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl<T> std::fmt::Debug for MeStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeStore")
            .field("data", &self.data.borrow())
            .field("pending", &self.pending())
            .field("error", &self.error.borrow())
            .field("options", &self.options)
            .finish()
    }
}

impl<T> MeStore<T> {
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, MeStoreOptions::default())
    }

    pub fn with_options(transport: T, options: MeStoreOptions) -> Self {
        Self {
            transport: Rc::new(transport),
            data: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(RefCell::new(0)),
            error: Rc::new(RefCell::new(None)),
            options,
            subscribers: Subscribers::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Lectura
    // ------------------------------------------------------------------------

    /// Obtener perfil (copia)
    pub fn data(&self) -> Option<Profile> {
        self.data.borrow().clone()
    }

    pub fn has_data(&self) -> bool {
        self.data.borrow().is_some()
    }

    pub fn pending(&self) -> bool {
        *self.in_flight.borrow() > 0
    }

    /// Último error de GET (y de PUT si `record_update_errors`)
    pub fn error(&self) -> Option<ApiError> {
        self.error.borrow().clone()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}

impl<T: MeTransport> MeStore<T> {
    // ------------------------------------------------------------------------
    // GET
    // ------------------------------------------------------------------------

    /// Pedir el perfil completo. Éxito → reemplaza `data`; error → `error`,
    /// `data` intacto. Llamadas concurrentes: gana la última en resolver.
    pub async fn refresh(&self) {
        *self.in_flight.borrow_mut() += 1;
        self.subscribers.notify();

        log::info!("📋 Obteniendo perfil");
        let result = self.transport.fetch_me().await;

        {
            let mut in_flight = self.in_flight.borrow_mut();
            *in_flight = in_flight.saturating_sub(1);
        }

        match result {
            Ok(profile) => {
                log::info!("✅ Perfil obtenido");
                *self.data.borrow_mut() = Some(profile);
                *self.error.borrow_mut() = None;
            }
            Err(e) => {
                log::error!("❌ Error obteniendo perfil: {}", e);
                *self.error.borrow_mut() = Some(e);
            }
        }
        self.subscribers.notify();
    }

    // ------------------------------------------------------------------------
    // PUT - todas las variantes comparten transporte y propagación de errores
    // ------------------------------------------------------------------------

    /// Subconjunto arbitrario del perfil
    pub async fn update(&self, patch: &ProfilePatch) -> Result<(), ApiError> {
        self.put(patch).await
    }

    pub async fn update_personal(&self, payload: &PersonalPayload) -> Result<(), ApiError> {
        self.put(payload).await
    }

    pub async fn update_bank(&self, payload: &BankPayload) -> Result<(), ApiError> {
        self.put(payload).await
    }

    pub async fn update_tax(&self, payload: &TaxPayload) -> Result<(), ApiError> {
        self.put(payload).await
    }

    pub async fn update_insurance(&self, payload: &InsurancePayload) -> Result<(), ApiError> {
        self.put(payload).await
    }

    async fn put<P: Serialize + ?Sized>(&self, payload: &P) -> Result<(), ApiError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::Serialization(format!("Serialization error: {}", e)))?;

        log::info!("📝 Actualizando perfil");
        let response = match self.transport.put_me(&body).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Error actualizando perfil: {}", e);
                if self.options.record_update_errors {
                    *self.error.borrow_mut() = Some(e.clone());
                    self.subscribers.notify();
                }
                return Err(e);
            }
        };

        match (self.options.reconcile, response.into_patch()) {
            (ReconcilePolicy::MergeResponse, Some(patch)) => {
                self.merge(patch);
                log::info!("✅ Perfil actualizado");
            }
            (ReconcilePolicy::MergeResponse, None) => {
                log::info!("🔄 Respuesta vacía, re-sincronizando perfil");
                self.refresh().await;
            }
            (ReconcilePolicy::Refetch, _) => {
                self.refresh().await;
            }
        }
        Ok(())
    }

    /// Merge superficial sobre el perfil actual (o uno vacío)
    pub fn merge(&self, patch: ProfilePatch) {
        {
            let mut data = self.data.borrow_mut();
            let profile = data.get_or_insert_with(Profile::default);
            patch.apply_to(profile);
        }
        self.subscribers.notify();
    }
}

// ============================================================================
// TOAST STATE - Cola ordenada de notificaciones transitorias
// ============================================================================
// El store NO programa auto-dismiss: eso lo hace quien muestra los toasts
// (ver hooks::use_toasts). Los de tipo Loading son siempre persistentes.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AppConfig, ToastConfig};
use crate::models::{Toast, ToastId, ToastKind, ToastTimeout, ToastUpdate};
use crate::state::reactivity::{SubscriptionId, Subscribers};

/// Estado de toasts - clones comparten lista y contador
#[derive(Clone)]
pub struct ToastStore {
    toasts: Rc<RefCell<Vec<Toast>>>,
    /// Próximo id; nunca se reinicia ni se reutiliza
    next_id: Rc<RefCell<u64>>,
    config: ToastConfig,
    subscribers: Subscribers,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::with_config(ToastConfig::default())
    }

    pub fn with_config(config: ToastConfig) -> Self {
        Self {
            toasts: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(RefCell::new(1)),
            config,
            subscribers: Subscribers::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_config(config.toast_config)
    }

    /// Agregar toast al final. `Loading` ignora `timeout` y queda persistente.
    pub fn push(&self, text: impl Into<String>, kind: ToastKind, timeout: ToastTimeout) -> ToastId {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            let id = ToastId(*next_id);
            *next_id += 1;
            id
        };
        let timeout = if kind == ToastKind::Loading {
            ToastTimeout::Persistent
        } else {
            timeout
        };

        self.toasts.borrow_mut().push(Toast {
            id,
            text: text.into(),
            kind,
            timeout,
        });
        self.subscribers.notify();
        id
    }

    /// `Some(id)` quita solo ese toast; `None` limpia todo
    pub fn dismiss(&self, id: Option<ToastId>) {
        {
            let mut toasts = self.toasts.borrow_mut();
            match id {
                Some(id) => toasts.retain(|toast| toast.id != id),
                None => toasts.clear(),
            }
        }
        self.subscribers.notify();
    }

    /// Merge superficial sobre el toast con ese id (no-op si no existe).
    /// Un toast que pasa a `Loading` queda persistente.
    pub fn update(&self, id: ToastId, changes: ToastUpdate) {
        let changed = {
            let mut toasts = self.toasts.borrow_mut();
            match toasts.iter_mut().find(|toast| toast.id == id) {
                Some(toast) => {
                    changes.apply_to(toast);
                    if toast.kind == ToastKind::Loading {
                        toast.timeout = ToastTimeout::Persistent;
                    }
                    true
                }
                None => false,
            }
        };
        if changed {
            self.subscribers.notify();
        }
    }

    pub fn success(&self, text: impl Into<String>) -> ToastId {
        self.success_for(text, self.config.default_timeout_ms)
    }

    pub fn error(&self, text: impl Into<String>) -> ToastId {
        self.error_for(text, self.config.error_timeout_ms)
    }

    pub fn info(&self, text: impl Into<String>) -> ToastId {
        self.info_for(text, self.config.default_timeout_ms)
    }

    pub fn warning(&self, text: impl Into<String>) -> ToastId {
        self.warning_for(text, self.config.error_timeout_ms)
    }

    // Variantes con duración explícita (ms)

    pub fn success_for(&self, text: impl Into<String>, ms: u32) -> ToastId {
        self.push(text, ToastKind::Success, ToastTimeout::Millis(ms))
    }

    pub fn error_for(&self, text: impl Into<String>, ms: u32) -> ToastId {
        self.push(text, ToastKind::Error, ToastTimeout::Millis(ms))
    }

    pub fn info_for(&self, text: impl Into<String>, ms: u32) -> ToastId {
        self.push(text, ToastKind::Info, ToastTimeout::Millis(ms))
    }

    pub fn warning_for(&self, text: impl Into<String>, ms: u32) -> ToastId {
        self.push(text, ToastKind::Warning, ToastTimeout::Millis(ms))
    }

    pub fn loading(&self, text: impl Into<String>) -> ToastId {
        self.push(text, ToastKind::Loading, ToastTimeout::Persistent)
    }

    pub fn color_of(&self, kind: ToastKind) -> &'static str {
        kind.color()
    }

    /// Copia de la lista en orden de inserción
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.toasts.borrow().iter().find(|toast| toast.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
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

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ToastStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.toasts, &other.toasts)
    }
}

impl std::fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastStore")
            .field("toasts", &self.toasts.borrow())
            .field("next_id", &self.next_id.borrow())
            .finish()
    }
}

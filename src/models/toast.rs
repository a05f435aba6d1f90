// ============================================================================
// TOAST MODELS - Notificaciones transitorias de UI
// ============================================================================

use std::fmt;

/// Identificador de toast (contador monotónico, empieza en 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
    Loading,
}

impl ToastKind {
    /// Categoría de color para el host de toasts
    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "primary",
            ToastKind::Warning => "warning",
            ToastKind::Loading => "grey",
        }
    }
}

/// Duración de un toast - `Persistent` nunca se auto-descarta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTimeout {
    Millis(u32),
    Persistent,
}

impl ToastTimeout {
    pub fn millis(self) -> Option<u32> {
        match self {
            ToastTimeout::Millis(ms) => Some(ms),
            ToastTimeout::Persistent => None,
        }
    }

    pub fn is_persistent(self) -> bool {
        matches!(self, ToastTimeout::Persistent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub text: String,
    pub kind: ToastKind,
    pub timeout: ToastTimeout,
}

/// Campos modificables de un toast (el id no está aquí a propósito)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastUpdate {
    pub text: Option<String>,
    pub kind: Option<ToastKind>,
    pub timeout: Option<ToastTimeout>,
}

impl ToastUpdate {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn timeout(mut self, timeout: ToastTimeout) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn apply_to(self, toast: &mut Toast) {
        if let Some(text) = self.text {
            toast.text = text;
        }
        if let Some(kind) = self.kind {
            toast.kind = kind;
        }
        if let Some(timeout) = self.timeout {
            toast.timeout = timeout;
        }
    }
}

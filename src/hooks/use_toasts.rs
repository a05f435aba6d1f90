// ============================================================================
// USE TOASTS HOOK - Lista de toasts + auto-dismiss del lado del host
// ============================================================================

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::app_context::use_app_context;
use crate::models::{Toast, ToastId};
use crate::state::ToastStore;

#[derive(Clone, PartialEq)]
pub struct UseToastsHandle {
    pub store: ToastStore,
    pub toasts: Vec<Toast>,
    pub dismiss: Callback<Option<ToastId>>,
}

#[hook]
pub fn use_toasts() -> UseToastsHandle {
    let store = use_app_context().toasts;
    let force_update = use_force_update();

    {
        let store = store.clone();
        use_effect_with(store.clone(), move |_| {
            let subscription = store.subscribe(move || force_update.force_update());
            move || store.unsubscribe(subscription)
        });
    }

    let dismiss = {
        let store = store.clone();
        Callback::from(move |id: Option<ToastId>| store.dismiss(id))
    };

    UseToastsHandle {
        toasts: store.toasts(),
        store,
        dismiss,
    }
}

/// Programa un timer por cada toast no persistente.
/// Si un toast desaparece o pasa a persistente, su timer se cancela. Usar solo en el host
/// que pinta los toasts. Al desmontar, los timers pendientes se cancelan.
#[hook]
pub fn use_toast_auto_dismiss(handle: &UseToastsHandle) {
    let timers = use_mut_ref(HashMap::<ToastId, Timeout>::new);
    let store = handle.store.clone();

    use_effect_with(handle.toasts.clone(), move |toasts| {
        let mut timers = timers.borrow_mut();
        timers.retain(|id, _| keeps_timer(toasts, *id));

        for toast in toasts {
            let Some(ms) = toast.timeout.millis() else {
                continue;
            };
            if timers.contains_key(&toast.id) {
                continue;
            }
            let store = store.clone();
            let id = toast.id;
            timers.insert(id, Timeout::new(ms, move || store.dismiss(Some(id))));
        }
        || ()
    });
}

/// Un timer sigue vigente mientras su toast exista y tenga duración
fn keeps_timer(toasts: &[Toast], id: ToastId) -> bool {
    toasts
        .iter()
        .any(|toast| toast.id == id && !toast.timeout.is_persistent())
}

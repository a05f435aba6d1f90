// ============================================================================
// USE ME HOOK - Perfil del usuario para componentes de formulario
// ============================================================================
// Fetch al montar si aún no hay perfil; re-render en cada cambio del store
// ============================================================================

use yew::prelude::*;

use crate::hooks::app_context::{use_app_context, AppMeStore};
use crate::models::Profile;
use crate::services::ApiError;

#[derive(Clone, PartialEq)]
pub struct UseMeHandle {
    pub store: AppMeStore,
    pub data: Option<Profile>,
    pub pending: bool,
    pub error: Option<ApiError>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_me() -> UseMeHandle {
    let store = use_app_context().me;
    let force_update = use_force_update();

    {
        let store = store.clone();
        use_effect_with(store.clone(), move |_| {
            let subscription = store.subscribe(move || force_update.force_update());

            if !store.has_data() && !store.pending() {
                let store = store.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    store.refresh().await;
                });
            }

            move || store.unsubscribe(subscription)
        });
    }

    let refresh = {
        let store = store.clone();
        Callback::from(move |_| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.refresh().await;
            });
        })
    };

    UseMeHandle {
        data: store.data(),
        pending: store.pending(),
        error: store.error(),
        store,
        refresh,
    }
}

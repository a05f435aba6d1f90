// ============================================================================
// APP CONTEXT - Stores compartidos entre formularios y host de toasts
// ============================================================================
// Usa Context API de Yew: una instancia por árbol de app, sin estado global
// ============================================================================

use yew::prelude::*;

use crate::config::{AppConfig, CONFIG};
use crate::services::ApiClient;
use crate::state::{MeStore, MeStoreOptions, ToastStore};

/// Store del perfil con el cliente HTTP real
pub type AppMeStore = MeStore<ApiClient>;

#[derive(Debug, Clone, PartialEq)]
pub struct AppContext {
    pub me: AppMeStore,
    pub toasts: ToastStore,
}

impl AppContext {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            me: MeStore::with_options(ApiClient::from_config(config), MeStoreOptions::from(config)),
            toasts: ToastStore::from_config(config),
        }
    }
}

/// Provider component que envuelve la app y proporciona los stores
#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    // Se crea una sola vez por montaje del provider
    let context = use_memo((), |_| AppContext::from_config(&CONFIG));

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub children: Children,
}

/// Contexto de la app; sin provider, el componente recibe stores locales
#[hook]
pub fn use_app_context() -> AppContext {
    let local = use_memo((), |_| AppContext::from_config(&CONFIG));
    match use_context::<AppContext>() {
        Some(context) => context,
        None => {
            log::warn!("⚠️ Sin AppContextProvider, usando stores locales");
            (*local).clone()
        }
    }
}

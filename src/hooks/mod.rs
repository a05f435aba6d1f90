pub mod app_context;
pub mod use_me;
pub mod use_toasts;

pub use app_context::{use_app_context, AppContext, AppContextProvider, AppMeStore};
pub use use_me::{use_me, UseMeHandle};
pub use use_toasts::{use_toast_auto_dismiss, use_toasts, UseToastsHandle};

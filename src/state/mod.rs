// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod me_state;
pub mod reactivity;
pub mod toast_state;

pub use me_state::{MeStore, MeStoreOptions};
pub use reactivity::{SubscriptionId, Subscribers};
pub use toast_state::ToastStore;

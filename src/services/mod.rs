pub mod api_client;
pub mod api_error;

pub use api_client::{ApiClient, MeTransport};
pub use api_error::{error_message, ApiError, FALLBACK_ERROR_MESSAGE};

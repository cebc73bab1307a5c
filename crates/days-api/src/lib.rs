pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::ApiState;

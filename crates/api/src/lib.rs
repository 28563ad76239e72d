//! ProEventos REST API
//!
//! Router, handlers and the mapping from service outcomes to HTTP responses.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

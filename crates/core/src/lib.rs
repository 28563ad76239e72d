//! Core library for the ProEventos backend
//!
//! Models, the store contract (with an in-memory store) and the evento service.

pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{CoreError, Result};
pub use models::*;
pub use services::*;
pub use store::{EventoStore, MemoryEventoStore};

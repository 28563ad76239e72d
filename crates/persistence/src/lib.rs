//! # ProEventos Persistence
//!
//! SQLite-backed implementation of the `EventoStore` contract.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use proeventos_persistence::SqliteEventoStore;
//!
//! let store = SqliteEventoStore::connect("sqlite:proeventos.db").await?;
//! let service = EventoService::new(Arc::new(store));
//! ```

pub mod error;
pub mod sqlite;
pub mod store;

pub use error::{PersistenceError, PersistenceResult};
pub use sqlite::{init_database, run_migrations, EventoRepo, EventoRow, PalestranteRepo, PalestranteRow};
pub use store::SqliteEventoStore;

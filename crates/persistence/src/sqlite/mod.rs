//! SQLite persistence module
//!
//! Repository pattern for SQLite database access.

pub mod repos;
pub mod schema;

pub use repos::{
    init_database, init_memory_database, run_migrations, EventoRepo, PalestranteRepo,
};
pub use schema::{EventoRow, PalestranteRow};

//! CLI Commands

pub mod config;
pub mod evento;
pub mod palestrante;

use anyhow::Result;
use clap::{Parser, Subcommand};
use proeventos_core::EventoService;
use proeventos_persistence::SqliteEventoStore;
use proeventos_utils::AppConfig;
use std::sync::Arc;

/// ProEventos command-line tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage eventos
    Evento(evento::EventoArgs),

    /// Manage palestrantes
    Palestrante(palestrante::PalestranteArgs),

    /// Show configuration
    Config,
}

/// Service over the database named in the configuration
pub async fn open_service(config: &AppConfig) -> Result<EventoService> {
    log::debug!("Opening database {}", config.database_url);
    let store = SqliteEventoStore::connect(&config.database_url).await?;
    Ok(EventoService::new(Arc::new(store)))
}

//! CLI Application

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use proeventos_utils::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    // Initialize logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter())
    ).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evento(args) => commands::evento::handle(args, &config).await?,
        Commands::Palestrante(args) => commands::palestrante::handle(args, &config).await?,
        Commands::Config => commands::config::handle(&config)?,
    }

    Ok(())
}

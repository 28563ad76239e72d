//! Config command

use anyhow::Result;
use proeventos_utils::AppConfig;

pub fn handle(config: &AppConfig) -> Result<()> {
    println!("⚙️  Current Configuration:");
    println!("{}", serde_json::to_string_pretty(config)?);
    println!();
    println!("📍 Bind address: {}", config.bind_address());

    Ok(())
}

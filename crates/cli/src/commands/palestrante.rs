//! Palestrante commands

use anyhow::Result;
use clap::{Args, Subcommand};
use proeventos_core::{EventoId, Palestrante, PalestranteId};
use proeventos_utils::AppConfig;

use super::open_service;

#[derive(Args, Debug)]
pub struct PalestranteArgs {
    #[command(subcommand)]
    pub action: PalestranteAction,
}

#[derive(Subcommand, Debug)]
pub enum PalestranteAction {
    /// Register a new palestrante
    Add {
        /// Name
        #[arg(short, long)]
        nome: String,

        /// Short bio
        #[arg(long, default_value = "")]
        mini_curriculo: String,

        /// Photo URL or path
        #[arg(long, default_value = "")]
        imagem_url: String,

        /// Phone
        #[arg(short, long, default_value = "")]
        telefone: String,

        /// Email
        #[arg(short, long, default_value = "")]
        email: String,
    },

    /// Attach a palestrante to an evento
    Link {
        /// Evento ID
        #[arg(long)]
        evento: EventoId,

        /// Palestrante ID
        #[arg(long)]
        palestrante: PalestranteId,
    },
}

pub async fn handle(args: PalestranteArgs, config: &AppConfig) -> Result<()> {
    let service = open_service(config).await?;

    match args.action {
        PalestranteAction::Add { nome, mini_curriculo, imagem_url, telefone, email } => {
            let palestrante = Palestrante {
                nome,
                mini_curriculo,
                imagem_url,
                telefone,
                email,
                ..Palestrante::default()
            };
            let palestrante = service.add_palestrante(&palestrante).await?;
            println!("✅ Palestrante cadastrado:");
            println!("{}", serde_json::to_string_pretty(&palestrante)?);
        }

        PalestranteAction::Link { evento, palestrante } => {
            if service.link_palestrante(evento, palestrante).await? {
                println!("✅ Palestrante {} vinculado ao evento {}", palestrante, evento);
            } else {
                println!("❌ Evento {} ou palestrante {} não encontrado", evento, palestrante);
            }
        }
    }

    Ok(())
}

//! Evento commands

use anyhow::Result;
use clap::{Args, Subcommand};
use proeventos_core::{Evento, EventoId};
use proeventos_utils::AppConfig;

use super::open_service;

#[derive(Args, Debug)]
pub struct EventoArgs {
    #[command(subcommand)]
    pub action: EventoAction,
}

/// Scalar fields of an evento
#[derive(Args, Debug, Clone)]
pub struct EventoFields {
    /// Tema
    #[arg(long)]
    pub tema: String,

    /// Local
    #[arg(long, default_value = "")]
    pub local: String,

    /// Lote
    #[arg(long, default_value = "")]
    pub lote: String,

    /// Expected attendees
    #[arg(long, default_value_t = 0)]
    pub qtd_pessoas: i32,

    /// Date/time, free text
    #[arg(long, default_value = "")]
    pub data_evento: String,

    /// Image URL or path
    #[arg(long, default_value = "")]
    pub imagem_url: String,
}

impl From<EventoFields> for Evento {
    fn from(fields: EventoFields) -> Self {
        Evento::new(fields.tema, fields.local)
            .with_lote(fields.lote)
            .with_qtd_pessoas(fields.qtd_pessoas)
            .with_data_evento(fields.data_evento)
            .with_imagem_url(fields.imagem_url)
    }
}

#[derive(Subcommand, Debug)]
pub enum EventoAction {
    /// List all eventos
    List {
        /// Include palestrantes
        #[arg(short, long)]
        palestrantes: bool,
    },

    /// Get evento by ID
    Get {
        /// Evento ID
        #[arg(short, long)]
        id: EventoId,

        /// Include palestrantes
        #[arg(short, long)]
        palestrantes: bool,
    },

    /// List eventos by tema
    Tema {
        /// Tema, matched case-insensitively anywhere in the evento's tema
        #[arg(short, long)]
        tema: String,

        /// Include palestrantes
        #[arg(short, long)]
        palestrantes: bool,
    },

    /// Create a new evento
    Create {
        #[command(flatten)]
        fields: EventoFields,
    },

    /// Replace the fields of an evento
    Update {
        /// Evento ID
        #[arg(short, long)]
        id: EventoId,

        #[command(flatten)]
        fields: EventoFields,
    },

    /// Delete evento by ID
    Delete {
        /// Evento ID
        #[arg(short, long)]
        id: EventoId,
    },
}

pub async fn handle(args: EventoArgs, config: &AppConfig) -> Result<()> {
    let service = open_service(config).await?;

    match args.action {
        EventoAction::List { palestrantes } => match service.get_all_eventos(palestrantes).await? {
            Some(eventos) => print_list(&eventos),
            None => println!("📭 Nenhum evento cadastrado."),
        },

        EventoAction::Get { id, palestrantes } => match service.get_evento_by_id(id, palestrantes).await? {
            Some(evento) => {
                println!("📅 Evento:");
                println!("{}", serde_json::to_string_pretty(&evento)?);
            }
            None => println!("❌ Evento {} não cadastrado.", id),
        },

        EventoAction::Tema { tema, palestrantes } => {
            match service.get_eventos_by_tema(&tema, palestrantes).await? {
                Some(eventos) => print_list(&eventos),
                None => println!("📭 Nenhum evento para o tema \"{}\"", tema),
            }
        }

        EventoAction::Create { fields } => match service.add_evento(&fields.into()).await? {
            Some(evento) => {
                println!("✅ Evento cadastrado:");
                println!("{}", serde_json::to_string_pretty(&evento)?);
            }
            None => println!("❌ Não foi possível cadastrar o evento"),
        },

        EventoAction::Update { id, fields } => match service.update_evento(id, &fields.into()).await? {
            Some(evento) => {
                println!("✅ Evento atualizado:");
                println!("{}", serde_json::to_string_pretty(&evento)?);
            }
            None => println!("❌ Evento {} não encontrado", id),
        },

        EventoAction::Delete { id } => {
            if service.delete_evento(id).await? {
                println!("✅ Evento {} excluído", id);
            } else {
                println!("❌ Evento {} não encontrado", id);
            }
        }
    }

    Ok(())
}

fn print_list(eventos: &[Evento]) {
    println!("📅 Eventos ({}):", eventos.len());
    for evento in eventos {
        println!(
            "  - [{}] {} @ {} ({} pessoas)",
            evento.evento_id,
            proeventos_utils::truncate(&evento.tema, 40, "..."),
            evento.local,
            evento.qtd_pessoas
        );
        for palestrante in evento.palestrantes.iter().flatten() {
            println!("      🎤 {}", palestrante.nome);
        }
    }
}

//! Database schema definitions
//!
//! Row types for sqlx mapping from SQLite tables.
//! The schema lives in migrations/20240315000000_init.sql

use proeventos_core::{Evento, Palestrante};
use serde::{Deserialize, Serialize};

/// Row type for table `eventos`
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct EventoRow {
    pub id: i64,
    pub tema: String,
    pub local: String,
    pub lote: String,
    pub qtd_pessoas: i32,
    pub data_evento: String,
    pub imagem_url: String,
}

/// Row type for table `palestrantes`
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct PalestranteRow {
    pub id: i64,
    pub nome: String,
    pub mini_curriculo: String,
    pub imagem_url: String,
    pub telefone: String,
    pub email: String,
}

// === Conversion implementations ===

impl From<EventoRow> for Evento {
    fn from(row: EventoRow) -> Self {
        Evento {
            evento_id: row.id,
            tema: row.tema,
            local: row.local,
            lote: row.lote,
            qtd_pessoas: row.qtd_pessoas,
            data_evento: row.data_evento,
            imagem_url: row.imagem_url,
            palestrantes: None,
        }
    }
}

impl From<PalestranteRow> for Palestrante {
    fn from(row: PalestranteRow) -> Self {
        Palestrante {
            palestrante_id: row.id,
            nome: row.nome,
            mini_curriculo: row.mini_curriculo,
            imagem_url: row.imagem_url,
            telefone: row.telefone,
            email: row.email,
        }
    }
}

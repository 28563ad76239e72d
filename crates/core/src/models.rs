//! Domain models: Evento and Palestrante
//!
//! Field names serialize in camelCase so the JSON matches what existing
//! front-ends of the ProEventos API already send and expect.

use serde::{Deserialize, Serialize};

/// Event identifier, assigned by the store
pub type EventoId = i64;

/// Speaker identifier, assigned by the store
pub type PalestranteId = i64;

/// Evento model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Evento {
    pub evento_id: EventoId,
    pub tema: String,
    pub local: String,
    pub lote: String,
    pub qtd_pessoas: i32,
    pub data_evento: String,
    #[serde(rename = "imagemURL")]
    pub imagem_url: String,
    /// `None` unless the caller asked for speakers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palestrantes: Option<Vec<Palestrante>>,
}

impl Evento {
    /// New evento; id stays 0 until the store assigns one
    pub fn new(tema: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            tema: tema.into(),
            local: local.into(),
            ..Self::default()
        }
    }

    pub fn with_lote(mut self, lote: impl Into<String>) -> Self {
        self.lote = lote.into();
        self
    }

    pub fn with_qtd_pessoas(mut self, qtd_pessoas: i32) -> Self {
        self.qtd_pessoas = qtd_pessoas;
        self
    }

    pub fn with_data_evento(mut self, data_evento: impl Into<String>) -> Self {
        self.data_evento = data_evento.into();
        self
    }

    pub fn with_imagem_url(mut self, imagem_url: impl Into<String>) -> Self {
        self.imagem_url = imagem_url.into();
        self
    }

    /// Copy every scalar field from `other`, keeping this event's id
    pub fn apply(&mut self, other: &Evento) {
        self.tema = other.tema.clone();
        self.local = other.local.clone();
        self.lote = other.lote.clone();
        self.qtd_pessoas = other.qtd_pessoas;
        self.data_evento = other.data_evento.clone();
        self.imagem_url = other.imagem_url.clone();
    }

    /// Case-insensitive substring match on tema
    pub fn matches_tema(&self, tema: &str) -> bool {
        self.tema.to_lowercase().contains(&tema.to_lowercase())
    }
}

/// Palestrante model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palestrante {
    pub palestrante_id: PalestranteId,
    pub nome: String,
    pub mini_curriculo: String,
    #[serde(rename = "imagemURL")]
    pub imagem_url: String,
    pub telefone: String,
    pub email: String,
}

impl Palestrante {
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

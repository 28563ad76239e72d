//! `EventoStore` backed by SQLite

use async_trait::async_trait;
use proeventos_core::{Evento, EventoId, EventoStore, Palestrante, PalestranteId, Result};
use sqlx::SqlitePool;

use crate::error::PersistenceResult;
use crate::sqlite::{init_database, init_memory_database, EventoRepo, PalestranteRepo};
use crate::sqlite::schema::EventoRow;

/// SQLite implementation of the evento store
#[derive(Clone)]
pub struct SqliteEventoStore {
    pool: SqlitePool,
}

impl SqliteEventoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open and migrate the database at `database_url`
    pub async fn connect(database_url: &str) -> PersistenceResult<Self> {
        let pool = init_database(database_url).await?;
        log::info!("Connected to {}", database_url);
        Ok(Self::new(pool))
    }

    /// Fresh, migrated in-memory database
    pub async fn in_memory() -> PersistenceResult<Self> {
        Ok(Self::new(init_memory_database().await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn load(&self, row: EventoRow, incluir_palestrantes: bool) -> PersistenceResult<Evento> {
        let id = row.id;
        let mut evento = Evento::from(row);
        if incluir_palestrantes {
            let palestrantes = PalestranteRepo::get_by_evento(&self.pool, id).await?;
            evento.palestrantes = Some(palestrantes.into_iter().map(Palestrante::from).collect());
        }
        Ok(evento)
    }

    async fn load_all(
        &self,
        rows: Vec<EventoRow>,
        incluir_palestrantes: bool,
    ) -> PersistenceResult<Vec<Evento>> {
        let mut eventos = Vec::with_capacity(rows.len());
        for row in rows {
            eventos.push(self.load(row, incluir_palestrantes).await?);
        }
        Ok(eventos)
    }
}

#[async_trait]
impl EventoStore for SqliteEventoStore {
    async fn list(&self, incluir_palestrantes: bool) -> Result<Vec<Evento>> {
        let rows = EventoRepo::get_all(&self.pool).await?;
        Ok(self.load_all(rows, incluir_palestrantes).await?)
    }

    async fn get(&self, id: EventoId, incluir_palestrantes: bool) -> Result<Option<Evento>> {
        match EventoRepo::get_by_id(&self.pool, id).await? {
            Some(row) => Ok(Some(self.load(row, incluir_palestrantes).await?)),
            None => Ok(None),
        }
    }

    async fn list_by_tema(&self, tema: &str, incluir_palestrantes: bool) -> Result<Vec<Evento>> {
        let rows = EventoRepo::get_by_tema(&self.pool, tema).await?;
        Ok(self.load_all(rows, incluir_palestrantes).await?)
    }

    async fn insert(&self, evento: &Evento) -> Result<Evento> {
        let id = EventoRepo::insert(&self.pool, evento).await?;
        let mut stored = Evento {
            evento_id: id,
            ..Evento::default()
        };
        stored.apply(evento);
        Ok(stored)
    }

    async fn update(&self, id: EventoId, evento: &Evento) -> Result<Option<Evento>> {
        if !EventoRepo::update(&self.pool, id, evento).await? {
            return Ok(None);
        }
        let row = EventoRepo::get_by_id(&self.pool, id).await?;
        Ok(row.map(Evento::from))
    }

    async fn delete(&self, id: EventoId) -> Result<bool> {
        Ok(EventoRepo::delete(&self.pool, id).await?)
    }

    async fn insert_palestrante(&self, palestrante: &Palestrante) -> Result<Palestrante> {
        let id = PalestranteRepo::insert(&self.pool, palestrante).await?;
        Ok(Palestrante {
            palestrante_id: id,
            ..palestrante.clone()
        })
    }

    async fn link_palestrante(
        &self,
        evento_id: EventoId,
        palestrante_id: PalestranteId,
    ) -> Result<bool> {
        let evento = EventoRepo::get_by_id(&self.pool, evento_id).await?;
        let palestrante = PalestranteRepo::get_by_id(&self.pool, palestrante_id).await?;
        if evento.is_none() || palestrante.is_none() {
            return Ok(false);
        }
        PalestranteRepo::link(&self.pool, evento_id, palestrante_id).await?;
        Ok(true)
    }
}

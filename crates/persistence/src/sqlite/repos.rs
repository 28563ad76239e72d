//! Repository implementations for SQLite
//!
//! CRUD operations for eventos, palestrantes and their links.

use crate::error::PersistenceResult;
use crate::sqlite::schema::*;
use proeventos_core::{Evento, Palestrante};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

// ============================================================================
// Evento Repository
// ============================================================================

/// Repository for the eventos table
pub struct EventoRepo;

impl EventoRepo {
    /// All eventos ordered by id
    pub async fn get_all(pool: &SqlitePool) -> PersistenceResult<Vec<EventoRow>> {
        let rows = sqlx::query_as::<_, EventoRow>("SELECT * FROM eventos ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Evento by id
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> PersistenceResult<Option<EventoRow>> {
        let row = sqlx::query_as::<_, EventoRow>("SELECT * FROM eventos WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Eventos whose tema contains `tema`, ASCII case-insensitive
    pub async fn get_by_tema(pool: &SqlitePool, tema: &str) -> PersistenceResult<Vec<EventoRow>> {
        let rows = sqlx::query_as::<_, EventoRow>(
            "SELECT * FROM eventos WHERE instr(lower(tema), lower(?)) > 0 ORDER BY id",
        )
        .bind(tema)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new evento and return its id
    pub async fn insert(pool: &SqlitePool, evento: &Evento) -> PersistenceResult<i64> {
        let result = sqlx::query(
            "INSERT INTO eventos (tema, local, lote, qtd_pessoas, data_evento, imagem_url) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&evento.tema)
        .bind(&evento.local)
        .bind(&evento.lote)
        .bind(evento.qtd_pessoas)
        .bind(&evento.data_evento)
        .bind(&evento.imagem_url)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite evento `id`; false when no row matched
    pub async fn update(pool: &SqlitePool, id: i64, evento: &Evento) -> PersistenceResult<bool> {
        let result = sqlx::query(
            "UPDATE eventos SET tema = ?, local = ?, lote = ?, qtd_pessoas = ?, \
             data_evento = ?, imagem_url = ? WHERE id = ?",
        )
        .bind(&evento.tema)
        .bind(&evento.local)
        .bind(&evento.lote)
        .bind(evento.qtd_pessoas)
        .bind(&evento.data_evento)
        .bind(&evento.imagem_url)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete evento `id`; links go with it (ON DELETE CASCADE)
    pub async fn delete(pool: &SqlitePool, id: i64) -> PersistenceResult<bool> {
        let result = sqlx::query("DELETE FROM eventos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Palestrante Repository
// ============================================================================

/// Repository for the palestrantes and palestrantes_eventos tables
pub struct PalestranteRepo;

impl PalestranteRepo {
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> PersistenceResult<Option<PalestranteRow>> {
        let row = sqlx::query_as::<_, PalestranteRow>("SELECT * FROM palestrantes WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Palestrantes linked to an evento, ordered by id
    pub async fn get_by_evento(
        pool: &SqlitePool,
        evento_id: i64,
    ) -> PersistenceResult<Vec<PalestranteRow>> {
        let rows = sqlx::query_as::<_, PalestranteRow>(
            "SELECT p.* FROM palestrantes p \
             JOIN palestrantes_eventos pe ON pe.palestrante_id = p.id \
             WHERE pe.evento_id = ? ORDER BY p.id",
        )
        .bind(evento_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new palestrante and return its id
    pub async fn insert(pool: &SqlitePool, palestrante: &Palestrante) -> PersistenceResult<i64> {
        let result = sqlx::query(
            "INSERT INTO palestrantes (nome, mini_curriculo, imagem_url, telefone, email) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&palestrante.nome)
        .bind(&palestrante.mini_curriculo)
        .bind(&palestrante.imagem_url)
        .bind(&palestrante.telefone)
        .bind(&palestrante.email)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Link a palestrante to an evento; existing links are left alone
    pub async fn link(pool: &SqlitePool, evento_id: i64, palestrante_id: i64) -> PersistenceResult<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO palestrantes_eventos (palestrante_id, evento_id) VALUES (?, ?)",
        )
        .bind(palestrante_id)
        .bind(evento_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}

// ============================================================================
// Pool & migrations
// ============================================================================

/// Run migrations
pub async fn run_migrations(pool: &SqlitePool) -> PersistenceResult<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// Open (creating if needed) the database at `database_url` and migrate it
pub async fn init_database(database_url: &str) -> PersistenceResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Single-connection in-memory database, migrated.
///
/// The database lives only as long as some connection holds it open, so the
/// pool keeps exactly one connection and never lets it expire.
pub async fn init_memory_database() -> PersistenceResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

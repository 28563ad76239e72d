//! API Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use proeventos_core::{Evento, EventoId};
use serde::{de, Deserialize, Deserializer};

use crate::error::ApiError;
use crate::state::AppState;

// ============ Messages ============

pub const NENHUM_EVENTO: &str = "Nenhum evento cadastrado.";
pub const EVENTO_NAO_CADASTRADO: &str = "Evento não cadastrado.";
pub const TEMA_SEM_EVENTOS: &str = "Não foram encontrados eventos para o tema informado";
pub const FALHA_CADASTRAR: &str = "Não foi possível cadastrar o evento";
pub const FALHA_ATUALIZAR: &str = "Não foi possível atualizar o evento";
pub const FALHA_DELETAR: &str = "Não foi possível deletar o evento.";
pub const EVENTO_EXCLUIDO: &str = "Evento excluído com sucesso";

const ERRO_RECUPERAR_EVENTOS: &str = "Erro ao tentar recuperar os eventos.";
const ERRO_RECUPERAR_EVENTO: &str = "Erro ao tentar recuperar o evento.";
const ERRO_RECUPERAR_POR_TEMA: &str = "Erro ao tentar recuperar os eventos por tema.";
const ERRO_CADASTRAR: &str = "Erro ao tentar cadastrar o evento.";
const ERRO_ATUALIZAR: &str = "Erro ao tentar atualizar o evento.";
const ERRO_DELETAR: &str = "Erro ao tentar deletar o evento.";

// ============ Query Types ============

/// `incluirPalestrantes`, accepting `true`/`True`/`TRUE`/`1` and friends
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PalestrantesQuery {
    #[serde(rename = "incluirPalestrantes", deserialize_with = "lenient_bool")]
    pub incluir_palestrantes: bool,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(de::Error::custom(format!("invalid boolean `{}`", other))),
    }
}

/// `eventoId` for PUT/DELETE. Absent means 0, which no evento ever has.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventoIdQuery {
    #[serde(rename = "eventoId")]
    pub evento_id: EventoId,
}

// ============ Handlers ============

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": proeventos_utils::current_timestamp_secs()
    }))
}

/// GET /api/eventos
pub async fn get_all_eventos(
    State(state): State<AppState>,
    Query(query): Query<PalestrantesQuery>,
) -> Result<Json<Vec<Evento>>, ApiError> {
    let eventos = state
        .evento_service
        .get_all_eventos(query.incluir_palestrantes)
        .await
        .map_err(ApiError::internal(ERRO_RECUPERAR_EVENTOS))?
        .ok_or(ApiError::NotFound(NENHUM_EVENTO))?;

    Ok(Json(eventos))
}

/// GET /api/eventos/:evento_id
pub async fn get_evento_by_id(
    State(state): State<AppState>,
    Path(evento_id): Path<EventoId>,
    Query(query): Query<PalestrantesQuery>,
) -> Result<Json<Evento>, ApiError> {
    let evento = state
        .evento_service
        .get_evento_by_id(evento_id, query.incluir_palestrantes)
        .await
        .map_err(ApiError::internal(ERRO_RECUPERAR_EVENTO))?
        .ok_or(ApiError::NotFound(EVENTO_NAO_CADASTRADO))?;

    Ok(Json(evento))
}

/// GET /api/eventos/tema/:tema
pub async fn get_eventos_by_tema(
    State(state): State<AppState>,
    Path(tema): Path<String>,
    Query(query): Query<PalestrantesQuery>,
) -> Result<Json<Vec<Evento>>, ApiError> {
    let eventos = state
        .evento_service
        .get_eventos_by_tema(&tema, query.incluir_palestrantes)
        .await
        .map_err(ApiError::internal(ERRO_RECUPERAR_POR_TEMA))?
        .ok_or(ApiError::NotFound(TEMA_SEM_EVENTOS))?;

    Ok(Json(eventos))
}

/// POST /api/eventos
pub async fn add_evento(
    State(state): State<AppState>,
    payload: Result<Json<Evento>, JsonRejection>,
) -> Result<Json<Evento>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::rejected(FALHA_CADASTRAR))?;

    let evento = state
        .evento_service
        .add_evento(&payload)
        .await
        .map_err(ApiError::internal(ERRO_CADASTRAR))?
        .ok_or(ApiError::BadRequest(FALHA_CADASTRAR))?;

    log::info!("Evento {} cadastrado", evento.evento_id);
    Ok(Json(evento))
}

/// PUT /api/eventos?eventoId=N
pub async fn update_evento(
    State(state): State<AppState>,
    Query(query): Query<EventoIdQuery>,
    payload: Result<Json<Evento>, JsonRejection>,
) -> Result<Json<Evento>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::rejected(FALHA_ATUALIZAR))?;

    let evento = state
        .evento_service
        .update_evento(query.evento_id, &payload)
        .await
        .map_err(ApiError::internal(ERRO_ATUALIZAR))?
        .ok_or(ApiError::BadRequest(FALHA_ATUALIZAR))?;

    log::info!("Evento {} atualizado", evento.evento_id);
    Ok(Json(evento))
}

/// DELETE /api/eventos?eventoId=N
pub async fn delete_evento(
    State(state): State<AppState>,
    Query(query): Query<EventoIdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .evento_service
        .delete_evento(query.evento_id)
        .await
        .map_err(ApiError::internal(ERRO_DELETAR))?;

    if !deleted {
        return Err(ApiError::BadRequest(FALHA_DELETAR));
    }

    log::info!("Evento {} excluído", query.evento_id);
    Ok((StatusCode::OK, EVENTO_EXCLUIDO))
}

//! Note endpoints.
//!
//! POST /notes, GET /notes, GET /notes/:id

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Extension, Path},
    Json,
};
use serde::Deserialize;

use crate::domains::notes::{Note, NoteData};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub content: String,
}

pub async fn create_note_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> ApiResult<Json<NoteData>> {
    let Json(request) = payload?;

    let content = request.content.trim();
    if content.is_empty() {
        return Err(ApiError::BadRequest("content is required".into()));
    }

    let note = Note::create(content, &state.db_pool).await?;
    tracing::info!(note_id = note.id, "Note created");

    Ok(Json(NoteData::new(note, Vec::new())))
}

pub async fn list_notes_handler(
    Extension(state): Extension<AppState>,
) -> ApiResult<Json<Vec<NoteData>>> {
    Ok(Json(NoteData::list(&state.db_pool).await?))
}

pub async fn get_note_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<NoteData>> {
    let Path(id) = id?;

    NoteData::find_by_id(id, &state.db_pool)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("note not found".into()))
}

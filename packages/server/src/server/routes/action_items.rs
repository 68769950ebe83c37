//! Action item endpoints.
//!
//! POST /action-items/extract       heuristics first, LLM fallback
//! POST /action-items/extract-llm   LLM only
//! GET  /action-items?note_id=      list, newest first
//! POST /action-items/:id/done      toggle completion

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    Json,
};
use extraction::Extraction;
use serde::{Deserialize, Serialize};

use crate::domains::action_items::{ActionItem, ExtractResponse};
use crate::domains::notes::Note;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub save_note: bool,
    /// When false, skip the heuristics and ask the LLM directly.
    #[serde(default = "default_true")]
    pub prefer_heuristic: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListActionItemsQuery {
    pub note_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MarkDoneRequest {
    #[serde(default = "default_true")]
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct MarkDoneResponse {
    pub id: i64,
    pub done: bool,
}

pub async fn extract_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> ApiResult<Json<ExtractResponse>> {
    let Json(request) = payload?;
    run_extraction(&state, request, false).await.map(Json)
}

pub async fn extract_llm_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> ApiResult<Json<ExtractResponse>> {
    let Json(request) = payload?;
    run_extraction(&state, request, true).await.map(Json)
}

async fn run_extraction(
    state: &AppState,
    request: ExtractRequest,
    llm_only: bool,
) -> ApiResult<ExtractResponse> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text is required".into()));
    }

    let Extraction {
        items,
        source,
        llm_failure,
    } = if llm_only {
        state.extractor.extract_llm_only(text).await
    } else {
        state
            .extractor
            .extract_with(text, request.prefer_heuristic)
            .await
    };

    let (note_id, summaries) = if request.save_note {
        let (note, summaries) = Note::create_with_items(text, &items, &state.db_pool).await?;
        (Some(note.id), summaries)
    } else {
        (None, ActionItem::insert_many(&items, None, &state.db_pool).await?)
    };
    tracing::info!(
        note_id = ?note_id,
        items = summaries.len(),
        source = ?source,
        "Action items extracted"
    );

    Ok(ExtractResponse {
        note_id,
        items: summaries,
        source,
        llm_error: llm_failure.map(|f| f.to_string()),
    })
}

pub async fn list_action_items_handler(
    Extension(state): Extension<AppState>,
    query: Result<Query<ListActionItemsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ActionItem>>> {
    let Query(query) = query?;
    Ok(Json(ActionItem::list(query.note_id, &state.db_pool).await?))
}

/// An empty body means `{"done": true}`. A non-empty body must be a valid
/// `{"done": bool}` object, with or without a JSON content type.
pub async fn mark_done_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<MarkDoneResponse>> {
    let Path(id) = id?;
    let done = parse_mark_done(&body)?;

    if !ActionItem::set_done(id, done, &state.db_pool).await? {
        return Err(ApiError::NotFound("action item not found".into()));
    }

    Ok(Json(MarkDoneResponse { id, done }))
}

fn parse_mark_done(body: &[u8]) -> ApiResult<bool> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(default_true());
    }
    let Json(request) = Json::<MarkDoneRequest>::from_bytes(body)?;
    Ok(request.done)
}

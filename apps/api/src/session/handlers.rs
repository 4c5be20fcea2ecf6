//! Axum route handlers for the Session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::handlers::{build_comparison, CompareResponse};
use crate::errors::AppError;
use crate::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ComparisonAddRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ComparisonUpdateResponse {
    pub changed: bool,
    pub session: Session,
}

#[derive(Debug, Serialize)]
pub struct SessionComparisonResponse {
    pub codes: Vec<String>,
    pub ready: bool,
    #[serde(flatten)]
    pub comparison: CompareResponse,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> (StatusCode, Json<Session>) {
    (StatusCode::CREATED, Json(state.sessions.create()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    state
        .sessions
        .get(id)
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// PUT /api/v1/sessions/:id/selection
///
/// `{"code": null}` clears the selection.
pub async fn handle_set_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<Session>, AppError> {
    let code = request.code.filter(|c| !c.trim().is_empty());
    let (_, session) = state
        .sessions
        .update(id, |session| match &code {
            Some(code) => session.select(code),
            None => session.clear_selection(),
        })
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(session))
}

/// POST /api/v1/sessions/:id/comparison
pub async fn handle_add_to_comparison(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ComparisonAddRequest>,
) -> Result<Json<ComparisonUpdateResponse>, AppError> {
    if request.code.trim().is_empty() {
        return Err(AppError::Validation("code cannot be empty".to_string()));
    }

    let (changed, session) = state
        .sessions
        .update(id, |session| session.add_to_comparison(&request.code))
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(ComparisonUpdateResponse { changed, session }))
}

/// DELETE /api/v1/sessions/:id/comparison/:code
pub async fn handle_remove_from_comparison(
    State(state): State<AppState>,
    Path((id, code)): Path<(Uuid, String)>,
) -> Result<Json<ComparisonUpdateResponse>, AppError> {
    let (changed, session) = state
        .sessions
        .update(id, |session| session.remove_from_comparison(&code))
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(ComparisonUpdateResponse { changed, session }))
}

/// DELETE /api/v1/sessions/:id/comparison
pub async fn handle_clear_comparison(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |session| session.clear_comparison())
        .ok_or_else(|| session_not_found(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/comparison
///
/// Rows for the session's queued codes. `ready` is false below two codes;
/// the rows are returned either way.
pub async fn handle_session_comparison(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionComparisonResponse>, AppError> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    let comparison = build_comparison(&state, &session.comparison).await;
    Ok(Json(SessionComparisonResponse {
        ready: session.is_comparison_ready(),
        codes: session.comparison,
        comparison,
    }))
}

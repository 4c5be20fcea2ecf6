//! Axum route handlers for direct catalog reads.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{MajorRecord, OccupationRecord, OccupationSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldQuery {
    pub field: String,
}

/// GET /api/v1/fields
pub async fn handle_list_fields(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.list_all_fields())
}

/// GET /api/v1/occupations?field=
///
/// Field names contain '/', so the field travels as a query parameter.
/// An unrecognized field is an empty listing, not an error.
pub async fn handle_list_by_field(
    State(state): State<AppState>,
    Query(query): Query<FieldQuery>,
) -> Result<Json<Vec<OccupationSummary>>, AppError> {
    if query.field.trim().is_empty() {
        return Err(AppError::Validation("field cannot be empty".to_string()));
    }
    Ok(Json(state.catalog.list_by_field(&query.field).await))
}

/// GET /api/v1/occupations/:code
pub async fn handle_get_occupation(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<OccupationRecord>, AppError> {
    state
        .catalog
        .get_by_code(&code)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Occupation {code} not found")))
}

/// GET /api/v1/majors/:code
pub async fn handle_get_major(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MajorRecord>, AppError> {
    state
        .catalog
        .get_major(&code)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Major {code} not found")))
}

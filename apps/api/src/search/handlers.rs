//! Axum route handlers for the Search API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::OccupationSummary;
use crate::search::{featured, search};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
    pub field: Option<String>,
}

/// GET /api/v1/occupations/search?keyword=&field=
///
/// No matches is an empty array, never an error.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<OccupationSummary>> {
    let field = query.field.as_deref().filter(|f| !f.trim().is_empty());
    Json(search(&state.catalog, &query.keyword, field).await)
}

/// GET /api/v1/occupations/featured
pub async fn handle_featured(State(state): State<AppState>) -> Json<Vec<OccupationSummary>> {
    Json(featured(&state.catalog).await)
}

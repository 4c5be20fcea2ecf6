//! Axum route handlers for the Aggregation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::aggregation::insights::{ComparisonScores, FieldOverview, SalaryPoint, SkillProfile};
use crate::aggregation::{
    compare_occupations, comparison_scores, industry_overview, project_career_path,
    project_education_mapping, salary_distribution, skill_profile, CareerPathProjection,
    ComparisonRow, EducationMapping,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub codes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub rows: Vec<ComparisonRow>,
    pub salary_distribution: Vec<SalaryPoint>,
    pub scores: Vec<ComparisonScores>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/compare
///
/// Unknown codes are dropped from the table; the response may be shorter than the request.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Json<CompareResponse> {
    Json(build_comparison(&state, &request.codes).await)
}

/// Shared by the stateless compare endpoint and the session comparison endpoint.
pub async fn build_comparison(state: &AppState, codes: &[String]) -> CompareResponse {
    let rows = compare_occupations(&state.catalog, codes).await;
    CompareResponse {
        salary_distribution: salary_distribution(&rows),
        scores: comparison_scores(&rows),
        rows,
    }
}

/// GET /api/v1/occupations/:code/career-path
pub async fn handle_career_path(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CareerPathProjection>, AppError> {
    project_career_path(&state.catalog, &code)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Occupation {code} not found")))
}

/// GET /api/v1/occupations/:code/education
pub async fn handle_education(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<EducationMapping>, AppError> {
    project_education_mapping(&state.catalog, &code)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Occupation {code} not found")))
}

/// GET /api/v1/occupations/:code/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<SkillProfile>, AppError> {
    state
        .catalog
        .get_by_code(&code)
        .await
        .map(|record| Json(skill_profile(&record)))
        .ok_or_else(|| AppError::NotFound(format!("Occupation {code} not found")))
}

/// GET /api/v1/fields/overview
pub async fn handle_industry_overview(State(state): State<AppState>) -> Json<Vec<FieldOverview>> {
    Json(industry_overview(&state.catalog).await)
}

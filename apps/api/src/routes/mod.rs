pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::aggregation::handlers as aggregation;
use crate::catalog::handlers as catalog;
use crate::search::handlers as search;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/fields", get(catalog::handle_list_fields))
        .route(
            "/api/v1/fields/overview",
            get(aggregation::handle_industry_overview),
        )
        .route("/api/v1/occupations", get(catalog::handle_list_by_field))
        .route("/api/v1/majors/:code", get(catalog::handle_get_major))
        // Search
        .route("/api/v1/occupations/search", get(search::handle_search))
        .route("/api/v1/occupations/featured", get(search::handle_featured))
        // Occupation detail and projections
        .route("/api/v1/occupations/:code", get(catalog::handle_get_occupation))
        .route(
            "/api/v1/occupations/:code/career-path",
            get(aggregation::handle_career_path),
        )
        .route(
            "/api/v1/occupations/:code/education",
            get(aggregation::handle_education),
        )
        .route(
            "/api/v1/occupations/:code/skills",
            get(aggregation::handle_skills),
        )
        .route("/api/v1/compare", post(aggregation::handle_compare))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", get(session::handle_get_session))
        .route(
            "/api/v1/sessions/:id/selection",
            put(session::handle_set_selection),
        )
        .route(
            "/api/v1/sessions/:id/comparison",
            post(session::handle_add_to_comparison)
                .get(session::handle_session_comparison)
                .delete(session::handle_clear_comparison),
        )
        .route(
            "/api/v1/sessions/:id/comparison/:code",
            delete(session::handle_remove_from_comparison),
        )
        .with_state(state)
}

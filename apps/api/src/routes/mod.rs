pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::gating::handlers as gating;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analyses
        .route(
            "/api/v1/analyses",
            post(analysis::handle_create_analysis).get(analysis::handle_list_analyses),
        )
        .route("/api/v1/analyses/latest", get(analysis::handle_latest_analysis))
        .route("/api/v1/analyses/normalize", post(analysis::handle_normalize))
        .route(
            "/api/v1/analyses/:id",
            get(analysis::handle_get_analysis).delete(analysis::handle_delete_analysis),
        )
        .route(
            "/api/v1/analyses/:id/skills/toggle",
            post(analysis::handle_toggle_skill),
        )
        .route(
            "/api/v1/analyses/:id/export/:section",
            get(analysis::handle_export),
        )
        // Gating
        .route("/api/v1/checklist", get(gating::handle_get_checklist))
        .route(
            "/api/v1/checklist/items/:item_id",
            put(gating::handle_set_item),
        )
        .route("/api/v1/checklist/reset", post(gating::handle_reset_checklist))
        .route("/api/v1/ship", get(gating::handle_ship_status))
        .route(
            "/api/v1/proof",
            get(gating::handle_get_proof).put(gating::handle_put_proof),
        )
        .route("/api/v1/proof/submission", get(gating::handle_get_submission))
        .with_state(state)
}

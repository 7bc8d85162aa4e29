pub mod catalog;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::intake::handlers as intake;
use crate::portal::handlers as portal;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog & reference
        .route("/api/v1/catalog", get(catalog::handle_catalog))
        .route("/api/v1/rays", get(catalog::handle_rays))
        .route("/api/v1/rays/text", get(catalog::handle_rays_text))
        // Intake form
        .route("/api/v1/intake/reduce", post(intake::handle_reduce))
        .route("/api/v1/intake/autofill", post(intake::handle_autofill))
        .route("/api/v1/intake/submit", post(intake::handle_submit))
        // Gateway
        .route(
            "/api/v1/positions/estimate",
            post(analysis::handle_estimate_positions),
        )
        .route("/api/v1/analysis", post(analysis::handle_analysis))
        .route("/api/v1/analysis/text", post(analysis::handle_analysis_text))
        // Portal view selector
        .route("/api/v1/portal/navigate", post(portal::handle_navigate))
        .route("/api/v1/portal/submit", post(portal::handle_submit))
        .with_state(state)
}

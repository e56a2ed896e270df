pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless analysis
        .route("/api/v1/analysis/note", post(handlers::handle_analyze_note))
        .route(
            "/api/v1/analysis/comprehensive",
            post(handlers::handle_analyze_snapshot),
        )
        // Stored personnel history and reports
        .route(
            "/api/v1/personnel/:id/analysis",
            post(handlers::handle_analyze_personnel),
        )
        .route(
            "/api/v1/personnel/:id/reports",
            get(handlers::handle_list_reports),
        )
        .route("/api/v1/reports/:id", get(handlers::handle_get_report))
        .with_state(state)
}

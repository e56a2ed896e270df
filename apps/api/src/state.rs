use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::ModelInvoker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Model boundary for analysis requests. `LlmClient` in production.
    pub llm: Arc<dyn ModelInvoker>,
}

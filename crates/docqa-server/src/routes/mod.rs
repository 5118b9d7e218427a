//! HTTP route handlers.

pub mod health;
pub mod run;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::routes())
        .nest("/hackrx", run::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{Extension, Router, extract::DefaultBodyLimit, routing::post};
use std::sync::Arc;

use super::{high_stock, method_not_allowed};
use crate::app_state::models::AppState;
use crate::layers::create_trace;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/high", post(high_stock).fallback(method_not_allowed))
        // Every payload is judged by the JSON decoder, never by size.
        .layer(DefaultBodyLimit::disable())
        .layer(Extension(app_state))
        .layer(create_trace())
}

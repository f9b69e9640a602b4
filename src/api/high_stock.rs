use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::app_state::models::AppState;

#[derive(Debug, Deserialize)]
pub struct HighStockRequest {
    pub high: f64,
}

/// `POST /high`. The body is decoded by hand so that every malformed payload
/// maps to 400 with the decoder message, whatever the `Content-Type`.
pub async fn high_stock(
    Extension(app_state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Response {
    let request: HighStockRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };
    drop(body);

    match app_state
        .stock_repository
        .find_high_stock(request.high)
        .await
    {
        Ok(Some(symbol)) => {
            debug!(high = request.high, %symbol, "high stock found");
            (StatusCode::OK, format!("stockSymbol: {symbol}")).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "stockSymbol: not found").into_response(),
        Err(err) => {
            error!(high = request.high, error = %err, "find high stock");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

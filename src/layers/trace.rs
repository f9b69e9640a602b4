use axum::{body::Body, http::Request};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span, info_span};

type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Request span carrying method and path; responses logged at info.
pub fn create_trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeRequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::Instrument;

/// One log line per request: method, path, status and latency.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let span = tracing::info_span!("http.request", method = %method, path = %path);
    let response = next.run(request).instrument(span).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    if status.is_server_error() {
        tracing::warn!("{} {} {} {:.1} ms", method, path, status.as_u16(), elapsed_ms);
    } else {
        tracing::info!("{} {} {} {:.1} ms", method, path, status.as_u16(), elapsed_ms);
    }

    response
}

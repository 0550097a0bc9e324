use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware for HTTP request logging
///
/// Logs method, path, status code and duration of every request.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration = start.elapsed().as_millis();
    if response.status().is_success() {
        tracing::info!("{} {:>6} {} | {}ms", status, method, path, duration);
    } else {
        tracing::warn!("{} {:>6} {} | {}ms", status, method, path, duration);
    }

    response
}

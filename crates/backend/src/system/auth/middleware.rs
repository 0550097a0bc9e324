use axum::{body::Body, extract::Request, middleware::Next, response::{IntoResponse, Response}};

use super::basic;
use crate::domain::a001_product::error::ProductError;

/// Middleware that requires Basic credentials when auth is configured
pub async fn require_basic_auth(req: Request<Body>, next: Next) -> Response {
    let Some(auth) = basic::configured() else {
        return next.run(req).await;
    };

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    if !basic::is_authorized(header, auth) {
        tracing::warn!("Rejected {} {}: bad credentials", req.method(), req.uri().path());
        return ProductError::Unauthorized.into_response();
    }

    next.run(req).await
}

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Configure all application routes
pub fn configure_routes() -> Router {
    let product_api = Router::new()
        .route("/api/product/categories", get(handlers::a002_category::list_all))
        .route(
            "/api/product",
            post(handlers::a001_product::create).get(handlers::a001_product::list_all),
        )
        .route("/api/product/:id", get(handlers::a001_product::get_by_id))
        .layer(middleware::from_fn(system::auth::middleware::require_basic_auth));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(product_api)
}

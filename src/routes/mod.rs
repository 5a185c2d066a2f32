mod health;
mod pages;
mod products;
mod proxy;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/services", get(pages::services))
        .route("/products", get(pages::products))
        .route("/contact", get(pages::contact))
        .route("/about", get(pages::about))
        .route("/repair", get(pages::repair))
        .route("/product/{id}", get(pages::product_detail))
        .route("/api/proxy/products", get(proxy::proxy_products))
        .route("/api/products", get(products::list_products))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .fallback(pages::not_found)
}

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{AppState, error::Result, services::upstream_service};

/// Same-origin relay for the upstream catalog listing. The upstream body is
/// returned byte for byte.
pub async fn proxy_products(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let url = state.config.catalog.products_url();
    tracing::debug!("Proxying products request to {}", url);

    let body = upstream_service::get_body(&state.http, &url).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}

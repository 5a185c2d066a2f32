use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{AppState, error::Result, services::upstream_service};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    upstream_service::probe(&state.http, &state.config.catalog.products_url()).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "upstream": "reachable"
        })),
    ))
}

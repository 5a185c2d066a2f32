use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use super::UpstreamError;

pub const PROXY_FAILURE_MESSAGE: &str = "Failed to fetch products";

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    Upstream(UpstreamError),
    TemplateError(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Upstream(e) => write!(f, "Upstream unavailable: {}", e),
            AppError::TemplateError(e) => write!(f, "Template render failure: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err)
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::TemplateError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server configuration error" })),
                )
                    .into_response()
            }
            AppError::Upstream(ref e) => {
                tracing::warn!("Upstream error: {}", e);
                let status = e.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let body = Json(json!({
                    "success": false,
                    "message": PROXY_FAILURE_MESSAGE,
                    "error": e.to_string(),
                }));

                (status, body).into_response()
            }
            AppError::TemplateError(ref e) => {
                tracing::error!("Template render failure: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

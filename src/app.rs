use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
};
use reqwest::Client;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    config::AppConfig,
    data,
    error::{AppError, Result},
    routes,
    services::{catalog_service::CatalogService, upstream_service},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: Client,
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let http = upstream_service::build_client()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let fallback = match config.catalog.fallback_path {
            Some(ref path) => data::load_fallback_file(path)?,
            None => data::builtin_products(),
        };

        let catalog = CatalogService::new(
            http.clone(),
            config.catalog.fetcher_url(),
            Arc::new(fallback),
        );

        tracing::info!(
            "Catalog source: {} (proxy upstream: {})",
            catalog.endpoint(),
            config.catalog.products_url()
        );

        Ok(Self {
            config: Arc::new(config),
            http,
            catalog,
        })
    }
}

pub fn build(config: &AppConfig) -> Result<Router> {
    let state = AppState::new(config.clone())?;

    let app = routes::create_router()
        .nest_service("/public", ServeDir::new(&config.assets.static_dir))
        .layer(TraceLayer::new_for_http());

    let app = if config.cors.allowed_origins.is_empty() {
        app
    } else {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([http::header::CONTENT_TYPE])
            .allow_origin(allowed_origins);

        app.layer(cors)
    };

    Ok(app.with_state(state))
}

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::UpstreamError,
    models::{Product, normalize_records},
    services::upstream_service,
};

pub const DEFAULT_ENVELOPE_MESSAGE: &str = "Invalid response from products API";

/// Outcome of a catalog fetch. Both variants carry a usable product list.
#[derive(Debug)]
pub enum Catalog {
    Live(Vec<Product>),
    Fallback {
        products: Vec<Product>,
        reason: UpstreamError,
    },
}

impl Catalog {
    pub fn products(&self) -> &[Product] {
        match self {
            Catalog::Live(products) => products,
            Catalog::Fallback { products, .. } => products,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Catalog::Live(_))
    }

    pub fn source(&self) -> &'static str {
        match self {
            Catalog::Live(_) => "live",
            Catalog::Fallback { .. } => "fallback",
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    client: Client,
    endpoint: String,
    fallback: Arc<Vec<Product>>,
}

impl CatalogService {
    pub fn new(client: Client, endpoint: impl Into<String>, fallback: Arc<Vec<Product>>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            fallback,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the live catalog. Never fails: any upstream problem yields the
    /// fallback list together with the reason.
    pub async fn get_products(&self) -> Catalog {
        tracing::debug!("Fetching products from: {}", self.endpoint);

        match self.fetch_live().await {
            Ok(products) => {
                tracing::info!("Fetched {} products from upstream", products.len());
                Catalog::Live(products)
            }
            Err(reason) => {
                tracing::warn!(
                    "Failed to fetch products from {}, using fallback: {}",
                    self.endpoint,
                    reason
                );
                Catalog::Fallback {
                    products: self.fallback.as_ref().clone(),
                    reason,
                }
            }
        }
    }

    async fn fetch_live(&self) -> Result<Vec<Product>, UpstreamError> {
        let body = upstream_service::get_body(&self.client, &self.endpoint).await?;
        decode_catalog(&body)
    }
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Accepts either a bare array of records or a `{success, data, message}` envelope.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<Product>, UpstreamError> {
    let records = match serde_json::from_slice::<Value>(body)? {
        Value::Array(records) => records,
        envelope @ Value::Object(_) => unwrap_envelope(envelope)?,
        _ => return Err(UpstreamError::UnexpectedShape),
    };

    Ok(normalize_records(records))
}

fn unwrap_envelope(value: Value) -> Result<Vec<Value>, UpstreamError> {
    let envelope: Envelope =
        serde_json::from_value(value).map_err(|_| UpstreamError::UnexpectedShape)?;

    let message = envelope
        .message
        .unwrap_or_else(|| DEFAULT_ENVELOPE_MESSAGE.to_string());

    if !envelope.success {
        return Err(UpstreamError::Rejected(message));
    }

    match envelope.data {
        Some(Value::Array(records)) => Ok(records),
        _ => Err(UpstreamError::Rejected(message)),
    }
}

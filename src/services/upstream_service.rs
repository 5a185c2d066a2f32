use axum::body::Bytes;
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};

use crate::error::UpstreamError;

/// Builds the default headers for upstream requests.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!("mamdani-web/", env!("CARGO_PKG_VERSION"))),
    );
    headers
}

/// One client for the whole process; requests share its connection pool.
pub fn build_client() -> Result<Client, UpstreamError> {
    let client = Client::builder().default_headers(build_headers()).build()?;
    Ok(client)
}

/// Reachability check: only the status line is awaited, the body is never read.
pub async fn probe(client: &Client, url: &str) -> Result<(), UpstreamError> {
    let status = client.get(url).send().await?.status();
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }
    Ok(())
}

/// Single GET, no retries. Non-2xx answers are errors carrying the status.
pub async fn get_body(client: &Client, url: &str) -> Result<Bytes, UpstreamError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }

    let body = response.bytes().await?;
    tracing::debug!("Upstream {} answered {} ({} bytes)", url, status, body.len());

    Ok(body)
}

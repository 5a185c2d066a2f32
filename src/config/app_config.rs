use std::{env, path::PathBuf};

use crate::error::{AppError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.mamdanicomputers.com";
pub const PRODUCTS_PATH: &str = "/api/v1/products/public";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub cors: CorsConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api_base_url: String,
    /// Where the catalog fetcher reads from; the upstream products URL unless overridden.
    pub catalog_url: Option<String>,
    pub fallback_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            server: ServerConfig {
                host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: non_empty("PORT")
                    .unwrap_or_else(|| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
            },
            catalog: CatalogConfig {
                api_base_url: non_empty("API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
                catalog_url: non_empty("CATALOG_URL"),
                fallback_path: non_empty("FALLBACK_CATALOG").map(PathBuf::from),
            },
            cors: CorsConfig {
                allowed_origins: non_empty("ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            assets: AssetsConfig {
                static_dir: non_empty("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("public")),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl CatalogConfig {
    /// Upstream catalog listing the proxy forwards to.
    pub fn products_url(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), PRODUCTS_PATH)
    }

    pub fn fetcher_url(&self) -> String {
        self.catalog_url
            .clone()
            .unwrap_or_else(|| self.products_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(
            config.catalog.products_url(),
            "https://api.mamdanicomputers.com/api/v1/products/public"
        );
        assert_eq!(config.catalog.fetcher_url(), config.catalog.products_url());
        assert!(config.catalog.fallback_path.is_none());
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.assets.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("API_BASE_URL", "http://localhost:4000/"),
            ("CATALOG_URL", "http://localhost:3000/api/proxy/products"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.catalog.products_url(),
            "http://localhost:4000/api/v1/products/public"
        );
        assert_eq!(
            config.catalog.fetcher_url(),
            "http://localhost:3000/api/proxy/products"
        );
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_empty_base_url_uses_default() {
        let config = config_from(&[("API_BASE_URL", "  ")]).unwrap();
        assert_eq!(config.catalog.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}

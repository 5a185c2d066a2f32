mod app_config;

pub use app_config::{
    AppConfig, AssetsConfig, CatalogConfig, CorsConfig, DEFAULT_API_BASE_URL, PRODUCTS_PATH,
    ServerConfig,
};

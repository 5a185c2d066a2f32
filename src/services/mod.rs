pub mod catalog_service;
pub mod upstream_service;

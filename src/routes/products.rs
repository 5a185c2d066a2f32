use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::{
    AppState,
    models::{Product, ProductQuery},
    queries::catalog_queries,
};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub source: &'static str,
    pub count: usize,
    pub products: Vec<Product>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Json<CatalogResponse> {
    let catalog = state.catalog.get_products().await;
    let products = catalog_queries::run_query(catalog.products(), &params);

    Json(CatalogResponse {
        source: catalog.source(),
        count: products.len(),
        products,
    })
}

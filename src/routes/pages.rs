use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};

use crate::{
    AppState,
    error::Result,
    models::ProductQuery,
    queries::catalog_queries,
    templates::{
        AboutTemplate, ContactTemplate, IndexTemplate, NotFoundTemplate, ProductCard,
        ProductTemplate, ProductsTemplate, RepairTemplate, SelectOption, ServicesTemplate, render,
    },
};

pub async fn index() -> Result<Html<String>> {
    render(&IndexTemplate {
        title: "Home".to_string(),
    })
}

pub async fn services() -> Result<Html<String>> {
    render(&ServicesTemplate {
        title: "Our Services".to_string(),
    })
}

pub async fn contact() -> Result<Html<String>> {
    render(&ContactTemplate {
        title: "Contact Us".to_string(),
    })
}

pub async fn about() -> Result<Html<String>> {
    render(&AboutTemplate {
        title: "About Us".to_string(),
    })
}

pub async fn repair() -> Result<Html<String>> {
    render(&RepairTemplate {
        title: "Repair Services".to_string(),
    })
}

pub async fn products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Result<Html<String>> {
    let catalog = state.catalog.get_products().await;
    let listed = catalog_queries::run_query(catalog.products(), &params);

    render(&ProductsTemplate {
        title: "Products".to_string(),
        count: listed.len(),
        products: listed.iter().map(ProductCard::from).collect(),
        categories: SelectOption::categories(
            catalog_queries::categories(catalog.products()),
            params.category.as_deref(),
        ),
        sort_options: SelectOption::sort_modes(params.sort_mode()),
        query: params.q.clone().unwrap_or_default(),
        min_rupees: params.min_rupees.map(|r| r.to_string()).unwrap_or_default(),
        max_rupees: params.max_rupees.map(|r| r.to_string()).unwrap_or_default(),
        using_fallback: !catalog.is_live(),
    })
}

pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let catalog = state.catalog.get_products().await;
    let product = catalog
        .products()
        .iter()
        .find(|p| p.id.to_string() == id)
        .map(ProductCard::from);

    if product.is_none() {
        tracing::debug!("Product {} not in catalog ({})", id, catalog.source());
    }

    render(&ProductTemplate {
        title: "Product Details".to_string(),
        product_id: id,
        product,
        using_fallback: !catalog.is_live(),
    })
}

pub async fn not_found(uri: Uri) -> Result<impl IntoResponse> {
    let page = render(&NotFoundTemplate {
        title: "Page Not Found".to_string(),
        path: uri.path().to_string(),
    })?;

    Ok((StatusCode::NOT_FOUND, page))
}

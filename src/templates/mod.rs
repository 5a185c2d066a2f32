//! Askama templates
//!
//! Template structs for the storefront pages. Every page extends
//! `layout.html`, which reads `title`.

use askama::Template;
use axum::response::Html;

use crate::{
    error::Result,
    models::{Product, SortMode},
};

/// Renders a template into an HTML response; render failures become a 500.
pub fn render<T: Template>(template: &T) -> Result<Html<String>> {
    Ok(Html(template.render()?))
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
}

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub title: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub title: String,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub title: String,
}

#[derive(Template)]
#[template(path = "repair.html")]
pub struct RepairTemplate {
    pub title: String,
}

/// Product listing with the active search, filter and sort state.
#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsTemplate {
    pub title: String,
    pub products: Vec<ProductCard>,
    pub categories: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
    pub query: String,
    pub min_rupees: String,
    pub max_rupees: String,
    pub count: usize,
    pub using_fallback: bool,
}

#[derive(Template)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub title: String,
    pub product_id: String,
    pub product: Option<ProductCard>,
    pub using_fallback: bool,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub path: String,
}

/// Display-ready view of a product.
pub struct ProductCard {
    pub id: String,
    /// Detail page link with the id percent-encoded as one path segment.
    pub href: String,
    pub name: String,
    pub category: String,
    pub condition: &'static str,
    pub price: String,
    pub image: String,
    pub description: String,
    pub specs: Vec<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            href: format!("/product/{}", urlencoding::encode(&product.id.to_string())),
            name: product.name.clone(),
            category: product.category.clone(),
            condition: product.condition.as_str(),
            price: product.display_price(),
            image: product.primary_image().unwrap_or_default().to_string(),
            description: product.description.clone().unwrap_or_default(),
            specs: product.specs.iter().map(ToString::to_string).collect(),
        }
    }
}

/// An `<option>` in a filter dropdown.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn categories(categories: Vec<String>, active: Option<&str>) -> Vec<Self> {
        categories
            .into_iter()
            .map(|category| Self {
                selected: active == Some(category.as_str()),
                label: category.clone(),
                value: category,
            })
            .collect()
    }

    pub fn sort_modes(active: SortMode) -> Vec<Self> {
        SortMode::ALL
            .iter()
            .map(|mode| Self {
                value: mode.as_str().to_string(),
                label: mode.label().to_string(),
                selected: *mode == active,
            })
            .collect()
    }
}

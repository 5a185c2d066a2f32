use serde::Deserialize;

use crate::utils::extractors::{empty_string_as_none, unparsable_as_none};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    PriceLow,
    PriceHigh,
    #[default]
    Newest,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::PriceLow, SortMode::PriceHigh];

    /// Unrecognized values sort newest first.
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "price-low" => SortMode::PriceLow,
            "price-high" => SortMode::PriceHigh,
            _ => SortMode::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
            SortMode::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::PriceLow => "Price: Low to High",
            SortMode::PriceHigh => "Price: High to Low",
            SortMode::Newest => "Newest",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
    /// Bounds in paise.
    #[serde(default, deserialize_with = "unparsable_as_none")]
    pub min_price: Option<u64>,
    #[serde(default, deserialize_with = "unparsable_as_none")]
    pub max_price: Option<u64>,
    /// Bounds in rupees, as typed into the storefront form. Paise bounds win
    /// when both are given.
    #[serde(default, deserialize_with = "unparsable_as_none")]
    pub min_rupees: Option<f64>,
    #[serde(default, deserialize_with = "unparsable_as_none")]
    pub max_rupees: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort: Option<String>,
}

impl ProductQuery {
    pub fn sort_mode(&self) -> SortMode {
        self.sort
            .as_deref()
            .map(SortMode::from_param)
            .unwrap_or_default()
    }

    /// Inclusive price bounds, present when either end was given.
    pub fn price_range(&self) -> Option<(u64, u64)> {
        let min = self.min_price.or_else(|| self.min_rupees.and_then(rupees_to_paise));
        let max = self.max_price.or_else(|| self.max_rupees.and_then(rupees_to_paise));

        if min.is_none() && max.is_none() {
            return None;
        }
        Some((min.unwrap_or(0), max.unwrap_or(u64::MAX)))
    }
}

/// Negative or non-finite amounts are treated as absent.
fn rupees_to_paise(rupees: f64) -> Option<u64> {
    if rupees.is_finite() && rupees >= 0.0 {
        Some((rupees * 100.0).round() as u64)
    } else {
        None
    }
}

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

use super::{Product, ProductCondition, ProductId, ProductSpec};

/// A catalog record as the upstream API (or a fallback file) sends it. Two
/// shapes are in circulation: `id`/`image`/`desc`/`specs` and
/// `_id`/`images`/`description`/`specifications`.
#[derive(Debug, Deserialize)]
pub struct WireProduct {
    pub id: Option<Value>,
    #[serde(rename = "_id")]
    pub alt_id: Option<Value>,
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub condition: Option<String>,
    pub price: Option<Value>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub desc: Option<String>,
    pub description: Option<String>,
    pub specs: Option<Vec<String>>,
    pub specifications: Option<Map<String, Value>>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
}

#[derive(Debug)]
pub enum NormalizeError {
    Decode(serde_json::Error),
    MissingId,
    InvalidId(Value),
    MissingField(&'static str),
    InvalidPrice(Value),
    UnknownCondition(String),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::Decode(e) => write!(f, "undecodable record: {}", e),
            NormalizeError::MissingId => write!(f, "record has neither id nor _id"),
            NormalizeError::InvalidId(v) => write!(f, "invalid id: {}", v),
            NormalizeError::MissingField(field) => write!(f, "missing field: {}", field),
            NormalizeError::InvalidPrice(v) => write!(f, "invalid price: {}", v),
            NormalizeError::UnknownCondition(c) => write!(f, "unknown product type: {}", c),
        }
    }
}

impl std::error::Error for NormalizeError {}

impl From<serde_json::Error> for NormalizeError {
    fn from(err: serde_json::Error) -> Self {
        NormalizeError::Decode(err)
    }
}

impl TryFrom<WireProduct> for Product {
    type Error = NormalizeError;

    fn try_from(wire: WireProduct) -> Result<Self, Self::Error> {
        let id = match wire.id.filter(|v| !v.is_null()) {
            Some(id) => parse_id(id)?,
            None => parse_id(wire.alt_id.ok_or(NormalizeError::MissingId)?)?,
        };

        let name = wire.name.ok_or(NormalizeError::MissingField("name"))?;
        let price = parse_price(wire.price.ok_or(NormalizeError::MissingField("price"))?)?;
        let condition = parse_condition(wire.kind.or(wire.condition))?;

        let mut images: Vec<String> = Vec::new();
        for url in wire.image.into_iter().chain(wire.images.unwrap_or_default()) {
            if !url.is_empty() && !images.contains(&url) {
                images.push(url);
            }
        }

        let specs = match (wire.specs, wire.specifications) {
            (Some(list), _) => list
                .into_iter()
                .map(|value| ProductSpec { name: None, value })
                .collect(),
            (None, Some(map)) => map
                .into_iter()
                .map(|(name, value)| ProductSpec {
                    name: Some(name),
                    value: match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    },
                })
                .collect(),
            (None, None) => Vec::new(),
        };

        let created_at = wire
            .created_at
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Product {
            id,
            name,
            category: wire.category.unwrap_or_default(),
            condition,
            price,
            images,
            description: wire.desc.or(wire.description),
            specs,
            created_at,
        })
    }
}

fn parse_id(value: Value) -> Result<ProductId, NormalizeError> {
    match value {
        Value::Number(ref n) => match n.as_u64() {
            Some(n) => Ok(ProductId::Numeric(n)),
            None => Ok(ProductId::Text(n.to_string())),
        },
        Value::String(s) if s.is_empty() => Err(NormalizeError::MissingId),
        Value::String(s) => Ok(ProductId::Text(s)),
        other => Err(NormalizeError::InvalidId(other)),
    }
}

fn parse_price(value: Value) -> Result<u64, NormalizeError> {
    let amount = match value {
        Value::Number(ref n) => {
            if let Some(whole) = n.as_u64() {
                return Ok(whole);
            }
            n.as_f64()
        }
        Value::String(ref s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount.round() as u64),
        _ => Err(NormalizeError::InvalidPrice(value)),
    }
}

fn parse_condition(raw: Option<String>) -> Result<ProductCondition, NormalizeError> {
    let Some(raw) = raw else {
        return Ok(ProductCondition::default());
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "new" => Ok(ProductCondition::New),
        "used" => Ok(ProductCondition::Used),
        _ => Err(NormalizeError::UnknownCondition(raw)),
    }
}

/// Normalize one JSON record into the canonical shape.
pub fn normalize_record(value: Value) -> Result<Product, NormalizeError> {
    let wire: WireProduct = serde_json::from_value(value)?;
    Product::try_from(wire)
}

/// Normalize a batch of records, dropping the ones that cannot be resolved.
pub fn normalize_records(values: Vec<Value>) -> Vec<Product> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match normalize_record(value) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!("Dropping catalog record #{}: {}", index, e);
                None
            }
        })
        .collect()
}

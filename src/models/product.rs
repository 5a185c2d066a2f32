use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(u64),
    Text(String),
}

impl ProductId {
    /// Numeric value of the id, also for text ids made only of digits.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            ProductId::Numeric(n) => Some(*n),
            ProductId::Text(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Numeric(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCondition {
    #[default]
    New,
    Used,
}

impl ProductCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCondition::New => "new",
            ProductCondition::Used => "used",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSpec {
    pub name: Option<String>,
    pub value: String,
}

impl fmt::Display for ProductSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(ref name) => write!(f, "{}: {}", name, self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// Canonical catalog record. Every accepted wire shape is normalized into this
/// before any query runs over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub condition: ProductCondition,
    /// Smallest currency unit (paise).
    pub price: u64,
    pub images: Vec<String>,
    pub description: Option<String>,
    pub specs: Vec<ProductSpec>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price in rupees with grouped thousands, e.g. `Rs. 1,999.00`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

pub fn format_price(paise: u64) -> String {
    let rupees = (paise / 100).to_string();
    let mut grouped = String::with_capacity(rupees.len() + rupees.len() / 3);

    for (i, ch) in rupees.chars().enumerate() {
        if i > 0 && (rupees.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("Rs. {}.{:02}", grouped, paise % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "Rs. 0.00");
        assert_eq!(format_price(7100), "Rs. 71.00");
        assert_eq!(format_price(199_900), "Rs. 1,999.00");
        assert_eq!(format_price(123_456_789), "Rs. 1,234,567.89");
    }

    #[test]
    fn test_product_id_numeric_view() {
        assert_eq!(ProductId::Numeric(7).as_number(), Some(7));
        assert_eq!(ProductId::Text("42".to_string()).as_number(), Some(42));
        assert_eq!(ProductId::Text("65a1f".to_string()).as_number(), None);
        assert_eq!(ProductId::Text("65a1f".to_string()).to_string(), "65a1f");
    }

    #[test]
    fn test_spec_display() {
        let named = ProductSpec {
            name: Some("RAM".to_string()),
            value: "16GB".to_string(),
        };
        let bare = ProductSpec {
            name: None,
            value: "512GB SSD".to_string(),
        };
        assert_eq!(named.to_string(), "RAM: 16GB");
        assert_eq!(bare.to_string(), "512GB SSD");
    }
}

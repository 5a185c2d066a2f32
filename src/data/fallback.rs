use std::path::Path;

use serde_json::Value;

use crate::{
    error::{AppError, Result},
    models::{Product, ProductCondition, ProductId, ProductSpec, normalize_records},
};

struct Seed {
    id: u64,
    name: &'static str,
    category: &'static str,
    condition: ProductCondition,
    price: u64,
    image: &'static str,
    desc: &'static str,
    specs: [&'static str; 3],
}

const SEEDS: [Seed; 9] = [
    Seed {
        id: 1,
        name: "MacBook Pro M3 Max",
        category: "Laptops",
        condition: ProductCondition::New,
        price: 199_900,
        image: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&q=80&w=1200",
        desc: "The most powerful MacBook ever built.",
        specs: ["M3 Max Chip", "36GB Unified Memory", "1TB SSD"],
    },
    Seed {
        id: 2,
        name: "Custom Gaming Rig V2",
        category: "Desktops",
        condition: ProductCondition::New,
        price: 148_000,
        image: "https://images.unsplash.com/photo-1587202372775-e229f172b9d7?auto=format&fit=crop&q=80&w=1200",
        desc: "Crafted for enthusiasts.",
        specs: ["RTX 4080 Super", "Intel i9-14900K", "64GB DDR5"],
    },
    Seed {
        id: 3,
        name: "iPad Pro M2",
        category: "Tablets",
        condition: ProductCondition::Used,
        price: 63_900,
        image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=1200",
        desc: "Unmatched tablet performance.",
        specs: ["Apple M2 chip", "12.9-inch Display", "Face ID"],
    },
    Seed {
        id: 4,
        name: "Dell XPS 13 OLED",
        category: "Laptops",
        condition: ProductCondition::Used,
        price: 52_000,
        image: "https://images.unsplash.com/photo-1593642632823-8f785ba67e45?auto=format&fit=crop&q=80&w=1200",
        desc: "Portable power with OLED.",
        specs: ["Intel i7", "16GB RAM", "512GB SSD"],
    },
    Seed {
        id: 5,
        name: "Apple Studio Display",
        category: "Displays",
        condition: ProductCondition::New,
        price: 127_900,
        image: "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?auto=format&fit=crop&q=80&w=1200",
        desc: "5K Retina perfection.",
        specs: ["5K Resolution", "12MP Camera", "6-Speaker System"],
    },
    Seed {
        id: 6,
        name: "ThinkPad X1 Carbon",
        category: "Laptops",
        condition: ProductCondition::Used,
        price: 71_900,
        image: "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed?auto=format&fit=crop&q=80&w=1200",
        desc: "Legendary business reliability.",
        specs: ["Intel i7 vPro", "32GB RAM", "1TB SSD"],
    },
    Seed {
        id: 7,
        name: "Mechanical Keyboard Pro",
        category: "Accessories",
        condition: ProductCondition::New,
        price: 12_000,
        image: "https://images.unsplash.com/photo-1511467687858-23d96c32e4ae?auto=format&fit=crop&q=80&w=1200",
        desc: "Tactile excellence.",
        specs: ["Brown Switches", "RGB Backlit", "Wireless/Wired"],
    },
    Seed {
        id: 8,
        name: "Precision Mouse X",
        category: "Accessories",
        condition: ProductCondition::New,
        price: 7_100,
        image: "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?auto=format&fit=crop&q=80&w=1200",
        desc: "Surgical precision.",
        specs: ["25K DPI Sensor", "Ultra-lightweight", "10 Buttons"],
    },
    Seed {
        id: 9,
        name: "Mac Studio",
        category: "Desktops",
        condition: ProductCondition::New,
        price: 159_900,
        image: "https://images.unsplash.com/photo-1647427060118-4911c9821b82?auto=format&fit=crop&q=80&w=1200",
        desc: "Compact powerhouse for creators.",
        specs: ["M2 Max Chip", "32GB Memory", "512GB SSD"],
    },
];

/// Catalog served whenever the live catalog cannot be fetched.
pub fn builtin_products() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|seed| Product {
            id: ProductId::Numeric(seed.id),
            name: seed.name.to_string(),
            category: seed.category.to_string(),
            condition: seed.condition,
            price: seed.price,
            images: vec![seed.image.to_string()],
            description: Some(seed.desc.to_string()),
            specs: seed
                .specs
                .iter()
                .map(|value| ProductSpec {
                    name: None,
                    value: value.to_string(),
                })
                .collect(),
            created_at: None,
        })
        .collect()
}

/// Loads a replacement fallback catalog: a JSON array of records in any
/// accepted wire shape.
pub fn load_fallback_file(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let records: Vec<Value> = serde_json::from_str(&raw).map_err(|e| {
        AppError::ConfigError(format!("Invalid fallback catalog {}: {}", path.display(), e))
    })?;

    let products = normalize_records(records);
    tracing::info!(
        "Loaded {} fallback products from {}",
        products.len(),
        path.display()
    );

    Ok(products)
}

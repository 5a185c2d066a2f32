use std::cmp::Ordering;

use crate::models::{Product, ProductId, ProductQuery, SortMode};

/// Case-insensitive substring match on name or category.
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keeps products priced within `[min, max]`.
pub fn filter_by_price(products: &[Product], min: u64, max: u64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.price >= min && p.price <= max)
        .cloned()
        .collect()
}

pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

pub fn sort(products: &[Product], mode: SortMode) -> Vec<Product> {
    let mut sorted = products.to_vec();

    match mode {
        SortMode::PriceLow => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Newest => sorted.sort_by(newest_first),
    }

    sorted
}

/// Total order: records with a timestamp come first, newest first. Then
/// numeric ids descend, ahead of text ids, which descend lexicographically.
fn newest_first(a: &Product, b: &Product) -> Ordering {
    b.created_at
        .is_some()
        .cmp(&a.created_at.is_some())
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| id_rank(b).cmp(&id_rank(a)))
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum IdRank<'a> {
    Text(&'a str),
    Numeric(u64),
}

fn id_rank(product: &Product) -> IdRank<'_> {
    match (product.id.as_number(), &product.id) {
        (Some(n), _) => IdRank::Numeric(n),
        (None, ProductId::Text(s)) => IdRank::Text(s),
        (None, ProductId::Numeric(n)) => IdRank::Numeric(*n),
    }
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !product.category.is_empty() && !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Applies every filter present in `params`, then sorts.
pub fn run_query(products: &[Product], params: &ProductQuery) -> Vec<Product> {
    let mut result = products.to_vec();

    // text search
    if let Some(ref q) = params.q {
        result = search(&result, q);
    }

    // category
    if let Some(ref category) = params.category {
        result = filter_by_category(&result, category);
    }

    // price range
    if let Some((min, max)) = params.price_range() {
        result = filter_by_price(&result, min, max);
    }

    sort(&result, params.sort_mode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_products;
    use crate::models::ProductCondition;
    use chrono::{DateTime, TimeZone, Utc};

    fn product(id: ProductId, price: u64) -> Product {
        Product {
            id,
            name: "Item".to_string(),
            category: "Accessories".to_string(),
            condition: ProductCondition::New,
            price,
            images: Vec::new(),
            description: None,
            specs: Vec::new(),
            created_at: None,
        }
    }

    fn ids(products: &[Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_search_matches_name_and_category_case_insensitively() {
        let catalog = builtin_products();

        let laptops = search(&catalog, "laptop");
        assert_eq!(ids(&laptops), vec!["1", "4", "6"]);

        let by_name = search(&catalog, "MAC");
        assert_eq!(ids(&by_name), vec!["1", "9"]);
    }

    #[test]
    fn test_filter_by_price_inclusive_bounds() {
        let catalog = builtin_products();
        let filtered = filter_by_price(&catalog, 50_000, 150_000);

        assert_eq!(ids(&filtered), vec!["2", "3", "4", "5", "6"]);
        assert!(filtered.iter().all(|p| (50_000..=150_000).contains(&p.price)));

        let exact = filter_by_price(&catalog, 52_000, 63_900);
        assert_eq!(ids(&exact), vec!["3", "4"]);
    }

    #[test]
    fn test_filter_by_category_is_exact() {
        let catalog = builtin_products();
        assert_eq!(ids(&filter_by_category(&catalog, "Desktops")), vec!["2", "9"]);
        assert!(filter_by_category(&catalog, "desktops").is_empty());
    }

    #[test]
    fn test_filters_are_idempotent() {
        let catalog = builtin_products();

        let once = filter_by_price(&catalog, 50_000, 150_000);
        assert_eq!(filter_by_price(&once, 50_000, 150_000), once);

        let once = search(&catalog, "pro");
        assert_eq!(search(&once, "pro"), once);

        let once = filter_by_category(&catalog, "Laptops");
        assert_eq!(filter_by_category(&once, "Laptops"), once);
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = builtin_products();

        let low = sort(&catalog, SortMode::PriceLow);
        assert!(low.windows(2).all(|w| w[0].price <= w[1].price));

        let high = sort(&catalog, SortMode::PriceHigh);
        assert!(high.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let catalog = builtin_products();
        let before = catalog.clone();
        let _ = sort(&catalog, SortMode::PriceHigh);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_newest_orders_numeric_ids_descending() {
        let catalog = builtin_products();
        let newest = sort(&catalog, SortMode::Newest);
        assert_eq!(ids(&newest), vec!["9", "8", "7", "6", "5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_newest_mixed_ids() {
        let items = vec![
            product(ProductId::Text("abc".to_string()), 1),
            product(ProductId::Numeric(2), 1),
            product(ProductId::Text("10".to_string()), 1),
            product(ProductId::Text("xyz".to_string()), 1),
        ];

        let newest = sort(&items, SortMode::Newest);
        assert_eq!(ids(&newest), vec!["10", "2", "xyz", "abc"]);
    }

    #[test]
    fn test_newest_prefers_timestamps() {
        let mut older = product(ProductId::Numeric(50), 1);
        older.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut newer = product(ProductId::Numeric(3), 1);
        newer.created_at = Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());

        let newest = sort(&[older, newer], SortMode::Newest);
        assert_eq!(ids(&newest), vec!["3", "50"]);
    }

    fn stamped(id: ProductId, year: i32) -> Product {
        let mut item = product(id, 1);
        item.created_at = Some(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap());
        item
    }

    #[test]
    fn test_newest_partial_timestamps_is_order_independent() {
        let a = stamped(ProductId::Numeric(1), 2025);
        let b = product(ProductId::Numeric(5), 1);
        let c = stamped(ProductId::Numeric(10), 2024);

        let forward = sort(&[a.clone(), b.clone(), c.clone()], SortMode::Newest);
        let backward = sort(&[c, b, a], SortMode::Newest);

        assert_eq!(ids(&forward), vec!["1", "10", "5"]);
        assert_eq!(ids(&backward), ids(&forward));
    }

    #[test]
    fn test_newest_large_mixed_catalog() {
        let items: Vec<Product> = (0..400u64)
            .map(|i| {
                let id = if i % 5 == 0 {
                    ProductId::Text(format!("sku-{}", (i * 31) % 97))
                } else {
                    ProductId::Numeric((i * 7919) % 1000)
                };
                let mut item = product(id, i);
                if i % 3 != 0 {
                    let secs = 1_700_000_000 + ((i * 37) % 500) as i64 * 3600;
                    item.created_at = DateTime::from_timestamp(secs, 0);
                }
                item
            })
            .collect();

        let sorted = sort(&items, SortMode::Newest);

        assert_eq!(sorted.len(), items.len());
        assert!(sorted.windows(2).all(|w| newest_first(&w[0], &w[1]) != Ordering::Greater));

        let first_unstamped = sorted.iter().position(|p| p.created_at.is_none()).unwrap();
        assert!(sorted[..first_unstamped].iter().all(|p| p.created_at.is_some()));
        assert!(sorted[first_unstamped..].iter().all(|p| p.created_at.is_none()));
        assert!(
            sorted[..first_unstamped]
                .windows(2)
                .all(|w| w[0].created_at >= w[1].created_at)
        );

        let unstamped = &sorted[first_unstamped..];
        let first_text = unstamped.iter().position(|p| p.id.as_number().is_none()).unwrap();
        assert!(
            unstamped[..first_text]
                .windows(2)
                .all(|w| w[0].id.as_number() >= w[1].id.as_number())
        );
        assert!(unstamped[first_text..].iter().all(|p| p.id.as_number().is_none()));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = builtin_products();
        assert_eq!(
            categories(&catalog),
            vec!["Laptops", "Desktops", "Tablets", "Displays", "Accessories"]
        );
    }

    #[test]
    fn test_run_query_composes_filters() {
        let catalog = builtin_products();
        let params = ProductQuery {
            q: Some("laptop".to_string()),
            max_price: Some(100_000),
            sort: Some("price-high".to_string()),
            ..Default::default()
        };

        let result = run_query(&catalog, &params);
        assert_eq!(ids(&result), vec!["6", "4"]);
    }

    #[test]
    fn test_run_query_without_params_sorts_newest() {
        let catalog = builtin_products();
        let result = run_query(&catalog, &ProductQuery::default());
        assert_eq!(result.len(), catalog.len());
        assert_eq!(result[0].id, ProductId::Numeric(9));
    }
}

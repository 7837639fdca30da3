use std::collections::HashSet;

use crate::domain::Product;

/// Filter label that stands for the whole catalog.
pub const ALL_PRODUCTS: &str = "全部商品";

/// `ALL_PRODUCTS` followed by each non-blank category in first-seen order.
pub fn build_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_PRODUCTS.to_string()];

    for product in products {
        let category = product.category.as_str();
        if category.trim().is_empty() {
            continue;
        }
        if seen.insert(category) {
            categories.push(category.to_string());
        }
    }

    categories
}

/// Products shown under `label`. Matching is exact and case-sensitive.
pub fn filter_products<'a>(products: &'a [Product], label: &str) -> Vec<&'a Product> {
    if label == ALL_PRODUCTS {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|product| product.category == label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(categories: &[&str]) -> Vec<Product> {
        categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                serde_json::from_value(serde_json::json!({
                    "product_id": format!("P{index}"),
                    "Category": category,
                }))
            })
            .collect::<Result<_, _>>()
            .unwrap_or_default()
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.product_id.clone()).collect()
    }

    #[test]
    fn test_categories_first_occurrence_without_blanks() {
        let catalog = products(&["魚類", "", "貝類", "魚類", "  ", "Fish", "fish", "貝類"]);

        assert_eq!(
            build_categories(&catalog),
            ["全部商品", "魚類", "貝類", "Fish", "fish"]
        );
    }

    #[test]
    fn test_empty_catalog_still_offers_all_products() {
        assert_eq!(build_categories(&[]), [ALL_PRODUCTS]);
    }

    #[test]
    fn test_filter_is_exact() {
        let catalog = products(&["魚類", "貝類", "魚類加工", "魚類"]);

        assert_eq!(ids(&filter_products(&catalog, "魚類")), ["P0", "P3"]);
        assert!(filter_products(&catalog, "魚").is_empty());
        assert!(filter_products(&catalog, "unknown").is_empty());
    }

    #[test]
    fn test_all_products_restores_full_order() {
        let catalog = products(&["魚類", "貝類", "蝦類"]);

        let narrowed = filter_products(&catalog, "貝類");
        assert_eq!(ids(&narrowed), ["P1"]);

        let restored = filter_products(&catalog, ALL_PRODUCTS);
        assert_eq!(ids(&restored), ["P0", "P1", "P2"]);
    }
}

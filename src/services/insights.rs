use std::collections::HashMap;

use crate::models::{AggregateRow, Product};

/// Running totals for one product type
struct CategoryTotals<'a> {
    product_type: &'a str,
    price_sum: f64,
    rating_sum: f64,
    count: usize,
}

/// Computes average price and rating per product type
///
/// Rows come out in the order each type first appears in the catalog, so chart
/// axes stay stable across calls. An empty catalog yields no rows.
pub fn aggregate(catalog: &[Product]) -> Vec<AggregateRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotals> = Vec::new();

    for product in catalog {
        let slot = *index.entry(product.product_type.as_str()).or_insert_with(|| {
            totals.push(CategoryTotals {
                product_type: &product.product_type,
                price_sum: 0.0,
                rating_sum: 0.0,
                count: 0,
            });
            totals.len() - 1
        });

        let entry = &mut totals[slot];
        entry.price_sum += product.price;
        entry.rating_sum += product.rating;
        entry.count += 1;
    }

    totals
        .into_iter()
        .map(|t| {
            // every group holds at least one product
            let count = t.count as f64;
            AggregateRow {
                product_type: t.product_type.to_string(),
                avg_price: t.price_sum / count,
                avg_rating: t.rating_sum / count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(name: &str, product_type: &str, price: f64, rating: f64) -> Product {
        Product {
            name: name.to_string(),
            brand: "Brand".to_string(),
            product_type: product_type.to_string(),
            skin_type: "All".to_string(),
            concern: "Hydration".to_string(),
            price,
            rating,
            description: "Description".to_string(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_catalog() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_averages_per_type() {
        let catalog = vec![
            product("a1", "A", 10.0, 4.0),
            product("a2", "A", 20.0, 5.0),
            product("b1", "B", 30.0, 3.0),
        ];

        let rows = aggregate(&catalog);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].product_type, "A");
        assert_close(rows[0].avg_price, 15.0);
        assert_close(rows[0].avg_rating, 4.5);

        assert_eq!(rows[1].product_type, "B");
        assert_close(rows[1].avg_price, 30.0);
        assert_close(rows[1].avg_rating, 3.0);
    }

    #[test]
    fn test_first_seen_order() {
        let catalog = vec![
            product("t1", "Toner", 10.0, 4.0),
            product("s1", "Serum", 20.0, 4.0),
            product("t2", "Toner", 30.0, 4.0),
            product("m1", "Mask", 40.0, 4.0),
        ];

        let types: Vec<String> = aggregate(&catalog)
            .into_iter()
            .map(|r| r.product_type)
            .collect();
        assert_eq!(types, vec!["Toner", "Serum", "Mask"]);
    }

    #[test]
    fn test_builtin_catalog_has_one_row_per_type() {
        let catalog = Catalog::builtin().unwrap();
        let rows = aggregate(catalog.products());

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].product_type, "Serum");
        assert_close(rows[0].avg_price, 35.0);
        assert_eq!(aggregate(catalog.products()), rows);
    }
}

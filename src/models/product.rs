use serde::{Deserialize, Serialize};

/// Skin-type value that matches every requested skin type
pub const ALL_SKIN_TYPES: &str = "All";

/// A skincare product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product name, unique within a catalog
    pub name: String,
    pub brand: String,
    /// Category such as "Serum" or "Toner"
    #[serde(rename = "type")]
    pub product_type: String,
    /// Specific skin-type label, or "All"
    pub skin_type: String,
    /// Primary concern the product addresses
    pub concern: String,
    /// Price in USD
    pub price: f64,
    /// Average rating, 0.0 to 5.0
    pub rating: f64,
    pub description: String,
}

impl Product {
    /// Exact-or-sentinel skin-type match. Never a substring match.
    pub fn suits_skin_type(&self, skin_type: &str) -> bool {
        self.skin_type == skin_type || self.skin_type == ALL_SKIN_TYPES
    }

    /// Whether the price lies within `[min, max]`
    pub fn within_budget(&self, min: f64, max: f64) -> bool {
        min <= self.price && self.price <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(skin_type: &str, price: f64) -> Product {
        Product {
            name: "Soothing Toner".to_string(),
            brand: "Klairs".to_string(),
            product_type: "Toner".to_string(),
            skin_type: skin_type.to_string(),
            concern: "Redness".to_string(),
            price,
            rating: 4.9,
            description: "Alcohol-free calming toner".to_string(),
        }
    }

    #[test]
    fn test_suits_exact_skin_type() {
        assert!(product("Sensitive", 22.0).suits_skin_type("Sensitive"));
        assert!(!product("Sensitive", 22.0).suits_skin_type("Dry"));
    }

    #[test]
    fn test_suits_skin_type_rejects_prefix() {
        assert!(!product("Sensitive", 22.0).suits_skin_type("Sen"));
        assert!(!product("Sensitive", 22.0).suits_skin_type("sensitive"));
    }

    #[test]
    fn test_all_sentinel_suits_everything() {
        let p = product(ALL_SKIN_TYPES, 22.0);
        for skin_type in ["Dry", "Oily", "Combination", "Sensitive", "Normal"] {
            assert!(p.suits_skin_type(skin_type));
        }
    }

    #[test]
    fn test_within_budget_is_inclusive() {
        let p = product("Dry", 22.0);
        assert!(p.within_budget(22.0, 30.0));
        assert!(p.within_budget(10.0, 22.0));
        assert!(!p.within_budget(23.0, 30.0));
        assert!(!p.within_budget(10.0, 21.0));
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let json = serde_json::to_value(product("Dry", 22.0)).unwrap();
        assert_eq!(json["type"], "Toner");
        assert!(json.get("product_type").is_none());
    }
}

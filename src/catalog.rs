use std::collections::HashSet;

use crate::{
    error::{EngineError, EngineResult},
    models::Product,
};

/// Immutable, ordered product catalog
///
/// Built once at startup and shared read-only between requests. There is no
/// way to add, change or remove products after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates products and freezes them in the given order
    ///
    /// Fails with `InvalidInput` on an empty text field, a negative or
    /// non-finite price, a rating outside `[0, 5]`, or a duplicate name.
    pub fn new(products: Vec<Product>) -> EngineResult<Self> {
        let mut names = HashSet::new();

        for product in &products {
            validate_product(product)?;
            if !names.insert(product.name.as_str()) {
                return Err(EngineError::InvalidInput(format!(
                    "duplicate product name '{}'",
                    product.name
                )));
            }
        }

        Ok(Self { products })
    }

    /// The seed catalog shipped with the service
    pub fn builtin() -> EngineResult<Self> {
        Self::new(seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks a product up by its unique name
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }
}

fn validate_product(product: &Product) -> EngineResult<()> {
    let text_fields = [
        ("name", &product.name),
        ("brand", &product.brand),
        ("type", &product.product_type),
        ("skin_type", &product.skin_type),
        ("concern", &product.concern),
        ("description", &product.description),
    ];

    if let Some((field, _)) = text_fields.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(EngineError::InvalidInput(format!(
            "product '{}' has an empty {}",
            product.name, field
        )));
    }

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "product '{}' has invalid price {}",
            product.name, product.price
        )));
    }

    if !(0.0..=5.0).contains(&product.rating) {
        return Err(EngineError::InvalidInput(format!(
            "product '{}' has rating {} outside 0-5",
            product.name, product.rating
        )));
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn seed(
    name: &str,
    brand: &str,
    product_type: &str,
    skin_type: &str,
    concern: &str,
    price: f64,
    rating: f64,
    description: &str,
) -> Product {
    Product {
        name: name.to_string(),
        brand: brand.to_string(),
        product_type: product_type.to_string(),
        skin_type: skin_type.to_string(),
        concern: concern.to_string(),
        price,
        rating,
        description: description.to_string(),
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        seed("Glow Revival Serum", "Glow Recipe", "Serum", "Dry", "Hydration", 35.0, 4.8,
            "Hyaluronic acid serum for intense hydration"),
        seed("Acne Control Solution", "La Roche-Posay", "Treatment", "Oily", "Acne", 28.0, 4.6,
            "Oil-free gel with salicylic acid"),
        seed("Age Renewal Cream", "CeraVe", "Moisturizer", "All", "Aging", 24.0, 4.7,
            "Retinol-infused night cream"),
        seed("Soothing Toner", "Klairs", "Toner", "Sensitive", "Redness", 22.0, 4.9,
            "Alcohol-free calming toner"),
        seed("Radiance Essence", "COSRX", "Essence", "Combination", "Dullness", 27.0, 4.5,
            "Brightening essence with vitamin C"),
        seed("Sun Shield SPF 50+", "Neutrogena", "Sunscreen", "All", "UV Protection", 18.0, 4.8,
            "Lightweight non-greasy sunscreen"),
        seed("Clarifying Cleanser", "CeraVe", "Cleanser", "Oily", "Acne", 16.0, 4.7,
            "Foaming cleanser with niacinamide"),
        seed("Overnight Mask", "Laneige", "Mask", "Dry", "Hydration", 30.0, 4.9,
            "Sleeping mask for intense moisture"),
    ]
}

use serde::{Deserialize, Serialize};

pub mod criteria;
pub mod product;

pub use criteria::{BudgetRange, Concern, Criteria, SkinType};
pub use product::{Product, ALL_SKIN_TYPES};

/// Per-category summary statistics used for charting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateRow {
    #[serde(rename = "type")]
    pub product_type: String,
    pub avg_price: f64,
    pub avg_rating: f64,
}

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Request body for the recommendations endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub skin_type: String,
    #[serde(default)]
    pub concerns: Vec<String>,
    /// Falls back to the configured default range when absent
    #[serde(default)]
    pub budget: Option<BudgetRange>,
}

/// Ranked recommendations for one skin type
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub skin_type: String,
    pub budget: BudgetRange,
    pub count: usize,
    pub products: Vec<Product>,
}

/// Closed option sets offered to the client
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub skin_types: Vec<&'static str>,
    pub concerns: Vec<&'static str>,
    pub routine_steps: Vec<&'static str>,
    pub default_budget: BudgetRange,
}

/// Request body for the routine endpoint
#[derive(Debug, Deserialize)]
pub struct RoutineRequest {
    /// Uses the default routine when absent
    #[serde(default)]
    pub steps: Option<Vec<String>>,
}

/// Routine split into morning and evening checklists
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Routine {
    pub morning: Vec<String>,
    pub evening: Vec<String>,
}

/// Description of one skin type
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkinTypeGuide {
    pub skin_type: SkinType,
    pub description: &'static str,
}

/// Skin-type guide section
#[derive(Debug, Serialize)]
pub struct SkinTypeGuideResponse {
    pub skin_types: Vec<SkinTypeGuide>,
    pub tip: &'static str,
}

/// Ingredient guidance for a concern
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConcernGuide {
    pub concern: Concern,
    pub heading: &'static str,
    pub tips: Vec<&'static str>,
}

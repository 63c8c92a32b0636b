use std::collections::BTreeSet;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Skin types a user can select
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Sensitive,
    Normal,
}

impl SkinType {
    /// Selection order used by the client
    pub const ALL: [SkinType; 5] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
        SkinType::Normal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
            SkinType::Normal => "Normal",
        }
    }

    /// Parses an exact, case-sensitive label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Skin concerns a user can select
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Concern {
    Acne,
    Aging,
    Hydration,
    Redness,
    Dullness,
    #[serde(rename = "Dark Spots")]
    DarkSpots,
    #[serde(rename = "UV Protection")]
    UvProtection,
}

impl Concern {
    pub const ALL: [Concern; 7] = [
        Concern::Acne,
        Concern::Aging,
        Concern::Hydration,
        Concern::Redness,
        Concern::Dullness,
        Concern::DarkSpots,
        Concern::UvProtection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Concern::Acne => "Acne",
            Concern::Aging => "Aging",
            Concern::Hydration => "Hydration",
            Concern::Redness => "Redness",
            Concern::Dullness => "Dullness",
            Concern::DarkSpots => "Dark Spots",
            Concern::UvProtection => "UV Protection",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl Display for Concern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive price range in USD
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range covering every non-negative price
    pub fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }

    /// False for inverted ranges and NaN bounds
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Filter request for the recommendation engine
///
/// Skin type and concerns are plain labels here; the engine only requires the
/// skin type to be non-empty. Closed-set validation belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub skin_type: String,
    /// Empty set disables concern filtering
    pub concerns: BTreeSet<String>,
    pub budget: BudgetRange,
}

impl Criteria {
    pub fn new(skin_type: impl Into<String>, budget: BudgetRange) -> Self {
        Self {
            skin_type: skin_type.into(),
            concerns: BTreeSet::new(),
            budget,
        }
    }

    /// Adds concerns to the filter
    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concerns.extend(concerns.into_iter().map(Into::into));
        self
    }
}

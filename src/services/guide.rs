use crate::models::{Concern, ConcernGuide, SkinType, SkinTypeGuide};

pub const SKIN_TYPE_TIP: &str = "Your skin type can change with seasons!";

/// Short description of how a skin type presents
pub fn describe_skin_type(skin_type: SkinType) -> &'static str {
    match skin_type {
        SkinType::Combination => "Oily T-zone, dry cheeks",
        SkinType::Dry => "Flaky patches, tight feeling",
        SkinType::Oily => "Shiny appearance, enlarged pores",
        SkinType::Sensitive => "Redness, easy irritation",
        SkinType::Normal => "Balanced, few concerns",
    }
}

/// Descriptions for every skin type, in selection order
pub fn skin_type_guide() -> Vec<SkinTypeGuide> {
    SkinType::ALL
        .into_iter()
        .map(|skin_type| SkinTypeGuide {
            skin_type,
            description: describe_skin_type(skin_type),
        })
        .collect()
}

/// Ingredient guidance for a concern
///
/// Concerns without dedicated guidance share the brightening entry.
pub fn concern_guide(concern: Concern) -> ConcernGuide {
    let (heading, tips) = match concern {
        Concern::Acne => (
            "Acne Solutions",
            [
                "Salicylic acid: Unclogs pores",
                "Benzoyl peroxide: Kills acne bacteria",
                "Retinoids: Prevent clogged pores",
                "Non-comedogenic products won't clog pores",
            ],
        ),
        Concern::Aging => (
            "Anti-Aging Solutions",
            [
                "Retinol: Boosts collagen production",
                "Vitamin C: Fights free radicals",
                "Peptides: Support skin structure",
                "SPF: Prevents photoaging",
            ],
        ),
        Concern::Hydration => (
            "Hydration Solutions",
            [
                "Hyaluronic acid: Holds 1000x its weight in water",
                "Glycerin: Humectant that draws moisture",
                "Ceramides: Reinforce skin barrier",
                "Occlusives: Prevent moisture loss",
            ],
        ),
        Concern::Redness => (
            "Redness Solutions",
            [
                "Centella asiatica: Calms inflammation",
                "Niacinamide: Strengthens barrier",
                "Green tea extract: Antioxidant protection",
                "Avoid fragrances and alcohol",
            ],
        ),
        Concern::Dullness | Concern::DarkSpots | Concern::UvProtection => (
            "Brightening Solutions",
            [
                "Vitamin C: Inhibits melanin production",
                "AHAs: Exfoliate dull surface cells",
                "Niacinamide: Reduces hyperpigmentation",
                "Licorice root extract: Brightening properties",
            ],
        ),
    };

    ConcernGuide {
        concern,
        heading,
        tips: tips.to_vec(),
    }
}

use crate::{
    error::{EngineError, EngineResult},
    models::{Criteria, Product},
};

/// Ranks catalog products against the user's criteria
///
/// Keeps products whose skin type equals the requested one or is "All", whose
/// concern is among the requested concerns (any concern when none are given),
/// and whose price lies within the inclusive budget. Survivors are ordered by
/// rating, highest first; equal ratings keep their catalog order.
///
/// An empty result is a valid "no match" outcome, not an error.
pub fn recommend(catalog: &[Product], criteria: &Criteria) -> EngineResult<Vec<Product>> {
    validate(criteria)?;

    let mut matches: Vec<Product> = catalog
        .iter()
        .filter(|p| p.suits_skin_type(&criteria.skin_type))
        .filter(|p| criteria.concerns.is_empty() || criteria.concerns.contains(&p.concern))
        .filter(|p| p.within_budget(criteria.budget.min, criteria.budget.max))
        .cloned()
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    tracing::debug!(
        skin_type = %criteria.skin_type,
        concerns = criteria.concerns.len(),
        catalog_size = catalog.len(),
        matched = matches.len(),
        "Recommendation filter applied"
    );

    Ok(matches)
}

fn validate(criteria: &Criteria) -> EngineResult<()> {
    if criteria.skin_type.is_empty() {
        return Err(EngineError::InvalidCriteria(
            "skin type is required".to_string(),
        ));
    }

    if !criteria.budget.is_ordered() {
        return Err(EngineError::InvalidCriteria(format!(
            "budget minimum {} exceeds maximum {}",
            criteria.budget.min, criteria.budget.max
        )));
    }

    Ok(())
}

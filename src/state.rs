use std::sync::Arc;

use crate::{catalog::Catalog, models::BudgetRange};

/// Shared application state
///
/// The catalog is an immutable snapshot; handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub default_budget: BudgetRange,
}

impl AppState {
    pub fn new(catalog: Catalog, default_budget: BudgetRange) -> Self {
        Self {
            catalog: Arc::new(catalog),
            default_budget,
        }
    }
}

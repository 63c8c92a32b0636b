use axum::{extract::State, Json};

use crate::{
    models::{Concern, OptionsResponse, Product, SkinType},
    services::routine::ROUTINE_STEPS,
    state::AppState,
};

/// Handler listing the full catalog in catalog order
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Handler listing the selectable skin types, concerns and routine steps
pub async fn options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        skin_types: SkinType::ALL.iter().map(SkinType::label).collect(),
        concerns: Concern::ALL.iter().map(Concern::label).collect(),
        routine_steps: ROUTINE_STEPS.to_vec(),
        default_budget: state.default_budget,
    })
}

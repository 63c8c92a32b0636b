use axum::{extract::State, Extension, Json};
use tower_http::request_id::RequestId;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id_str,
    models::{Concern, Criteria, RecommendationRequest, RecommendationResponse, SkinType},
    services::recommendations,
    state::AppState,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id_str(&request_id),
        skin_type = %request.skin_type,
        concern_count = request.concerns.len(),
        "Processing recommendation request"
    );

    let criteria = build_criteria(request, &state)?;
    let products = recommendations::recommend(state.catalog.products(), &criteria)?;

    if products.is_empty() {
        tracing::info!(
            request_id = %request_id_str(&request_id),
            "No products match the criteria"
        );
    }

    Ok(Json(RecommendationResponse {
        skin_type: criteria.skin_type,
        budget: criteria.budget,
        count: products.len(),
        products,
    }))
}

/// Checks request labels against the closed option sets
///
/// An empty skin type is passed through so the engine reports it.
fn build_criteria(request: RecommendationRequest, state: &AppState) -> AppResult<Criteria> {
    if !request.skin_type.is_empty() && SkinType::from_label(&request.skin_type).is_none() {
        return Err(AppError::InvalidInput(format!(
            "Unknown skin type '{}'",
            request.skin_type
        )));
    }

    if let Some(unknown) = request
        .concerns
        .iter()
        .find(|c| Concern::from_label(c).is_none())
    {
        return Err(AppError::InvalidInput(format!("Unknown concern '{}'", unknown)));
    }

    let budget = request.budget.unwrap_or(state.default_budget);

    Ok(Criteria::new(request.skin_type, budget).with_concerns(request.concerns))
}

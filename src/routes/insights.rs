use axum::{extract::State, Json};

use crate::{models::AggregateRow, services::insights, state::AppState};

/// Handler for per-category price and rating averages
pub async fn categories(State(state): State<AppState>) -> Json<Vec<AggregateRow>> {
    let rows = insights::aggregate(state.catalog.products());
    tracing::debug!(categories = rows.len(), "Category insights computed");
    Json(rows)
}

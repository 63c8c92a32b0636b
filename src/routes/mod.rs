use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{middleware, state::AppState};

pub mod guide;
pub mod insights;
pub mod products;
pub mod recommendations;
pub mod routines;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(middleware::make_span_with_request_id))
                .layer(middleware::propagate_request_id_layer())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .route("/options", get(products::options))
        .route("/recommendations", post(recommendations::recommend))
        .route("/insights/categories", get(insights::categories))
        .route("/guide/skin-types", get(guide::skin_types))
        .route("/guide/concerns/:concern", get(guide::concern))
        .route("/routines", post(routines::plan))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

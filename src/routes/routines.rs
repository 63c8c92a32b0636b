use axum::{Extension, Json};
use tower_http::request_id::RequestId;

use crate::{
    error::AppResult,
    middleware::request_id_str,
    models::{Routine, RoutineRequest},
    services::routine::{self, DEFAULT_ROUTINE},
};

/// Handler splitting selected steps into morning and evening routines
pub async fn plan(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RoutineRequest>,
) -> AppResult<Json<Routine>> {
    let routine = match request.steps {
        Some(steps) => routine::plan_routine(&steps)?,
        None => routine::plan_routine(&DEFAULT_ROUTINE)?,
    };

    tracing::info!(
        request_id = %request_id_str(&request_id),
        morning = routine.morning.len(),
        evening = routine.evening.len(),
        "Routine created"
    );

    Ok(Json(routine))
}

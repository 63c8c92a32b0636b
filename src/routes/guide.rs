use axum::{extract::Path, Json};

use crate::{
    error::{AppError, AppResult},
    models::{Concern, ConcernGuide, SkinTypeGuideResponse},
    services::guide,
};

/// Handler describing every skin type
pub async fn skin_types() -> Json<SkinTypeGuideResponse> {
    Json(SkinTypeGuideResponse {
        skin_types: guide::skin_type_guide(),
        tip: guide::SKIN_TYPE_TIP,
    })
}

/// Handler for ingredient guidance on one concern, addressed by its label
pub async fn concern(Path(label): Path<String>) -> AppResult<Json<ConcernGuide>> {
    let concern = Concern::from_label(&label)
        .ok_or_else(|| AppError::NotFound(format!("Unknown concern '{}'", label)))?;
    Ok(Json(guide::concern_guide(concern)))
}

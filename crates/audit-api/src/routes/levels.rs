use axum::extract::Path;
use axum::Json;

use audit_core::models::level::ComplianceLevel;
use audit_scoring::classify;

use crate::error::ApiError;

pub async fn get_level(Path(score): Path<String>) -> Result<Json<ComplianceLevel>, ApiError> {
    let score: f64 = score
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite())
        .ok_or_else(|| ApiError::BadRequest(format!("score is not a number: {score}")))?;

    Ok(Json(classify(score)))
}

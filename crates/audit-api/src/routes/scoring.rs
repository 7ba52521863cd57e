use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use audit_core::models::compliance::ComplianceResult;
use audit_core::models::form::AuditFormValues;
use audit_core::models::level::ComplianceLevel;
use audit_core::models::record::{AuditRecord, AuditSubmission};
use audit_scoring::{classify, score_compliance, score_submission};

use crate::error::ApiError;

/// A compliance result with its band, for live previews.
#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    result: ComplianceResult,
    level: ComplianceLevel,
}

/// Score a form without recording it. Unknown audit types yield the empty
/// result rather than an error, matching the engine's contract.
pub async fn score_form(
    Path(audit_type): Path<String>,
    Json(values): Json<AuditFormValues>,
) -> Json<ScoreResponse> {
    let result = score_compliance(&audit_type, &values);
    let level = classify(result.score);
    Json(ScoreResponse { result, level })
}

/// Score a submission and return the record the caller should persist.
pub async fn create_audit_record(
    Json(submission): Json<AuditSubmission>,
) -> Result<Json<AuditRecord>, ApiError> {
    let record = score_submission(submission)?;

    tracing::info!(
        record.id = %record.id,
        record.audit_type = %record.audit_type,
        record.score = record.score,
        record.completed = record.completed_fields,
        record.total = record.total_fields,
        "audit record scored"
    );

    Ok(Json(record))
}

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use audit_scoring::checklist::Checklist;
use audit_scoring::{all_scorers, get_scorer};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct AuditTypeSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct AuditTypeDetail {
    id: String,
    name: String,
    checklists: Vec<Checklist>,
}

pub async fn list_audit_types() -> Json<Vec<AuditTypeSummary>> {
    let audit_types: Vec<AuditTypeSummary> = all_scorers()
        .iter()
        .map(|s| AuditTypeSummary {
            id: s.id().to_string(),
            name: s.name().to_string(),
        })
        .collect();
    Json(audit_types)
}

pub async fn get_audit_type_detail(
    Path(id): Path<String>,
) -> Result<Json<AuditTypeDetail>, ApiError> {
    let scorer =
        get_scorer(&id).ok_or_else(|| ApiError::NotFound(format!("audit type not found: {id}")))?;

    Ok(Json(AuditTypeDetail {
        id: scorer.id().to_string(),
        name: scorer.name().to_string(),
        checklists: scorer.checklists().to_vec(),
    }))
}

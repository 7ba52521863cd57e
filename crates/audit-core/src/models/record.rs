use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::audit_type::AuditType;
use super::compliance::ComplianceResult;
use super::form::AuditFormValues;
use super::level::ComplianceLevel;
use crate::error::CoreError;

/// A form submission as it arrives from the client, before the audit type
/// has been checked.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuditSubmission {
    pub audit_type: String,
    #[serde(default)]
    pub values: AuditFormValues,
}

impl AuditSubmission {
    pub fn new(audit_type: impl Into<String>, values: AuditFormValues) -> Self {
        Self {
            audit_type: audit_type.into(),
            values,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A scored submission, ready to be stored alongside the raw answers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuditRecord {
    pub id: Uuid,
    pub audit_type: AuditType,
    pub values: AuditFormValues,
    pub score: f64,
    pub total_fields: u32,
    pub completed_fields: u32,
    pub level: ComplianceLevel,
    pub submitted_at: jiff::Timestamp,
}

impl AuditRecord {
    pub fn new(
        audit_type: AuditType,
        values: AuditFormValues,
        result: &ComplianceResult,
        level: ComplianceLevel,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            audit_type,
            values,
            score: result.score,
            total_fields: result.total_fields,
            completed_fields: result.completed_fields,
            level,
            submitted_at: jiff::Timestamp::now(),
        }
    }
}

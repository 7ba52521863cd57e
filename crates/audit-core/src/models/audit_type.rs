use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The kinds of infection-control audit a clinician can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AuditType {
    HandHygiene,
    HandWash,
    Clabsi,
    Niv,
    Vap,
    Disinfection,
}

impl AuditType {
    pub const ALL: [AuditType; 6] = [
        AuditType::HandHygiene,
        AuditType::HandWash,
        AuditType::Clabsi,
        AuditType::Niv,
        AuditType::Vap,
        AuditType::Disinfection,
    ];

    /// The wire tag, e.g. `"hand_hygiene"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditType::HandHygiene => "hand_hygiene",
            AuditType::HandWash => "hand_wash",
            AuditType::Clabsi => "clabsi",
            AuditType::Niv => "niv",
            AuditType::Vap => "vap",
            AuditType::Disinfection => "disinfection",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AuditType::HandHygiene => "Hand Hygiene",
            AuditType::HandWash => "Hand Wash (SUMANK)",
            AuditType::Clabsi => "CLABSI Bundle",
            AuditType::Niv => "Non-Invasive Ventilation",
            AuditType::Vap => "VAP Bundle",
            AuditType::Disinfection => "Disinfection Tasks",
        }
    }
}

impl fmt::Display for AuditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match on the wire tag; no trimming or case-folding.
impl FromStr for AuditType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAuditType(s.to_string()))
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative compliance band, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ComplianceBand {
    Excellent,
    High,
    Acceptable,
    Low,
    Critical,
}

/// Dashboard color for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LevelColor {
    Green,
    Yellow,
    Orange,
    Red,
}

/// A score's band, color and a one-line description for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplianceLevel {
    pub level: ComplianceBand,
    pub color: LevelColor,
    pub description: String,
}

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use ts_rs::TS;

use super::bundle::{ClabsiBundle, DisinfectionTask, Frequency, RespiratorySupport, VapBundle};
use super::form::FormValue;

/// The reduced outcome of scoring one audit submission.
///
/// `score` is in `[0, 100]` with two decimals and `completed_fields` never
/// exceeds `total_fields`. A `total_fields` of zero means nothing matched a
/// scoring rule, as opposed to a low score from a matched rule.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComplianceResult {
    pub score: f64,
    pub total_fields: u32,
    pub completed_fields: u32,
    pub details: ComplianceDetail,
}

impl ComplianceResult {
    /// The sentinel returned when no scoring rule applies.
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            total_fields: 0,
            completed_fields: 0,
            details: ComplianceDetail::Empty(EmptyDetail {}),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_fields == 0
    }
}

/// Audit-type-specific breakdown behind a score.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ComplianceDetail {
    HandHygiene(HandHygieneDetail),
    HandWash(HandWashDetail),
    Clabsi(ClabsiDetail),
    Niv(NivDetail),
    Vap(VapDetail),
    Disinfection(DisinfectionDetail),
    Empty(EmptyDetail),
}

/// Serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct EmptyDetail {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum HandHygieneStatus {
    #[serde(rename = "No Hand Hygiene")]
    NoHandHygiene,
    Adequate,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HandHygieneDetail {
    /// `None` when duration or steps were not recorded; serialized as `""`.
    #[serde(serialize_with = "status_or_empty")]
    #[ts(type = "string")]
    pub status: Option<HandHygieneStatus>,
    /// Empty when no WHO moment could be determined.
    pub selected_moment: String,
    pub time_duration: Option<String>,
    pub steps_adherence: Option<String>,
    pub moments: BTreeMap<String, bool>,
    pub gloves_required: Option<FormValue>,
    pub gloves_used: Option<FormValue>,
}

fn status_or_empty<S: Serializer>(
    status: &Option<HandHygieneStatus>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match status {
        Some(status) => status.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum HandWashStatus {
    Adequate,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HandWashDetail {
    pub status: HandWashStatus,
    pub steps: BTreeMap<String, bool>,
    pub sumank_compliance: SumankCompliance,
    pub critical_steps_completed: u32,
    pub total_critical_steps: u32,
}

/// Completion of the six SUMANK sub-steps, keyed by mnemonic letter.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SumankCompliance {
    pub score: f64,
    pub completed: u32,
    pub total: u32,
    pub steps: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClabsiDetail {
    pub bundle_type: ClabsiBundle,
    pub fields: BTreeMap<String, bool>,
    /// Weighted contribution of critical fields, out of 70.
    pub critical_score: f64,
    /// Weighted contribution of the remaining fields, out of 30.
    pub regular_score: f64,
    pub critical_completed: u32,
    pub critical_total: u32,
    pub regular_completed: u32,
    pub regular_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NivDetail {
    pub respiratory_support: Option<RespiratorySupport>,
    pub fields: BTreeMap<String, bool>,
    /// Out of 60.
    pub common_score: f64,
    /// Out of 30.
    pub specific_score: f64,
    pub nasal_trauma: Option<String>,
    /// 0, 50, 75 or 100 before weighting.
    pub nasal_trauma_score: f64,
    pub common_completed: u32,
    pub common_total: u32,
    pub specific_completed: u32,
    pub specific_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VapDetail {
    pub bundle_type: VapBundle,
    pub fields: BTreeMap<String, bool>,
    pub completed_steps: u32,
    pub total_steps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisinfectionDetail {
    pub task_type: DisinfectionTask,
    pub frequency: Frequency,
    pub multiplier: f64,
    /// Score before the frequency multiplier and clamp.
    pub raw_score: f64,
    pub fields: BTreeMap<String, bool>,
}

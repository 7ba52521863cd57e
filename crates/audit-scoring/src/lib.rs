//! audit-scoring
//!
//! Compliance scoring engine. Pure functions, no I/O: each audit type has a
//! scorer that reduces a raw form submission to a 0–100 score with a
//! breakdown, and [`classify`] maps a score to a compliance band.

pub mod checklist;
pub mod error;
pub mod level;
pub mod scorers;

use audit_core::models::audit_type::AuditType;
use audit_core::models::compliance::ComplianceResult;
use audit_core::models::form::AuditFormValues;
use audit_core::models::record::{AuditRecord, AuditSubmission};
use checklist::Checklist;
use error::ScoringError;

pub use level::classify;
pub use scorers::clabsi::score_clabsi;
pub use scorers::disinfection::score_disinfection;
pub use scorers::hand_hygiene::score_hand_hygiene;
pub use scorers::hand_wash::score_hand_wash;
pub use scorers::niv::score_niv;
pub use scorers::vap::score_vap;

/// Trait implemented by the scorer of each audit type.
pub trait Scorer: Send + Sync {
    fn audit_type(&self) -> AuditType;

    /// Wire tag for this audit type (e.g., "hand_hygiene", "clabsi").
    fn id(&self) -> &str {
        self.audit_type().as_str()
    }

    /// Human-readable name (e.g., "CLABSI Bundle").
    fn name(&self) -> &str {
        self.audit_type().display_name()
    }

    /// The checklists this audit type is scored against.
    fn checklists(&self) -> &[Checklist];

    /// Reduce a submission to a score. Never fails; missing answers count
    /// as not completed.
    fn score(&self, values: &AuditFormValues) -> ComplianceResult;
}

/// Return all registered scorers.
pub fn all_scorers() -> Vec<Box<dyn Scorer>> {
    vec![
        Box::new(scorers::hand_hygiene::HandHygiene),
        Box::new(scorers::hand_wash::HandWash),
        Box::new(scorers::clabsi::Clabsi),
        Box::new(scorers::niv::Niv),
        Box::new(scorers::vap::Vap),
        Box::new(scorers::disinfection::Disinfection),
    ]
}

/// Look up a scorer by audit-type tag.
pub fn get_scorer(id: &str) -> Option<Box<dyn Scorer>> {
    all_scorers().into_iter().find(|s| s.id() == id)
}

/// Score a submission for the given audit-type tag.
///
/// Total over all inputs: an unknown tag yields [`ComplianceResult::empty`].
pub fn score_compliance(audit_type: &str, values: &AuditFormValues) -> ComplianceResult {
    let Some(scorer) = get_scorer(audit_type) else {
        tracing::warn!(audit_type, "unknown audit type, nothing to score");
        return ComplianceResult::empty();
    };

    let result = scorer.score(values);
    tracing::debug!(
        audit_type,
        score = result.score,
        completed = result.completed_fields,
        total = result.total_fields,
        "scored audit submission"
    );
    result
}

/// Score a submission and wrap it into a record for persistence.
///
/// Unlike [`score_compliance`], an unknown audit type is an error: there is
/// no meaningful record to store for it.
pub fn score_submission(submission: AuditSubmission) -> Result<AuditRecord, ScoringError> {
    let audit_type: AuditType = submission.audit_type.parse()?;

    let result = score_compliance(audit_type.as_str(), &submission.values);
    let level = classify(result.score);
    Ok(AuditRecord::new(
        audit_type,
        submission.values,
        &result,
        level,
    ))
}

use std::collections::BTreeMap;
use std::sync::LazyLock;

use audit_core::models::audit_type::AuditType;
use audit_core::models::compliance::{
    ComplianceDetail, ComplianceResult, HandHygieneDetail, HandHygieneStatus,
};
use audit_core::models::form::AuditFormValues;

use crate::checklist::{round2, Checklist, ChecklistField, CompletionRule};
use crate::Scorer;

/// Hand hygiene observation: one WHO moment per submission, judged on hand
/// rub duration and the number of technique steps followed.
pub struct HandHygiene;

/// `moments` flag keys in WHO order, with the moment name each selects.
const WHO_MOMENTS: [(&str, &str); 5] = [
    ("beforePatientContact", "Moment 1 - Before touching patients"),
    (
        "beforeAsepticProcedure",
        "Moment 2 - Before clean/aseptic procedure",
    ),
    (
        "afterBodyFluidExposure",
        "Moment 3 - After body fluid exposure risk",
    ),
    ("afterPatientContact", "Moment 4 - After touching patients"),
    (
        "afterSurroundingsContact",
        "Moment 5 - After touching patient surroundings",
    ),
];

const NO_DURATION: &str = "0 sec";
const NO_STEPS: &str = "0 Steps";
const ADEQUATE_DURATIONS: [&str; 2] = [">20 sec", "10-20 sec"];
const ADEQUATE_STEPS: [&str; 2] = ["6 Steps", "3 to 5 steps"];

static CHECKLISTS: LazyLock<Vec<Checklist>> = LazyLock::new(|| {
    vec![Checklist {
        id: "opportunity".to_string(),
        name: "Hand Hygiene Opportunity".to_string(),
        fields: vec![
            ChecklistField::new("opportunityType", "WHO Moment", CompletionRule::Answered),
            ChecklistField::new(
                "handRubDuration",
                "Hand Rub Duration",
                CompletionRule::Answered,
            )
            .critical(),
            ChecklistField::new("adherenceSteps", "Steps Followed", CompletionRule::Answered)
                .critical(),
            ChecklistField::new("glovesRequired", "Gloves Required", CompletionRule::Answered),
            ChecklistField::new("glovesUsed", "Gloves Used", CompletionRule::Answered),
        ],
        description: Some(
            ">20 sec or 10-20 sec with 6 or 3-5 steps: adequate; 0 sec or 0 steps: no hand hygiene"
                .to_string(),
        ),
    }]
});

impl Scorer for HandHygiene {
    fn audit_type(&self) -> AuditType {
        AuditType::HandHygiene
    }

    fn checklists(&self) -> &[Checklist] {
        &CHECKLISTS
    }

    fn score(&self, values: &AuditFormValues) -> ComplianceResult {
        score_hand_hygiene(values)
    }
}

pub fn score_hand_hygiene(values: &AuditFormValues) -> ComplianceResult {
    let moments = values.flags("moments").cloned().unwrap_or_default();

    let selected_moment = non_empty(values.first("opportunityType"))
        .map(str::to_string)
        .or_else(|| moment_from_flags(&moments))
        .unwrap_or_default();

    let time_duration =
        non_empty(values.first("handRubDuration")).or_else(|| non_empty(values.text("timeDuration")));
    let steps_adherence = non_empty(values.first("adherenceSteps"))
        .or_else(|| non_empty(values.text("stepsAdherence")));

    let status = match (time_duration, steps_adherence) {
        (Some(duration), Some(steps)) => Some(assess(duration, steps)),
        _ => None,
    };
    let score = status.map_or(0.0, status_score);

    ComplianceResult {
        score: round2(score),
        total_fields: 1,
        completed_fields: u32::from(!selected_moment.is_empty()),
        details: ComplianceDetail::HandHygiene(HandHygieneDetail {
            status,
            selected_moment,
            time_duration: time_duration.map(str::to_string),
            steps_adherence: steps_adherence.map(str::to_string),
            moments,
            gloves_required: values.get("glovesRequired").cloned(),
            gloves_used: values.get("glovesUsed").cloned(),
        }),
    }
}

fn assess(duration: &str, steps: &str) -> HandHygieneStatus {
    if duration == NO_DURATION || steps == NO_STEPS {
        HandHygieneStatus::NoHandHygiene
    } else if ADEQUATE_DURATIONS.contains(&duration) && ADEQUATE_STEPS.contains(&steps) {
        HandHygieneStatus::Adequate
    } else {
        HandHygieneStatus::NeedsImprovement
    }
}

fn status_score(status: HandHygieneStatus) -> f64 {
    match status {
        HandHygieneStatus::NoHandHygiene => 0.0,
        HandHygieneStatus::Adequate => 100.0,
        HandHygieneStatus::NeedsImprovement => 50.0,
    }
}

fn moment_from_flags(moments: &BTreeMap<String, bool>) -> Option<String> {
    WHO_MOMENTS
        .iter()
        .find(|(key, _)| moments.get(*key).copied().unwrap_or(false))
        .map(|(_, name)| name.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

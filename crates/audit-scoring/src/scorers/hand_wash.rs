use std::collections::BTreeMap;
use std::sync::LazyLock;

use audit_core::models::audit_type::AuditType;
use audit_core::models::compliance::{
    ComplianceDetail, ComplianceResult, HandWashDetail, HandWashStatus, SumankCompliance,
};
use audit_core::models::form::AuditFormValues;

use crate::checklist::{round2, Checklist, ChecklistField, CompletionRule, Tally};
use crate::Scorer;

/// Hand washing technique: 13 ordered steps, six of which form the SUMANK
/// mnemonic.
pub struct HandWash;

/// SUMANK letters and the step each one stands for.
const SUMANK: [(&str, &str); 6] = [
    ("S", "rubPalmToPalm"),
    ("U", "rightPalmOverLeft"),
    ("M", "backOfFingers"),
    ("A", "rotationalRubbingThumb"),
    ("N", "rotationalRubbingFingers"),
    ("K", "wrist"),
];

static CHECKLISTS: LazyLock<Vec<Checklist>> = LazyLock::new(|| {
    let steps = [
        ("wetHands", "Wet hands with water"),
        ("appliedSoap", "Apply enough soap to cover all hand surfaces"),
        ("rubPalmToPalm", "Rub hands palm to palm"),
        ("rightPalmOverLeft", "Right palm over left dorsum and vice versa"),
        ("palmToPalmInterlaced", "Palm to palm with fingers interlaced"),
        ("backOfFingers", "Backs of fingers to opposing palms"),
        ("rotationalRubbingThumb", "Rotational rubbing of thumbs"),
        ("rotationalRubbingFingers", "Rotational rubbing of fingertips in palms"),
        ("wrist", "Rub wrists"),
        ("rinseHands", "Rinse hands with water"),
        ("dryHandsTowel", "Dry hands with a single-use towel"),
        ("airDryer", "Air dryer used"),
        ("turnOffFaucet", "Use towel to turn off faucet"),
    ];

    let fields = steps
        .iter()
        .map(|(id, label)| {
            let field = ChecklistField::new(id, label, CompletionRule::Yes);
            if SUMANK.iter().any(|(_, step)| step == id) {
                field.critical()
            } else {
                field
            }
        })
        .collect();

    vec![Checklist {
        id: "steps".to_string(),
        name: "Hand Wash Steps".to_string(),
        fields,
        description: Some(
            "10-12 steps: adequate, 7-9: needs improvement, otherwise poor".to_string(),
        ),
    }]
});

impl Scorer for HandWash {
    fn audit_type(&self) -> AuditType {
        AuditType::HandWash
    }

    fn checklists(&self) -> &[Checklist] {
        &CHECKLISTS
    }

    fn score(&self, values: &AuditFormValues) -> ComplianceResult {
        score_hand_wash(values)
    }
}

pub fn score_hand_wash(values: &AuditFormValues) -> ComplianceResult {
    let checklist = &CHECKLISTS[0];
    let tally = Tally::of(&checklist.fields, values);

    // 13 of 13 falls through to Poor; kept as-is for parity with stored scores.
    let (status, score) = match tally.completed {
        10..=12 => (HandWashStatus::Adequate, 85.0),
        7..=9 => (HandWashStatus::NeedsImprovement, 65.0),
        _ => (HandWashStatus::Poor, 30.0),
    };

    let sumank = sumank_compliance(values);

    ComplianceResult {
        score: round2(score),
        total_fields: tally.total,
        completed_fields: tally.completed,
        details: ComplianceDetail::HandWash(HandWashDetail {
            status,
            steps: checklist.completion(values),
            critical_steps_completed: sumank.completed,
            total_critical_steps: sumank.total,
            sumank_compliance: sumank,
        }),
    }
}

fn sumank_compliance(values: &AuditFormValues) -> SumankCompliance {
    let steps: BTreeMap<String, bool> = SUMANK
        .iter()
        .map(|(letter, step)| (letter.to_string(), values.is_yes(step)))
        .collect();
    let completed = steps.values().filter(|done| **done).count() as u32;
    let total = SUMANK.len() as u32;

    SumankCompliance {
        score: round2(f64::from(completed) / f64::from(total) * 100.0),
        completed,
        total,
        steps,
    }
}

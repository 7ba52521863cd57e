use std::sync::LazyLock;

use audit_core::models::audit_type::AuditType;
use audit_core::models::bundle::RespiratorySupport;
use audit_core::models::compliance::{ComplianceDetail, ComplianceResult, NivDetail};
use audit_core::models::form::AuditFormValues;

use crate::checklist::{round2, Checklist, ChecklistField, CompletionRule, Tally};
use crate::Scorer;

/// Non-invasive ventilation care audit.
///
/// Score = common care (60) + support-mode specific care (30) + nasal skin
/// integrity (10).
pub struct Niv;

const COMMON_WEIGHT: f64 = 60.0;
const SPECIFIC_WEIGHT: f64 = 30.0;
const NASAL_TRAUMA_WEIGHT: f64 = 0.10;

pub const COMMON_CHECKLIST: &str = "common";
pub const NASAL_TRAUMA_FIELD: &str = "nasalTrauma";

/// Nasal trauma staging and the skin-integrity score of each stage.
const NASAL_TRAUMA_SCALE: [(&str, f64); 4] = [
    ("No trauma", 100.0),
    ("Stage 1 - Non blanching erythema", 75.0),
    ("Stage 2 - Superficial erosion", 50.0),
    ("Stage 3 - Necrosis of skin", 0.0),
];

static CHECKLISTS: LazyLock<Vec<Checklist>> = LazyLock::new(|| {
    use CompletionRule::Answered;

    vec![
        Checklist {
            id: COMMON_CHECKLIST.to_string(),
            name: "Common NIV Care".to_string(),
            fields: vec![
                ChecklistField::new("indicationDocumented", "Indication Documented", Answered),
                ChecklistField::new(
                    "interfaceSizeAppropriate",
                    "Interface Size Appropriate",
                    Answered,
                ),
                ChecklistField::new("interfaceFitChecked", "Interface Fit Checked", Answered),
                ChecklistField::new("skinBarrierApplied", "Skin Barrier Applied", Answered),
                ChecklistField::new("headOfBedElevated", "Head Of Bed Elevated", Answered),
                ChecklistField::new("humidificationUsed", "Humidification Used", Answered),
                ChecklistField::new("oralCare", "Oral Care Given", Answered),
                ChecklistField::new("gastricDecompression", "Gastric Decompression", Answered),
                ChecklistField::new("circuitChecked", "Circuit Checked", Answered),
                ChecklistField::new(
                    "handHygieneBeforeContact",
                    "Hand Hygiene Before Contact",
                    Answered,
                ),
            ],
            description: Some("Applies to every respiratory support mode".to_string()),
        },
        Checklist {
            id: RespiratorySupport::Cpap.key().to_string(),
            name: RespiratorySupport::Cpap.label().to_string(),
            fields: vec![
                ChecklistField::new("cpapPressureSet", "Pressure Set As Prescribed", Answered),
                ChecklistField::new("cpapLeakChecked", "Leak Checked", Answered),
                ChecklistField::new("cpapProngPosition", "Prong Position Correct", Answered),
                ChecklistField::new("cpapSeptumChecked", "Nasal Septum Checked", Answered),
            ],
            description: None,
        },
        Checklist {
            id: RespiratorySupport::Nippv.key().to_string(),
            name: RespiratorySupport::Nippv.label().to_string(),
            fields: vec![
                ChecklistField::new(
                    "nippvSettingsDocumented",
                    "Ventilator Settings Documented",
                    Answered,
                ),
                ChecklistField::new(
                    "nippvSynchronyChecked",
                    "Patient-Ventilator Synchrony Checked",
                    Answered,
                ),
            ],
            description: None,
        },
        Checklist {
            id: RespiratorySupport::Hfnc.key().to_string(),
            name: RespiratorySupport::Hfnc.label().to_string(),
            fields: vec![
                ChecklistField::new("hfncFlowRateSet", "Flow Rate Set As Prescribed", Answered),
                ChecklistField::new("hfncCannulaSize", "Cannula Size Appropriate", Answered),
            ],
            description: None,
        },
    ]
});

impl Scorer for Niv {
    fn audit_type(&self) -> AuditType {
        AuditType::Niv
    }

    fn checklists(&self) -> &[Checklist] {
        &CHECKLISTS
    }

    fn score(&self, values: &AuditFormValues) -> ComplianceResult {
        score_niv(values)
    }
}

pub fn score_niv(values: &AuditFormValues) -> ComplianceResult {
    let Some(common) = checklist(COMMON_CHECKLIST) else {
        return ComplianceResult::empty();
    };

    // An unrecognized support mode only drops the specific term.
    let support = values
        .first("respiratorySupport")
        .and_then(RespiratorySupport::from_label);
    let specific = support.and_then(|s| checklist(s.key()));

    let common_tally = Tally::of(&common.fields, values);
    let specific_tally = specific
        .map(|c| Tally::of(&c.fields, values))
        .unwrap_or_default();

    let nasal_trauma = values.first(NASAL_TRAUMA_FIELD);
    let trauma_stage = nasal_trauma.and_then(|answer| {
        NASAL_TRAUMA_SCALE
            .iter()
            .find(|(stage, _)| *stage == answer)
            .map(|(_, score)| *score)
    });
    let nasal_trauma_score = trauma_stage.unwrap_or(0.0);

    let common_score = common_tally.ratio() * COMMON_WEIGHT;
    let specific_score = specific_tally.ratio() * SPECIFIC_WEIGHT;
    let score = common_score + specific_score + nasal_trauma_score * NASAL_TRAUMA_WEIGHT;

    let mut fields = common.completion(values);
    if let Some(specific) = specific {
        fields.extend(specific.completion(values));
    }
    fields.insert(NASAL_TRAUMA_FIELD.to_string(), trauma_stage.is_some());

    ComplianceResult {
        score: round2(score),
        total_fields: common_tally.total + specific_tally.total + 1,
        completed_fields: common_tally.completed
            + specific_tally.completed
            + u32::from(trauma_stage.is_some()),
        details: ComplianceDetail::Niv(NivDetail {
            respiratory_support: support,
            fields,
            common_score: round2(common_score),
            specific_score: round2(specific_score),
            nasal_trauma: nasal_trauma.map(str::to_string),
            nasal_trauma_score,
            common_completed: common_tally.completed,
            common_total: common_tally.total,
            specific_completed: specific_tally.completed,
            specific_total: specific_tally.total,
        }),
    }
}

fn checklist(id: &str) -> Option<&'static Checklist> {
    CHECKLISTS.iter().find(|c| c.id == id)
}

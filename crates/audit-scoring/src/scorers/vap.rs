use std::sync::LazyLock;

use audit_core::models::audit_type::AuditType;
use audit_core::models::bundle::VapBundle;
use audit_core::models::compliance::{ComplianceDetail, ComplianceResult, VapDetail};
use audit_core::models::form::AuditFormValues;

use crate::checklist::{round2, Checklist, ChecklistField, CompletionRule, Tally};
use crate::Scorer;

/// VAP prevention bundle audit across the ventilation lifecycle.
pub struct Vap;

static CHECKLISTS: LazyLock<Vec<Checklist>> = LazyLock::new(|| {
    use CompletionRule::Yes;

    let checklist = |bundle: VapBundle, fields: Vec<ChecklistField>| Checklist {
        id: bundle.key().to_string(),
        name: bundle.label().to_string(),
        fields,
        description: None,
    };

    vec![
        checklist(
            VapBundle::Intubation,
            vec![
                ChecklistField::new("intubIndicationDocumented", "Indication Documented", Yes),
                ChecklistField::new("intubHandHygiene", "Hand Hygiene Before Intubation", Yes),
                ChecklistField::new("intubSterileGloves", "Sterile Gloves Worn", Yes),
                ChecklistField::new("intubPreoxygenation", "Pre-oxygenation Done", Yes),
                ChecklistField::new(
                    "intubTubePositionConfirmed",
                    "Tube Position Confirmed",
                    Yes,
                ),
                ChecklistField::new("intubCuffPressure", "Cuff Pressure 20-30 cmH2O", Yes),
                ChecklistField::new("intubTubeSecured", "Tube Secured", Yes),
                ChecklistField::new("intubHeadElevation", "Head Elevated 30-45°", Yes),
            ],
        ),
        checklist(
            VapBundle::Maintenance,
            vec![
                ChecklistField::new("maintHandHygiene", "Hand Hygiene Before Contact", Yes),
                ChecklistField::new("maintHeadElevation", "Head Elevated 30-45°", Yes),
                ChecklistField::new("maintOralChlorhexidine", "Oral Care With Chlorhexidine", Yes),
                ChecklistField::new("maintToothBrushing", "Tooth Brushing", Yes),
                ChecklistField::new("maintCuffPressure", "Cuff Pressure Checked", Yes),
                ChecklistField::new("maintSubglotticSuction", "Subglottic Suction", Yes),
                ChecklistField::new(
                    "extubSedation",
                    "Daily Sedation Interruption",
                    CompletionRule::one_of(&["Stopped", "Sedation stopped or not started"]),
                ),
                ChecklistField::new(
                    "maintReadinessAssessed",
                    "Readiness To Extubate Assessed",
                    Yes,
                ),
                ChecklistField::new("maintDvtProphylaxis", "DVT Prophylaxis", Yes),
                ChecklistField::new("maintPepticUlcerProphylaxis", "Peptic Ulcer Prophylaxis", Yes),
                ChecklistField::new(
                    "equipCircuits",
                    "Ventilator Circuit",
                    CompletionRule::one_of(&["New", "Reused but sterile"]),
                ),
                ChecklistField::new("equipHumidifier", "Humidifier Maintained", Yes),
                ChecklistField::new("maintCondensateDrained", "Condensate Drained Away", Yes),
                ChecklistField::new("maintHmeChanged", "HME Filter Changed", Yes),
                ChecklistField::new("maintGastricResidual", "Gastric Residual Checked", Yes),
                ChecklistField::new("maintPositionChanged", "Position Changed 2-Hourly", Yes),
                ChecklistField::new("maintTubeSecured", "Tube Secured", Yes),
            ],
        ),
        checklist(
            VapBundle::EtSuction,
            vec![
                ChecklistField::new("suctionIndicated", "Suction Clinically Indicated", Yes),
                ChecklistField::new("suctionHandHygiene", "Hand Hygiene Before Suction", Yes),
                ChecklistField::new("suctionSterileGloves", "Sterile Gloves Worn", Yes),
                ChecklistField::new("suctionPreoxygenation", "Pre-oxygenation Done", Yes),
                ChecklistField::new("suctionCatheterSize", "Catheter Size Appropriate", Yes),
                ChecklistField::new("suctionPressureSet", "Suction Pressure Set", Yes),
                ChecklistField::new(
                    "suctionDurationLimited",
                    "Suction Under 15 Seconds",
                    Yes,
                ),
                ChecklistField::new("suctionClosedSystem", "Closed Suction System", Yes),
                ChecklistField::new(
                    "suctionPostAssessment",
                    "Post-Suction Assessment",
                    Yes,
                ),
            ],
        ),
        checklist(
            VapBundle::Extubation,
            vec![
                ChecklistField::new(
                    "extubReason",
                    "Reason For Extubation",
                    CompletionRule::one_of(&["Planned Extubation"]),
                ),
                ChecklistField::new(
                    "extubVentilatorSettings",
                    "Ventilator Settings",
                    CompletionRule::one_of(&["Extubatable"]),
                ),
                ChecklistField::new(
                    "extubBreathingTrial",
                    "Spontaneous Breathing Trial",
                    CompletionRule::one_of(&["Passed"]),
                ),
                ChecklistField::new("extubCuffLeakTest", "Cuff Leak Test Done", Yes),
                ChecklistField::new("extubSuctionBefore", "Suction Before Extubation", Yes),
                ChecklistField::new("extubHandHygiene", "Hand Hygiene Before Extubation", Yes),
                ChecklistField::new("extubPositioned", "Patient Positioned Upright", Yes),
                ChecklistField::new("extubOxygenReady", "Oxygen Therapy Ready", Yes),
                ChecklistField::new("extubDocumented", "Extubation Documented", Yes),
            ],
        ),
        checklist(
            VapBundle::PostExtubation,
            vec![
                ChecklistField::new("postExtubOxygenTherapy", "Oxygen Therapy Given", Yes),
                ChecklistField::new("postExtubMonitoring", "Respiratory Monitoring", Yes),
                ChecklistField::new("postExtubChestPhysio", "Chest Physiotherapy", Yes),
                ChecklistField::new(
                    "postExtubSwallowAssessment",
                    "Swallow Assessment Before Feeding",
                    Yes,
                ),
                ChecklistField::new("postExtubHeadElevation", "Head Elevated 30-45°", Yes),
            ],
        ),
    ]
});

impl Scorer for Vap {
    fn audit_type(&self) -> AuditType {
        AuditType::Vap
    }

    fn checklists(&self) -> &[Checklist] {
        &CHECKLISTS
    }

    fn score(&self, values: &AuditFormValues) -> ComplianceResult {
        score_vap(values)
    }
}

pub fn score_vap(values: &AuditFormValues) -> ComplianceResult {
    let selector = values.first("bundleType");
    let Some(bundle) = selector.and_then(VapBundle::from_label) else {
        tracing::warn!(bundle = ?selector, "unrecognized VAP bundle");
        return ComplianceResult::empty();
    };
    let Some(checklist) = CHECKLISTS.iter().find(|c| c.id == bundle.key()) else {
        return ComplianceResult::empty();
    };

    let tally = Tally::of(&checklist.fields, values);

    ComplianceResult {
        score: round2(tally.ratio() * 100.0),
        total_fields: tally.total,
        completed_fields: tally.completed,
        details: ComplianceDetail::Vap(VapDetail {
            bundle_type: bundle,
            fields: checklist.completion(values),
            completed_steps: tally.completed,
            total_steps: tally.total,
        }),
    }
}

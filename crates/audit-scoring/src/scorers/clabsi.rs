use std::sync::LazyLock;

use audit_core::models::audit_type::AuditType;
use audit_core::models::bundle::ClabsiBundle;
use audit_core::models::compliance::{ClabsiDetail, ComplianceDetail, ComplianceResult};
use audit_core::models::form::AuditFormValues;

use crate::checklist::{round2, Checklist, ChecklistField, CompletionRule, Tally};
use crate::Scorer;

/// CLABSI bundle audit: insertion, maintenance or removal of a central line.
/// Critical fields carry 70% of the score, the rest 30%.
pub struct Clabsi;

const CRITICAL_WEIGHT: f64 = 70.0;
const REGULAR_WEIGHT: f64 = 30.0;

static CHECKLISTS: LazyLock<Vec<Checklist>> = LazyLock::new(|| {
    use CompletionRule::Answered;

    vec![
        Checklist {
            id: ClabsiBundle::Insertion.key().to_string(),
            name: ClabsiBundle::Insertion.label().to_string(),
            fields: vec![
                ChecklistField::new("insertionDate", "Date of Insertion", Answered),
                ChecklistField::new("insertedBy", "Inserted By", Answered),
                ChecklistField::new("catheterType", "Catheter Type", Answered),
                ChecklistField::new("insertionSite", "Insertion Site", Answered),
                ChecklistField::new("indicationDocumented", "Indication Documented", Answered),
                ChecklistField::new("checklistUsed", "Insertion Checklist Used", Answered),
                ChecklistField::new("washHandsBefore", "Hand Hygiene Before Procedure", Answered),
                ChecklistField::new("washHandsDuring", "Hand Hygiene During Procedure", Answered)
                    .critical(),
                ChecklistField::new("ppeAsepsis", "Full PPE With Asepsis", Answered).critical(),
                ChecklistField::new(
                    "maximalBarrierPrecautions",
                    "Maximal Sterile Barrier Precautions",
                    Answered,
                ),
                ChecklistField::new(
                    "sitePreparation",
                    "Skin Prepared With Chlorhexidine-Alcohol",
                    Answered,
                )
                .critical(),
                ChecklistField::new(
                    "chlorhexidineDryTime",
                    "Antiseptic Allowed To Dry",
                    Answered,
                ),
                ChecklistField::new("avoidFemoralSite", "Femoral Site Avoided", Answered),
                ChecklistField::new("ultrasoundGuidance", "Ultrasound Guidance Used", Answered),
                ChecklistField::new(
                    "asepticPrecautions",
                    "Aseptic Technique Maintained",
                    Answered,
                )
                .critical(),
                ChecklistField::new("catheterSecured", "Catheter Secured", Answered),
                ChecklistField::new(
                    "sterileDressingApplied",
                    "Sterile Transparent Dressing Applied",
                    Answered,
                ),
                ChecklistField::new("dressingDated", "Dressing Labelled With Date", Answered),
                ChecklistField::new(
                    "handwashAfterGloves",
                    "Hand Hygiene After Glove Removal",
                    Answered,
                )
                .critical(),
                ChecklistField::new(
                    "tipPositionConfirmed",
                    "Tip Position Confirmed",
                    Answered,
                ),
                ChecklistField::new("insertionDocumented", "Insertion Documented", Answered),
            ],
            description: None,
        },
        Checklist {
            id: ClabsiBundle::Maintenance.key().to_string(),
            name: ClabsiBundle::Maintenance.label().to_string(),
            fields: vec![
                ChecklistField::new("dailyNeedReview", "Daily Review Of Line Necessity", Answered),
                ChecklistField::new(
                    "washHandsMaintenance",
                    "Hand Hygiene Before Line Access",
                    Answered,
                )
                .critical(),
                ChecklistField::new("dressingIntact", "Dressing Clean, Dry And Intact", Answered),
                ChecklistField::new(
                    "sterileDressing",
                    "Sterile Technique For Dressing Change",
                    Answered,
                )
                .critical(),
                ChecklistField::new("dressingChangeDate", "Last Dressing Change", Answered),
                ChecklistField::new(
                    "washHandsHubCare",
                    "Hand Hygiene Before Hub Care",
                    Answered,
                )
                .critical(),
                ChecklistField::new("hubScrubbed", "Hub Scrubbed Before Access", Answered),
                ChecklistField::new("wearSterileGloves", "Sterile Gloves Worn", Answered)
                    .critical(),
                ChecklistField::new("lumensFlushed", "Lumens Flushed", Answered),
            ],
            description: None,
        },
        Checklist {
            id: ClabsiBundle::Removal.key().to_string(),
            name: ClabsiBundle::Removal.label().to_string(),
            fields: vec![
                ChecklistField::new("removalDate", "Date of Removal", Answered),
                ChecklistField::new("removalReason", "Reason For Removal", Answered),
                ChecklistField::new("tipCultureSent", "Catheter Tip Sent For Culture", Answered)
                    .critical(),
            ],
            description: None,
        },
    ]
});

impl Scorer for Clabsi {
    fn audit_type(&self) -> AuditType {
        AuditType::Clabsi
    }

    fn checklists(&self) -> &[Checklist] {
        &CHECKLISTS
    }

    fn score(&self, values: &AuditFormValues) -> ComplianceResult {
        score_clabsi(values)
    }
}

pub fn score_clabsi(values: &AuditFormValues) -> ComplianceResult {
    let selector = values
        .selected("bundleChecklist")
        .or_else(|| values.selected("bundleType"));
    let Some(bundle) = selector.and_then(ClabsiBundle::from_label) else {
        tracing::warn!(bundle = ?selector, "unrecognized CLABSI bundle");
        return ComplianceResult::empty();
    };
    let Some(checklist) = CHECKLISTS.iter().find(|c| c.id == bundle.key()) else {
        return ComplianceResult::empty();
    };

    let critical = Tally::of(checklist.critical_fields(), values);
    let regular = Tally::of(checklist.regular_fields(), values);

    let critical_score = critical.ratio() * CRITICAL_WEIGHT;
    let regular_score = regular.ratio() * REGULAR_WEIGHT;

    ComplianceResult {
        score: round2(critical_score + regular_score),
        total_fields: critical.total + regular.total,
        completed_fields: critical.completed + regular.completed,
        details: ComplianceDetail::Clabsi(ClabsiDetail {
            bundle_type: bundle,
            fields: checklist.completion(values),
            critical_score: round2(critical_score),
            regular_score: round2(regular_score),
            critical_completed: critical.completed,
            critical_total: critical.total,
            regular_completed: regular.completed,
            regular_total: regular.total,
        }),
    }
}

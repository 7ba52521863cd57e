use audit_core::models::bundle::RespiratorySupport;
use audit_core::models::compliance::{ComplianceDetail, ComplianceResult, NivDetail};
use audit_core::models::form::AuditFormValues;
use audit_scoring::score_niv;
use serde_json::json;

const COMMON: [&str; 10] = [
    "indicationDocumented",
    "interfaceSizeAppropriate",
    "interfaceFitChecked",
    "skinBarrierApplied",
    "headOfBedElevated",
    "humidificationUsed",
    "oralCare",
    "gastricDecompression",
    "circuitChecked",
    "handHygieneBeforeContact",
];

fn common_yes() -> AuditFormValues {
    COMMON.iter().map(|f| (*f, "Yes")).collect()
}

fn detail(result: &ComplianceResult) -> &NivDetail {
    match &result.details {
        ComplianceDetail::Niv(d) => d,
        other => panic!("unexpected detail: {other:?}"),
    }
}

#[test]
fn full_cpap_care_without_trauma_scores_one_hundred() {
    let values = common_yes()
        .with("respiratorySupport", "CPAP")
        .with("cpapPressureSet", "Yes")
        .with("cpapLeakChecked", "Yes")
        .with("cpapProngPosition", "Yes")
        .with("cpapSeptumChecked", "Yes")
        .with("nasalTrauma", "No trauma");

    let result = score_niv(&values);
    assert_eq!(result.score, 100.0);
    assert_eq!(result.total_fields, 15);
    assert_eq!(result.completed_fields, 15);
    let d = detail(&result);
    assert_eq!(d.respiratory_support, Some(RespiratorySupport::Cpap));
    assert_eq!(d.nasal_trauma_score, 100.0);
}

#[test]
fn nasal_trauma_stages_weight_ten_percent() {
    let stages = [
        ("No trauma", 100.0, 10.0),
        ("Stage 1 - Non blanching erythema", 75.0, 7.5),
        ("Stage 2 - Superficial erosion", 50.0, 5.0),
        ("Stage 3 - Necrosis of skin", 0.0, 0.0),
        ("Stage 4", 0.0, 0.0),
    ];

    for (stage, trauma, score) in stages {
        let values = AuditFormValues::new().with("nasalTrauma", stage);
        let result = score_niv(&values);
        assert_eq!(detail(&result).nasal_trauma_score, trauma, "{stage}");
        assert_eq!(result.score, score, "{stage}");
    }
}

#[test]
fn recognized_stage_counts_as_completed() {
    let staged = score_niv(&AuditFormValues::new().with("nasalTrauma", "Stage 3 - Necrosis of skin"));
    assert_eq!(staged.completed_fields, 1);

    let unknown = score_niv(&AuditFormValues::new().with("nasalTrauma", "unsure"));
    assert_eq!(unknown.completed_fields, 0);
}

#[test]
fn unknown_support_mode_drops_the_specific_term() {
    let values = common_yes().with("respiratorySupport", "BiPAP");

    let result = score_niv(&values);
    // 10/10 * 60, no specific fields, no trauma answer
    assert_eq!(result.score, 60.0);
    assert_eq!(result.total_fields, 11);
    let d = detail(&result);
    assert_eq!(d.respiratory_support, None);
    assert_eq!(d.specific_total, 0);
}

#[test]
fn hfnc_partial_care() {
    let values = json!({
        "respiratorySupport": "HFNC",
        "indicationDocumented": "Yes",
        "interfaceSizeAppropriate": "Adult - Medium",
        "oralCare": "No",
        "hfncFlowRateSet": "40 L/min",
        "nasalTrauma": "Stage 1 - Non blanching erythema",
    });
    let values: AuditFormValues = serde_json::from_value(values).unwrap();

    let result = score_niv(&values);
    // 2/10 * 60 + 1/2 * 30 + 75 * 0.1 = 12 + 15 + 7.5
    assert_eq!(result.score, 34.5);
    assert_eq!(result.total_fields, 13);
    assert_eq!(result.completed_fields, 4);
    let d = detail(&result);
    assert_eq!(d.common_score, 12.0);
    assert_eq!(d.specific_score, 15.0);
    assert_eq!(d.fields.get("oralCare"), Some(&false));
    assert_eq!(d.fields.get("nasalTrauma"), Some(&true));
}

#[test]
fn nasal_trauma_reads_a_selected_list() {
    let values: AuditFormValues =
        serde_json::from_value(json!({ "nasalTrauma": ["No trauma"] })).unwrap();

    let result = score_niv(&values);
    assert_eq!(result.score, 10.0);
    assert_eq!(result.completed_fields, 1);
    assert_eq!(detail(&result).nasal_trauma.as_deref(), Some("No trauma"));
}

use audit_core::models::compliance::{ComplianceDetail, HandHygieneDetail, HandHygieneStatus};
use audit_core::models::form::{AuditFormValues, FormValue};
use audit_scoring::score_hand_hygiene;
use serde_json::json;

fn values(json: serde_json::Value) -> AuditFormValues {
    serde_json::from_value(json).expect("valid form values")
}

fn detail(result: &audit_core::models::compliance::ComplianceResult) -> &HandHygieneDetail {
    match &result.details {
        ComplianceDetail::HandHygiene(d) => d,
        other => panic!("unexpected detail: {other:?}"),
    }
}

#[test]
fn adequate_rub_scores_full_marks() {
    let result = score_hand_hygiene(&values(json!({
        "opportunityType": ["Moment 1 - Before touching patients"],
        "handRubDuration": [">20 sec"],
        "adherenceSteps": ["6 Steps"],
    })));

    assert_eq!(result.score, 100.0);
    assert_eq!(result.total_fields, 1);
    assert_eq!(result.completed_fields, 1);
    let d = detail(&result);
    assert_eq!(d.status, Some(HandHygieneStatus::Adequate));
    assert_eq!(d.selected_moment, "Moment 1 - Before touching patients");
}

#[test]
fn zero_duration_is_no_hand_hygiene() {
    let result = score_hand_hygiene(&values(json!({
        "handRubDuration": ["0 sec"],
        "adherenceSteps": ["6 Steps"],
    })));

    assert_eq!(result.score, 0.0);
    assert_eq!(detail(&result).status, Some(HandHygieneStatus::NoHandHygiene));
}

#[test]
fn zero_steps_is_no_hand_hygiene() {
    let result = score_hand_hygiene(&values(json!({
        "handRubDuration": [">20 sec"],
        "adherenceSteps": ["0 Steps"],
    })));

    assert_eq!(result.score, 0.0);
    assert_eq!(detail(&result).status, Some(HandHygieneStatus::NoHandHygiene));
}

#[test]
fn partial_technique_needs_improvement() {
    let combos = [
        ("<10 sec", "6 Steps"),
        (">20 sec", "Less than 3"),
        ("10-20 sec", "Less than 3"),
        ("<10 sec", "3 to 5 steps"),
        ("<10 sec", "Less than 3"),
    ];

    for (duration, steps) in combos {
        let result = score_hand_hygiene(&values(json!({
            "handRubDuration": [duration],
            "adherenceSteps": [steps],
        })));
        assert_eq!(result.score, 50.0, "{duration} / {steps}");
        assert_eq!(
            detail(&result).status,
            Some(HandHygieneStatus::NeedsImprovement)
        );
    }
}

#[test]
fn missing_steps_scores_zero_without_status() {
    let result = score_hand_hygiene(&values(json!({
        "handRubDuration": [">20 sec"],
    })));

    assert_eq!(result.score, 0.0);
    assert_eq!(detail(&result).status, None);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["details"]["status"], "");
}

#[test]
fn legacy_scalar_fields_are_accepted() {
    let result = score_hand_hygiene(&values(json!({
        "timeDuration": "10-20 sec",
        "stepsAdherence": "3 to 5 steps",
    })));

    assert_eq!(result.score, 100.0);
    let d = detail(&result);
    assert_eq!(d.time_duration.as_deref(), Some("10-20 sec"));
    assert_eq!(d.steps_adherence.as_deref(), Some("3 to 5 steps"));
}

#[test]
fn moment_falls_back_to_flags_in_who_order() {
    let result = score_hand_hygiene(&values(json!({
        "moments": {
            "afterSurroundingsContact": true,
            "afterPatientContact": true,
            "beforePatientContact": false,
        },
        "handRubDuration": [">20 sec"],
        "adherenceSteps": ["6 Steps"],
        "glovesRequired": "Yes",
        "glovesUsed": "No",
    })));

    assert_eq!(result.completed_fields, 1);
    let d = detail(&result);
    assert_eq!(d.selected_moment, "Moment 4 - After touching patients");
    assert_eq!(d.moments.len(), 3);
    assert_eq!(d.gloves_required, Some(FormValue::Text("Yes".to_string())));
    assert_eq!(d.gloves_used, Some(FormValue::Text("No".to_string())));
}

#[test]
fn no_moment_leaves_opportunity_incomplete() {
    let result = score_hand_hygiene(&values(json!({
        "moments": { "beforePatientContact": false },
        "handRubDuration": [">20 sec"],
        "adherenceSteps": ["6 Steps"],
    })));

    assert_eq!(result.completed_fields, 0);
    assert_eq!(result.total_fields, 1);
    assert_eq!(detail(&result).selected_moment, "");
    assert_eq!(result.score, 100.0);
}

#[test]
fn matching_is_exact() {
    let result = score_hand_hygiene(&values(json!({
        "handRubDuration": [" >20 sec"],
        "adherenceSteps": ["6 steps"],
    })));

    assert_eq!(result.score, 50.0);
}

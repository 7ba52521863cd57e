use audit_core::models::form::{AuditFormValues, FormValue};
use serde_json::json;

fn values(json: serde_json::Value) -> AuditFormValues {
    serde_json::from_value(json).expect("form values never fail to parse")
}

#[test]
fn raw_answers_keep_their_shape() {
    let form = values(json!({
        "wetHands": "Yes",
        "opportunityType": ["Moment 2 - Before clean/aseptic procedure"],
        "moments": { "beforeAsepticProcedure": true, "afterPatientContact": false },
    }));

    assert_eq!(form.text("wetHands"), Some("Yes"));
    assert_eq!(
        form.first("opportunityType"),
        Some("Moment 2 - Before clean/aseptic procedure")
    );
    assert_eq!(form.flags("moments").map(|f| f.len()), Some(2));
    assert_eq!(form.text("opportunityType"), None);
}

#[test]
fn unexpected_json_is_tolerated() {
    let form = values(json!({
        "count": 3,
        "flag": true,
        "empty": null,
        "mixed": ["Yes", 1, null],
        "moments": { "beforePatientContact": "yes", "afterPatientContact": true },
    }));

    assert!(matches!(form.get("count"), Some(FormValue::Other(_))));
    assert!(!form.is_answered("empty"));
    assert_eq!(
        form.get("mixed"),
        Some(&FormValue::List(vec!["Yes".to_string()]))
    );

    let moments = form.flags("moments").unwrap();
    assert_eq!(moments.get("beforePatientContact"), Some(&false));
    assert_eq!(moments.get("afterPatientContact"), Some(&true));
}

#[test]
fn yes_and_answered_rules() {
    let form = AuditFormValues::new()
        .with("a", "Yes")
        .with("b", "No")
        .with("c", "")
        .with("d", "2024-05-01")
        .with("e", "yes");

    assert!(form.is_yes("a"));
    assert!(!form.is_yes("e"));
    assert!(!form.is_yes("missing"));

    assert!(form.is_answered("a"));
    assert!(!form.is_answered("b"));
    assert!(!form.is_answered("c"));
    assert!(form.is_answered("d"));
    assert!(form.is_answered("e"));
    assert!(!form.is_answered("missing"));
}

#[test]
fn list_and_flag_answers() {
    let form = values(json!({
        "none": [],
        "declined": ["No"],
        "picked": ["No", "Left subclavian"],
        "flags_off": { "x": false },
        "flags_on": { "x": false, "y": true },
    }));

    assert!(!form.is_answered("none"));
    assert!(!form.is_answered("declined"));
    assert!(form.is_answered("picked"));
    assert!(!form.is_answered("flags_off"));
    assert!(form.is_answered("flags_on"));
}

#[test]
fn values_serialize_back_to_plain_json() {
    let input = json!({
        "bundleType": "Maintenance Bundle",
        "adherenceSteps": ["6 Steps"],
        "moments": { "afterPatientContact": true },
    });
    let form = values(input.clone());

    assert_eq!(serde_json::to_value(&form).unwrap(), input);
}

#[test]
fn numbers_and_switches_are_answers() {
    let form = values(json!({
        "size": 7,
        "timestamp": 1710374400000u64,
        "ratio": 0.5,
        "zero": 0,
        "on": true,
        "off": false,
        "empty": null,
    }));

    assert!(form.is_answered("size"));
    assert!(form.is_answered("timestamp"));
    assert!(form.is_answered("ratio"));
    assert!(!form.is_answered("zero"));
    assert!(form.is_answered("on"));
    assert!(!form.is_answered("off"));
    assert!(!form.is_answered("empty"));
    assert!(!form.is_yes("on"));
}

#[test]
fn empty_selection_reads_as_missing() {
    let form = values(json!({
        "blank": "",
        "blankList": [""],
        "picked": ["Removal Bundle"],
    }));

    assert_eq!(form.selected("blank"), None);
    assert_eq!(form.selected("blankList"), None);
    assert_eq!(form.selected("picked"), Some("Removal Bundle"));
    assert_eq!(form.selected("missing"), None);
}

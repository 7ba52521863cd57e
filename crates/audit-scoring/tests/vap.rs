use audit_core::models::bundle::VapBundle;
use audit_core::models::compliance::{ComplianceDetail, ComplianceResult, VapDetail};
use audit_core::models::form::AuditFormValues;
use audit_scoring::score_vap;

fn detail(result: &ComplianceResult) -> &VapDetail {
    match &result.details {
        ComplianceDetail::Vap(d) => d,
        other => panic!("unexpected detail: {other:?}"),
    }
}

fn circuit(answer: &str) -> bool {
    let values = AuditFormValues::new()
        .with("bundleType", "Maintenance Bundle")
        .with("equipCircuits", answer);
    let result = score_vap(&values);
    detail(&result).fields["equipCircuits"]
}

#[test]
fn reused_unsterile_circuit_is_not_compliant() {
    assert!(circuit("New"));
    assert!(circuit("Reused but sterile"));
    assert!(!circuit("Reused Unsterile"));
    assert!(!circuit("Yes"));
}

#[test]
fn sedation_accepts_either_stopped_wording() {
    for (answer, expected) in [
        ("Stopped", 1),
        ("Sedation stopped or not started", 1),
        ("Continued", 0),
    ] {
        let values = AuditFormValues::new()
            .with("bundleType", "Maintenance Bundle")
            .with("extubSedation", answer);
        let result = score_vap(&values);
        assert_eq!(result.completed_fields, expected, "{answer}");
        assert_eq!(result.total_fields, 17);
    }
}

#[test]
fn extubation_readiness_uses_option_values() {
    let values = AuditFormValues::new()
        .with("bundleType", "Extubation Bundle")
        .with("extubReason", "Planned Extubation")
        .with("extubVentilatorSettings", "Extubatable")
        .with("extubBreathingTrial", "Failed")
        .with("extubCuffLeakTest", "Yes");

    let result = score_vap(&values);
    assert_eq!(result.completed_fields, 3);
    assert_eq!(result.total_fields, 9);
    assert_eq!(result.score, 33.33);

    let unplanned = AuditFormValues::new()
        .with("bundleType", "Extubation Bundle")
        .with("extubReason", "Accidental Extubation");
    assert_eq!(score_vap(&unplanned).completed_fields, 0);
}

#[test]
fn post_extubation_plain_yes_rule() {
    let values = AuditFormValues::new()
        .with("bundleType", "Post-Extubation Care Bundle")
        .with("postExtubOxygenTherapy", "Yes")
        .with("postExtubMonitoring", "Yes")
        .with("postExtubChestPhysio", "Done");

    let result = score_vap(&values);
    assert_eq!(result.score, 40.0);
    let d = detail(&result);
    assert_eq!(d.bundle_type, VapBundle::PostExtubation);
    assert_eq!(d.completed_steps, 2);
    assert_eq!(d.total_steps, 5);
}

#[test]
fn bundle_sizes() {
    let sizes = [
        ("Intubation Bundle", 8),
        ("Maintenance Bundle", 17),
        ("ET Suction Bundle", 9),
        ("Extubation Bundle", 9),
        ("Post-Extubation Care Bundle", 5),
    ];
    for (bundle, size) in sizes {
        let result = score_vap(&AuditFormValues::new().with("bundleType", bundle));
        assert_eq!(result.total_fields, size, "{bundle}");
        assert_eq!(result.score, 0.0);
    }
}

#[test]
fn unknown_bundle_is_the_empty_result() {
    let result = score_vap(&AuditFormValues::new().with("bundleType", "Weaning Bundle"));
    assert!(result.is_empty());
    assert!(matches!(result.details, ComplianceDetail::Empty(_)));
}

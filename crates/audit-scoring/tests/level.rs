use audit_core::models::level::{ComplianceBand, LevelColor};
use audit_scoring::classify;

#[test]
fn boundaries_are_inclusive_lower_bounds() {
    let cases = [
        (100.0, ComplianceBand::Excellent, LevelColor::Green),
        (95.0, ComplianceBand::Excellent, LevelColor::Green),
        (94.99, ComplianceBand::High, LevelColor::Green),
        (90.0, ComplianceBand::High, LevelColor::Green),
        (89.99, ComplianceBand::Acceptable, LevelColor::Yellow),
        (80.0, ComplianceBand::Acceptable, LevelColor::Yellow),
        (79.99, ComplianceBand::Low, LevelColor::Orange),
        (70.0, ComplianceBand::Low, LevelColor::Orange),
        (69.99, ComplianceBand::Critical, LevelColor::Red),
        (0.0, ComplianceBand::Critical, LevelColor::Red),
    ];

    for (score, band, color) in cases {
        let level = classify(score);
        assert_eq!(level.level, band, "score {score}");
        assert_eq!(level.color, color, "score {score}");
        assert!(!level.description.is_empty());
    }
}

#[test]
fn out_of_range_scores_fall_into_edge_bands() {
    assert_eq!(classify(150.0).level, ComplianceBand::Excellent);
    assert_eq!(classify(-5.0).level, ComplianceBand::Critical);
    assert_eq!(classify(f64::NAN).level, ComplianceBand::Critical);
}

#[test]
fn bands_never_improve_as_score_drops() {
    let mut previous = classify(100.0).level;
    for tenths in (0..=1000).rev() {
        let level = classify(f64::from(tenths) / 10.0).level;
        assert!(level >= previous, "band improved at {}", f64::from(tenths) / 10.0);
        previous = level;
    }
}

#[test]
fn level_serializes_for_the_dashboard() {
    let json = serde_json::to_value(classify(82.5)).unwrap();
    assert_eq!(json["level"], "Acceptable");
    assert_eq!(json["color"], "yellow");
}

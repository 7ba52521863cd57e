use audit_core::models::level::{ComplianceBand, ComplianceLevel, LevelColor};

/// Lower bound (inclusive) of each band, checked best first.
const BANDS: [(f64, ComplianceBand, LevelColor, &str); 4] = [
    (
        95.0,
        ComplianceBand::Excellent,
        LevelColor::Green,
        "Exemplary adherence to infection-control protocol",
    ),
    (
        90.0,
        ComplianceBand::High,
        LevelColor::Green,
        "Strong adherence with minor gaps",
    ),
    (
        80.0,
        ComplianceBand::Acceptable,
        LevelColor::Yellow,
        "Meets the minimum standard; reinforce weak steps",
    ),
    (
        70.0,
        ComplianceBand::Low,
        LevelColor::Orange,
        "Below standard; targeted retraining required",
    ),
];

const CRITICAL_DESCRIPTION: &str = "Unsafe practice; immediate corrective action required";

/// Map a compliance score to its qualitative band.
///
/// Total over `f64`: anything below 70, including NaN, is Critical.
pub fn classify(score: f64) -> ComplianceLevel {
    let (level, color, description) = BANDS
        .iter()
        .find(|(min, ..)| score >= *min)
        .map(|&(_, level, color, description)| (level, color, description))
        .unwrap_or((ComplianceBand::Critical, LevelColor::Red, CRITICAL_DESCRIPTION));

    ComplianceLevel {
        level,
        color,
        description: description.to_string(),
    }
}

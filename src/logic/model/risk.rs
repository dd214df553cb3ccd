//! Risk Banding
//!
//! Maps the classifier's probability to the three display bands. The band is
//! a pure function of the percentage with fixed cut points at 40 and 70;
//! both boundaries belong to the lower band.

use serde::{Deserialize, Serialize};

/// Discrete churn risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Band for a risk percentage:
    /// HIGH iff pct > 70, MEDIUM iff 40 < pct <= 70, LOW iff pct <= 40.
    pub fn classify(percent: f32) -> Self {
        if percent > 70.0 {
            RiskBand::High
        } else if percent > 40.0 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW RISK",
            RiskBand::Medium => "MEDIUM RISK",
            RiskBand::High => "HIGH RISK",
        }
    }

    /// Accent color used by the gauge and badges
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Low => "#51cf66",
            RiskBand::Medium => "#ffc107",
            RiskBand::High => "#ff6b6b",
        }
    }

    /// Retention guidance shown under the gauge
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskBand::High => {
                "Critical alert: this customer is at high risk of churning. Immediate intervention required - consider personalized offers, loyalty rewards, or direct outreach."
            }
            RiskBand::Medium => {
                "Attention needed: this customer shows moderate churn signals. Monitor closely and consider proactive engagement strategies."
            }
            RiskBand::Low => {
                "Stable customer: this customer shows low churn risk. Continue maintaining good relationship and service quality."
            }
        }
    }
}

/// Outcome of one inference call. Created fresh on every call, immutable
/// once computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnAssessment {
    /// Raw classifier output in [0, 1]
    pub probability: f32,
    /// probability * 100
    pub risk_percent: f32,
    pub band: RiskBand,
}

impl ChurnAssessment {
    pub fn from_probability(probability: f32) -> Self {
        let risk_percent = probability * 100.0;
        Self {
            probability,
            risk_percent,
            band: RiskBand::classify(risk_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        // Both cut points belong to the lower band
        assert_eq!(RiskBand::classify(40.0), RiskBand::Low);
        assert_eq!(RiskBand::classify(40.01), RiskBand::Medium);
        assert_eq!(RiskBand::classify(70.0), RiskBand::Medium);
        assert_eq!(RiskBand::classify(70.01), RiskBand::High);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(RiskBand::classify(0.0), RiskBand::Low);
        assert_eq!(RiskBand::classify(100.0), RiskBand::High);
    }

    #[test]
    fn test_assessment_from_probability() {
        let a = ChurnAssessment::from_probability(0.65);
        assert!((a.risk_percent - 65.0).abs() < 1e-4);
        assert_eq!(a.band, RiskBand::Medium);

        let b = ChurnAssessment::from_probability(0.705);
        assert_eq!(b.band, RiskBand::High);
    }

    #[test]
    fn test_band_serialization() {
        assert_eq!(serde_json::to_string(&RiskBand::High).unwrap(), "\"HIGH\"");
        assert_eq!(serde_json::to_string(&RiskBand::Low).unwrap(), "\"LOW\"");
    }

    #[test]
    fn test_band_display_attributes() {
        assert_eq!(RiskBand::Medium.label(), "MEDIUM RISK");
        assert_eq!(RiskBand::Low.color(), "#51cf66");
        assert!(RiskBand::High.recommendation().contains("high risk"));
    }
}

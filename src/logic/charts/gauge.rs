//! Gauge chart data - risk percentage with the three fixed band steps

use serde::{Deserialize, Serialize};

use crate::logic::model::ChurnAssessment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeStep {
    pub from: f32,
    pub to: f32,
    pub color: String,
}

/// Chart-ready gauge data: the needle value, the band accent color, and the
/// fixed background steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeSpec {
    pub value: f32,
    pub color: String,
    pub steps: Vec<GaugeStep>,
}

impl GaugeSpec {
    pub fn for_assessment(assessment: &ChurnAssessment) -> Self {
        Self {
            value: assessment.risk_percent,
            color: assessment.band.color().to_string(),
            steps: vec![
                GaugeStep {
                    from: 0.0,
                    to: 40.0,
                    color: "rgba(81, 207, 102, 0.2)".to_string(),
                },
                GaugeStep {
                    from: 40.0,
                    to: 70.0,
                    color: "rgba(255, 193, 7, 0.2)".to_string(),
                },
                GaugeStep {
                    from: 70.0,
                    to: 100.0,
                    color: "rgba(255, 107, 107, 0.2)".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_follows_band() {
        let spec = GaugeSpec::for_assessment(&ChurnAssessment::from_probability(0.85));
        assert!((spec.value - 85.0).abs() < 1e-4);
        assert_eq!(spec.color, "#ff6b6b");
        assert_eq!(spec.steps.len(), 3);
        assert_eq!(spec.steps[1].from, 40.0);
        assert_eq!(spec.steps[1].to, 70.0);
    }
}

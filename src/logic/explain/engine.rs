//! Factor-Impact Heuristic
//!
//! Fixed-rule impact table for the "Churn Risk Factors" panel. These are
//! hand-picked display constants with no derivation from the trained
//! classifier - not a gradient or SHAP-style attribution, and not expected
//! to track the model's actual sensitivities. Do not tune them against
//! model output.

use crate::logic::features::CustomerProfile;

use super::types::{FactorBreakdown, FactorImpact};

/// Shown alongside the factors, always.
pub const DISCLAIMER: &str =
    "Illustrative heuristic only. Impact scores are fixed display constants, not derived from the model.";

/// Per-attribute impact scores, constants preserved as-is.
pub fn factor_impacts(profile: &CustomerProfile) -> Vec<FactorImpact> {
    vec![
        FactorImpact {
            name: "Active Member".to_string(),
            impact: if profile.is_active_member { 15.0 } else { -20.0 },
            description: Some("Engagement with the bank".to_string()),
        },
        FactorImpact {
            name: "Credit Card".to_string(),
            impact: if profile.has_credit_card { 5.0 } else { -5.0 },
            description: None,
        },
        FactorImpact {
            name: "Products (>1)".to_string(),
            impact: if profile.num_products > 1 { 10.0 } else { -15.0 },
            description: Some("Breadth of product holdings".to_string()),
        },
        FactorImpact {
            name: "High Tenure".to_string(),
            impact: if profile.tenure > 5 { 15.0 } else { -10.0 },
            description: Some("Years with the bank".to_string()),
        },
        FactorImpact {
            name: "Credit Score".to_string(),
            impact: if profile.credit_score > 700 {
                10.0
            } else if profile.credit_score < 500 {
                -15.0
            } else {
                0.0
            },
            description: None,
        },
        FactorImpact {
            name: "Age Factor".to_string(),
            impact: if profile.age > 50 { -10.0 } else { 5.0 },
            description: None,
        },
    ]
}

pub fn breakdown(profile: &CustomerProfile) -> FactorBreakdown {
    FactorBreakdown {
        factors: factor_impacts(profile),
        disclaimer: DISCLAIMER.to_string(),
    }
}

//! Radar chart data - six profile axes normalized to 0-100
//!
//! Normalization constants follow the input widget ranges; balance and
//! salary are capped rather than rescaled so outliers pin to the rim.

use serde::{Deserialize, Serialize};

use crate::logic::features::CustomerProfile;

/// Axis labels in display order
pub const RADAR_AXES: [&str; 6] = ["Credit Score", "Age", "Tenure", "Balance", "Products", "Salary"];

/// Chart-ready radar data; the frontend draws it, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarProfile {
    pub axes: Vec<String>,
    /// One value per axis, 0-100
    pub values: Vec<f32>,
}

impl RadarProfile {
    pub fn from_profile(profile: &CustomerProfile) -> Self {
        let values = vec![
            (profile.credit_score as f32 - 300.0) / 550.0 * 100.0,
            profile.age as f32 / 92.0 * 100.0,
            profile.tenure as f32 / 10.0 * 100.0,
            (profile.balance / 250_000.0 * 100.0).min(100.0),
            profile.num_products as f32 / 4.0 * 100.0,
            (profile.estimated_salary / 200_000.0 * 100.0).min(100.0),
        ];

        Self {
            axes: RADAR_AXES.iter().map(|s| s.to_string()).collect(),
            values,
        }
    }
}

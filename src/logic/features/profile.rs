//! Customer Profile - raw attributes collected from the input widgets

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    AGE_MAX, AGE_MIN, CREDIT_SCORE_MAX, CREDIT_SCORE_MIN, PRODUCTS_MAX, PRODUCTS_MIN, TENURE_MAX,
    TENURE_MIN,
};

/// Raw customer attributes as entered in the dashboard form.
///
/// Categorical fields hold the display strings; encoding to model columns
/// happens in the assembler against the fitted encoders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub geography: String,
    pub gender: String,
    pub age: i32,
    pub credit_score: i32,
    pub balance: f32,
    pub tenure: i32,
    pub num_products: i32,
    pub has_credit_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f32,
}

/// A field outside the range its input widget allows.
/// Caller error, never a model concern.
#[derive(Debug, Clone, Error)]
#[error("{field} out of range: {value} not in [{min}, {max}]")]
pub struct OutOfRangeError {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl CustomerProfile {
    /// Check every numeric field against its widget range.
    /// Reports the first offending field.
    pub fn validate(&self) -> Result<(), OutOfRangeError> {
        range_check(
            "credit_score",
            self.credit_score as f64,
            CREDIT_SCORE_MIN as f64,
            CREDIT_SCORE_MAX as f64,
        )?;
        range_check("age", self.age as f64, AGE_MIN as f64, AGE_MAX as f64)?;
        range_check(
            "tenure",
            self.tenure as f64,
            TENURE_MIN as f64,
            TENURE_MAX as f64,
        )?;
        range_check(
            "num_products",
            self.num_products as f64,
            PRODUCTS_MIN as f64,
            PRODUCTS_MAX as f64,
        )?;
        range_check("balance", self.balance as f64, 0.0, f64::INFINITY)?;
        range_check(
            "estimated_salary",
            self.estimated_salary as f64,
            0.0,
            f64::INFINITY,
        )?;
        Ok(())
    }
}

fn range_check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), OutOfRangeError> {
    if value < min || value > max {
        return Err(OutOfRangeError {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_profile() -> CustomerProfile {
    CustomerProfile {
        geography: "France".to_string(),
        gender: "Female".to_string(),
        age: 45,
        credit_score: 650,
        balance: 50_000.0,
        tenure: 5,
        num_products: 2,
        has_credit_card: true,
        is_active_member: true,
        estimated_salary: 100_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_credit_score_out_of_range() {
        let mut profile = sample_profile();
        profile.credit_score = 299;
        let err = profile.validate().unwrap_err();
        assert_eq!(err.field, "credit_score");
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let mut profile = sample_profile();
        profile.age = 18;
        assert!(profile.validate().is_ok());
        profile.age = 92;
        assert!(profile.validate().is_ok());
        profile.age = 93;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let mut profile = sample_profile();
        profile.balance = -1.0;
        assert_eq!(profile.validate().unwrap_err().field, "balance");
    }
}

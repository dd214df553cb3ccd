//! Feature Assembler - CustomerProfile → FeatureVector
//!
//! The one real data path of the app. Two explicit stages:
//!
//! 1. `raw_features` — encode gender, one-hot geography, concatenate every
//!    column in the fixed layout order.
//! 2. `assemble` — apply the fitted scaler's per-column transform and wrap
//!    the result with the layout version/hash.
//!
//! The stages are split so the pre-scale column order can be asserted
//! directly in tests. Order bugs here don't error, they produce a
//! wrong-but-plausible score.

use thiserror::Error;

use crate::logic::artifacts::{FeatureScaler, GenderEncoder, GeographyEncoder};

use super::layout::FeatureLayout;
use super::profile::CustomerProfile;
use super::vector::FeatureVector;

/// Errors raised while turning raw attributes into model input.
#[derive(Debug, Clone, Error)]
pub enum PrepError {
    /// A categorical value outside the fitted encoder's known set.
    /// Structurally prevented when the UI only offers known values.
    #[error("unknown {field} category: {value:?}")]
    UnknownCategory {
        field: &'static str,
        value: String,
    },

    /// Column count does not match what the scaler/model were fit with.
    /// Fatal configuration error, never user-recoverable.
    #[error("feature shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Unscaled feature row in layout order:
/// credit score, encoded gender, age, tenure, balance, product count,
/// has-credit-card, is-active-member, estimated salary, geography one-hot.
pub fn raw_features(
    profile: &CustomerProfile,
    gender: &GenderEncoder,
    geography: &GeographyEncoder,
) -> Result<Vec<f32>, PrepError> {
    let gender_code = gender.encode(&profile.gender)?;
    let geo_block = geography.one_hot(&profile.geography)?;

    let mut row = Vec::with_capacity(super::layout::BASE_FEATURE_COUNT + geo_block.len());
    row.push(profile.credit_score as f32);
    row.push(gender_code);
    row.push(profile.age as f32);
    row.push(profile.tenure as f32);
    row.push(profile.balance);
    row.push(profile.num_products as f32);
    row.push(if profile.has_credit_card { 1.0 } else { 0.0 });
    row.push(if profile.is_active_member { 1.0 } else { 0.0 });
    row.push(profile.estimated_salary);
    row.extend_from_slice(&geo_block);

    Ok(row)
}

/// Full assembly: raw row, then the scaler's per-column affine transform.
///
/// Deterministic: identical profiles yield bit-identical vectors.
pub fn assemble(
    profile: &CustomerProfile,
    gender: &GenderEncoder,
    geography: &GeographyEncoder,
    scaler: &FeatureScaler,
    layout: &FeatureLayout,
) -> Result<FeatureVector, PrepError> {
    let raw = raw_features(profile, gender, geography)?;

    if raw.len() != layout.len() {
        return Err(PrepError::ShapeMismatch {
            expected: layout.len(),
            actual: raw.len(),
        });
    }

    let scaled = scaler.transform(&raw)?;
    Ok(FeatureVector::from_values(layout, scaled))
}

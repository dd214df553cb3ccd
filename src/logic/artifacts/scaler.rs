//! Fitted standard scaler
//!
//! Per-column `(x - mean) / scale` learned from training data. The column
//! order of `mean`/`scale` is the assembled feature order; width disagreement
//! is a fatal configuration error, not something to recover from.

use serde::{Deserialize, Serialize};

use crate::logic::features::PrepError;

/// Fitted per-column affine normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl FeatureScaler {
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Self {
        Self { mean, scale }
    }

    /// Fitted column count
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Internal consistency: mean and scale must have the same width.
    pub fn check_consistent(&self) -> Result<(), PrepError> {
        if self.mean.len() != self.scale.len() {
            return Err(PrepError::ShapeMismatch {
                expected: self.mean.len(),
                actual: self.scale.len(),
            });
        }
        Ok(())
    }

    /// Standardize a raw row. Every column is transformed; none skipped,
    /// none reordered.
    pub fn transform(&self, row: &[f32]) -> Result<Vec<f32>, PrepError> {
        self.check_consistent()?;

        if row.len() != self.mean.len() {
            return Err(PrepError::ShapeMismatch {
                expected: self.mean.len(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .enumerate()
            .map(|(i, &x)| (x - self.mean[i]) / self.scale[i].max(1e-8))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let scaler = FeatureScaler::new(vec![10.0, 0.0], vec![2.0, 1.0]);
        let out = scaler.transform(&[14.0, 3.0]).unwrap();
        assert_eq!(out, vec![2.0, 3.0]);
    }

    #[test]
    fn test_width_mismatch() {
        let scaler = FeatureScaler::new(vec![0.0; 3], vec![1.0; 3]);
        let err = scaler.transform(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            PrepError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_inconsistent_artifact() {
        let scaler = FeatureScaler::new(vec![0.0; 3], vec![1.0; 2]);
        assert!(scaler.check_consistent().is_err());
    }

    #[test]
    fn test_zero_scale_guarded() {
        let scaler = FeatureScaler::new(vec![0.0], vec![0.0]);
        let out = scaler.transform(&[1.0]).unwrap();
        assert!(out[0].is_finite());
    }
}

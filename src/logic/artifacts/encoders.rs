//! Fitted categorical encoders
//!
//! Both encoders are opaque fitted artifacts: the class/category lists were
//! determined at training time and are loaded from disk verbatim. Nothing
//! here learns anything; order is meaning.

use serde::{Deserialize, Serialize};

use crate::logic::features::PrepError;

// ============================================================================
// GENDER LABEL ENCODER
// ============================================================================

/// Fitted label encoder: class string → trained integer code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderEncoder {
    classes: Vec<String>,
}

impl GenderEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Known classes, in trained order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Trained integer code for a class.
    /// Fails with `UnknownCategory` for values outside the fitted set.
    pub fn encode(&self, value: &str) -> Result<f32, PrepError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as f32)
            .ok_or_else(|| PrepError::UnknownCategory {
                field: "gender",
                value: value.to_string(),
            })
    }
}

// ============================================================================
// GEOGRAPHY ONE-HOT ENCODER
// ============================================================================

/// Fitted one-hot encoder: category string → binary indicator block,
/// one column per known category in trained order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographyEncoder {
    categories: Vec<String>,
}

impl GeographyEncoder {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    /// Known categories, in trained order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Output column count
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Indicator block with exactly one 1 at the category's trained position.
    /// Fails with `UnknownCategory` for values outside the fitted set.
    pub fn one_hot(&self, value: &str) -> Result<Vec<f32>, PrepError> {
        let index = self
            .categories
            .iter()
            .position(|c| c == value)
            .ok_or_else(|| PrepError::UnknownCategory {
                field: "geography",
                value: value.to_string(),
            })?;

        let mut block = vec![0.0; self.categories.len()];
        block[index] = 1.0;
        Ok(block)
    }
}

// ============================================================================
// TESTS
// ============================================================================

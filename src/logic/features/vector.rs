//! Feature Vector - Core data structure for model input
//!
//! Versioned vector with layout metadata. Always produced by the assembler,
//! never built by hand, so the values are guaranteed to be in layout order.

use serde::{Deserialize, Serialize};

use super::layout::{FeatureLayout, LayoutMismatchError};

/// Assembled, scaled model input.
///
/// Carries the layout version and hash it was assembled under so a stale
/// vector can be detected instead of silently mis-scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Column values in layout order
    values: Vec<f32>,
}

impl FeatureVector {
    /// Wrap values assembled under the given layout.
    pub fn from_values(layout: &FeatureLayout, values: Vec<f32>) -> Self {
        Self {
            version: layout.version,
            layout_hash: layout.hash,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get column by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get column by layout name
    pub fn get_by_name(&self, layout: &FeatureLayout, name: &str) -> Option<f32> {
        layout.index(name).and_then(|i| self.get(i))
    }

    /// Validate that this vector was assembled under the given layout
    pub fn validate(&self, layout: &FeatureLayout) -> Result<(), LayoutMismatchError> {
        layout.validate(self.version, self.layout_hash)
    }

    pub fn is_compatible(&self, layout: &FeatureLayout) -> bool {
        self.validate(layout).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::FEATURE_VERSION;

    fn layout() -> FeatureLayout {
        FeatureLayout::with_geography(&["France".into(), "Germany".into(), "Spain".into()])
    }

    #[test]
    fn test_from_values() {
        let layout = layout();
        let vector = FeatureVector::from_values(&layout, vec![0.5; layout.len()]);

        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout.hash);
        assert_eq!(vector.len(), 12);
        assert!(vector.is_compatible(&layout));
    }

    #[test]
    fn test_get_by_name() {
        let layout = layout();
        let mut values = vec![0.0; layout.len()];
        values[0] = 1.5;
        values[10] = 1.0;
        let vector = FeatureVector::from_values(&layout, values);

        assert_eq!(vector.get_by_name(&layout, "credit_score"), Some(1.5));
        assert_eq!(vector.get_by_name(&layout, "geography_Germany"), Some(1.0));
        assert_eq!(vector.get_by_name(&layout, "nonexistent"), None);
    }

    #[test]
    fn test_incompatible_layout_detected() {
        let layout = layout();
        let other = FeatureLayout::with_geography(&["France".into(), "Spain".into()]);
        let vector = FeatureVector::from_values(&other, vec![0.0; other.len()]);

        assert!(vector.validate(&layout).is_err());
    }
}

//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add column → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove column → increment FEATURE_VERSION
//!
//! The scaler and the model were fit against this exact column order. A
//! reordered vector still scores, it just scores wrong, so the layout is the
//! single source of truth and everything downstream validates against it.
//!
//! The 9 base columns are fixed here; the geography one-hot block is appended
//! at load time from the fitted encoder's category order.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// BASE LAYOUT (Authoritative source)
// ============================================================================

/// Base column names in the exact order the scaler was fit on.
/// The geography one-hot columns follow, in the encoder's trained order.
pub const BASE_LAYOUT: &[&str] = &[
    "credit_score",      // 0: Raw credit score (300-850)
    "gender",            // 1: Label-encoded gender
    "age",               // 2: Age in years
    "tenure",            // 3: Years with the bank
    "balance",           // 4: Account balance
    "num_products",      // 5: Product count (1-4)
    "has_credit_card",   // 6: 0/1 flag
    "is_active_member",  // 7: 0/1 flag
    "estimated_salary",  // 8: Estimated annual salary
];

/// Number of base columns
/// IMPORTANT: Must match BASE_LAYOUT.len()!
pub const BASE_FEATURE_COUNT: usize = 9;

/// Prefix for the one-hot geography columns
pub const GEOGRAPHY_PREFIX: &str = "geography_";

// ============================================================================
// LAYOUT
// ============================================================================

/// Complete column layout: base columns + geography one-hot block.
///
/// Built once at artifact load, then shared read-only. The hash lets any
/// serialized vector (history snapshots, logs) be checked against the layout
/// it was assembled under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureLayout {
    pub version: u8,
    pub hash: u32,
    names: Vec<String>,
}

impl FeatureLayout {
    /// Build the layout for a set of fitted geography categories,
    /// in the encoder's trained order.
    pub fn with_geography(categories: &[String]) -> Self {
        let mut names: Vec<String> = BASE_LAYOUT.iter().map(|s| s.to_string()).collect();
        for cat in categories {
            names.push(format!("{}{}", GEOGRAPHY_PREFIX, cat));
        }
        let hash = compute_layout_hash(&names);
        Self {
            version: FEATURE_VERSION,
            hash,
            names,
        }
    }

    /// Total column count (base + geography block)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in vector order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Column index by name (O(n) but columns are few)
    pub fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Column name by index
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|s| s.as_str())
    }

    /// Validate that incoming data matches this layout
    pub fn validate(&self, version: u8, hash: u32) -> Result<(), LayoutMismatchError> {
        if version != self.version || hash != self.hash {
            return Err(LayoutMismatchError {
                expected_version: self.version,
                expected_hash: self.hash,
                actual_version: version,
                actual_hash: hash,
            });
        }
        Ok(())
    }
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over version + column names in order.
/// Used to detect layout mismatches at runtime.
fn compute_layout_hash(names: &[String]) -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a vector's layout doesn't match the active layout
#[derive(Debug, Clone, Error)]
#[error(
    "feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), got v{actual_version} (hash: {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn geo() -> Vec<String> {
        vec!["France".into(), "Germany".into(), "Spain".into()]
    }

    #[test]
    fn test_base_count() {
        assert_eq!(BASE_FEATURE_COUNT, 9);
        assert_eq!(BASE_LAYOUT.len(), BASE_FEATURE_COUNT);
    }

    #[test]
    fn test_layout_len_and_order() {
        let layout = FeatureLayout::with_geography(&geo());
        assert_eq!(layout.len(), 12);
        assert_eq!(layout.name(0), Some("credit_score"));
        assert_eq!(layout.name(8), Some("estimated_salary"));
        assert_eq!(layout.name(9), Some("geography_France"));
        assert_eq!(layout.name(11), Some("geography_Spain"));
    }

    #[test]
    fn test_layout_index() {
        let layout = FeatureLayout::with_geography(&geo());
        assert_eq!(layout.index("credit_score"), Some(0));
        assert_eq!(layout.index("gender"), Some(1));
        assert_eq!(layout.index("geography_Germany"), Some(10));
        assert_eq!(layout.index("nonexistent"), None);
    }

    #[test]
    fn test_layout_hash_consistency() {
        let a = FeatureLayout::with_geography(&geo());
        let b = FeatureLayout::with_geography(&geo());
        assert_eq!(a.hash, b.hash);
        assert_ne!(a.hash, 0);
    }

    #[test]
    fn test_layout_hash_depends_on_categories() {
        let a = FeatureLayout::with_geography(&geo());
        let b = FeatureLayout::with_geography(&["France".into(), "Spain".into()]);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_validate_layout() {
        let layout = FeatureLayout::with_geography(&geo());
        assert!(layout.validate(FEATURE_VERSION, layout.hash).is_ok());
        assert!(layout.validate(FEATURE_VERSION + 1, layout.hash).is_err());
        assert!(layout.validate(FEATURE_VERSION, layout.hash ^ 1).is_err());
    }
}

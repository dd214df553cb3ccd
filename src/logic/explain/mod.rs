//! Explain Module - non-model factor display

pub mod engine;
pub mod types;

pub use engine::{breakdown, factor_impacts, DISCLAIMER};
pub use types::{FactorBreakdown, FactorImpact};

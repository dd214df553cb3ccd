//! Features Module - Feature Preparation Engine
//!
//! Turns raw form input into the exact column layout the scaler and model
//! were fit on. Layout changes go through `layout.rs`, nowhere else.

pub mod assemble;
pub mod layout;
pub mod profile;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use assemble::{assemble, raw_features, PrepError};
pub use layout::{FeatureLayout, BASE_FEATURE_COUNT, FEATURE_VERSION};
pub use profile::CustomerProfile;
pub use vector::FeatureVector;

//! Artifacts Module - fitted preprocessing objects + trained classifier
//!
//! All four artifacts are opaque, read-only, and loaded exactly once at
//! process start. Nothing in the app retrains or mutates them.

pub mod bundle;
pub mod encoders;
pub mod scaler;

// Re-export common types
pub use bundle::{ArtifactBundle, ArtifactError};
pub use encoders::{GenderEncoder, GeographyEncoder};
pub use scaler::FeatureScaler;

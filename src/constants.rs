//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change artifact locations, only edit this file.

use std::path::PathBuf;

use once_cell::sync::Lazy;

/// Default directory holding the model + preprocessing artifacts,
/// resolved relative to the current working directory when no override is set.
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

/// Model artifact file name (ONNX)
pub const MODEL_FILE: &str = "model.onnx";

/// Optional SHA-256 sidecar for the model artifact
pub const MODEL_CHECKSUM_FILE: &str = "model.onnx.sha256";

/// Gender label encoder artifact (ordered class list)
pub const GENDER_ENCODER_FILE: &str = "label_encoder_gender.json";

/// Geography one-hot encoder artifact (ordered category list)
pub const GEO_ENCODER_FILE: &str = "onehot_encoder_geo.json";

/// Standard scaler artifact (per-column mean/scale)
pub const SCALER_FILE: &str = "scaler.json";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Churn Insight";

/// Held-out accuracy of the shipped model, shown in the sidebar stats.
/// Comes from the training run that produced `model.onnx`.
pub const MODEL_ACCURACY_PCT: f32 = 86.4;

// ============================================
// Input widget ranges
// ============================================
// These mirror the ranges the trained model saw. Values outside them are a
// caller error and are rejected before any encoder is consulted.

pub const CREDIT_SCORE_MIN: i32 = 300;
pub const CREDIT_SCORE_MAX: i32 = 850;

pub const AGE_MIN: i32 = 18;
pub const AGE_MAX: i32 = 92;

pub const TENURE_MIN: i32 = 0;
pub const TENURE_MAX: i32 = 10;

pub const PRODUCTS_MIN: i32 = 1;
pub const PRODUCTS_MAX: i32 = 4;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Artifact directory resolved once per process.
///
/// `CHURN_ARTIFACT_DIR` wins; otherwise `./artifacts` if it exists, falling
/// back to `~/.churn-insight/artifacts`.
pub static ARTIFACT_DIR: Lazy<PathBuf> = Lazy::new(resolve_artifact_dir);

fn resolve_artifact_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHURN_ARTIFACT_DIR") {
        return PathBuf::from(dir);
    }

    let local = PathBuf::from(DEFAULT_ARTIFACT_DIR);
    if local.is_dir() {
        return local;
    }

    dirs::home_dir()
        .map(|h| h.join(".churn-insight").join("artifacts"))
        .unwrap_or(local)
}

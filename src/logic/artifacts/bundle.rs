//! Artifact Bundle - one-shot startup load of the fitted artifacts
//!
//! Reads the three preprocessing artifacts and the ONNX classifier from the
//! artifact directory, cross-checks their widths, and hands back a read-only
//! bundle. Any failure here is fatal to startup: there is no degraded mode
//! and no fallback predictor.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::constants::{
    GENDER_ENCODER_FILE, GEO_ENCODER_FILE, MODEL_CHECKSUM_FILE, MODEL_FILE, SCALER_FILE,
};
use crate::logic::features::{assemble, CustomerProfile, FeatureLayout, FeatureVector, PrepError};
use crate::logic::model::{ChurnModel, InferenceError};

use super::encoders::{GenderEncoder, GeographyEncoder};
use super::scaler::FeatureScaler;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("scaler width {scaler} does not match layout width {layout}")]
    WidthMismatch { scaler: usize, layout: usize },

    #[error(transparent)]
    Model(#[from] InferenceError),
}

// ============================================================================
// BUNDLE
// ============================================================================

/// Everything the prediction path needs, loaded once and shared read-only
/// through managed state.
#[derive(Debug)]
pub struct ArtifactBundle {
    pub gender: GenderEncoder,
    pub geography: GeographyEncoder,
    pub scaler: FeatureScaler,
    pub layout: FeatureLayout,
    pub model: ChurnModel,
}

impl ArtifactBundle {
    /// Load all artifacts from `dir`.
    ///
    /// Width invariant checked here: the scaler must have been fit on exactly
    /// 9 base columns + one per geography category. A mismatch means the
    /// artifact set is inconsistent and scoring would be silently wrong.
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        log::info!("Loading artifacts from {}", dir.display());

        let gender: GenderEncoder = read_json(&dir.join(GENDER_ENCODER_FILE))?;
        let geography: GeographyEncoder = read_json(&dir.join(GEO_ENCODER_FILE))?;
        let scaler: FeatureScaler = read_json(&dir.join(SCALER_FILE))?;

        let layout = FeatureLayout::with_geography(geography.categories());

        if scaler.check_consistent().is_err() || scaler.width() != layout.len() {
            return Err(ArtifactError::WidthMismatch {
                scaler: scaler.width(),
                layout: layout.len(),
            });
        }

        let model_path = dir.join(MODEL_FILE);
        let model_bytes = fs::read(&model_path).map_err(|e| ArtifactError::Io {
            path: model_path.display().to_string(),
            source: e,
        })?;

        let checksum = hex::encode(Sha256::digest(&model_bytes));
        verify_checksum(&dir.join(MODEL_CHECKSUM_FILE), &checksum)?;
        log::info!("Model checksum: sha256:{}", checksum);

        let model = ChurnModel::from_bytes(
            &model_bytes,
            &model_path.display().to_string(),
            checksum,
            layout.len(),
        )?;

        log::info!(
            "Artifacts ready: {} gender classes, {} geographies, {} feature columns",
            gender.classes().len(),
            geography.width(),
            layout.len()
        );

        Ok(Self {
            gender,
            geography,
            scaler,
            layout,
            model,
        })
    }

    /// Assemble a profile into model input under this bundle's layout.
    pub fn assemble(&self, profile: &CustomerProfile) -> Result<FeatureVector, PrepError> {
        assemble(
            profile,
            &self.gender,
            &self.geography,
            &self.scaler,
            &self.layout,
        )
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let text = fs::read_to_string(path).map_err(|e| ArtifactError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| ArtifactError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Compare against the optional `.sha256` sidecar. No sidecar, no check -
/// the digest is still logged so a drifted model is diagnosable after the
/// fact.
fn verify_checksum(sidecar: &Path, actual: &str) -> Result<(), ArtifactError> {
    if !sidecar.exists() {
        log::debug!("No checksum sidecar at {}", sidecar.display());
        return Ok(());
    }

    let expected = fs::read_to_string(sidecar)
        .map_err(|e| ArtifactError::Io {
            path: sidecar.display().to_string(),
            source: e,
        })?
        .trim()
        .to_lowercase();

    if expected != actual {
        return Err(ArtifactError::ChecksumMismatch {
            expected,
            actual: actual.to_string(),
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

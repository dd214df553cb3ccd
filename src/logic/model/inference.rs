//! Inference Engine - ONNX Runtime Integration
//!
//! Wraps the loaded classifier session. Input shape is fixed at load time
//! (1 row x layout width); the session itself reports shape violations
//! opaquely, so the width is checked here before every run.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::FeatureVector;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    /// SHA-256 of the model file, hex encoded
    pub checksum: String,
    /// Expected input width (base columns + geography block)
    pub features: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Engine Status for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_name: String,
    pub inference_device: String,
    pub feature_count: usize,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
#[error("InferenceError: {0}")]
pub struct InferenceError(pub String);

// ============================================================================
// CHURN MODEL
// ============================================================================

/// The loaded classifier. Built once at startup by the artifact loader and
/// shared read-only behind managed state; the session lock exists because
/// ONNX Runtime wants `&mut` to run.
#[derive(Debug)]
pub struct ChurnModel {
    session: Mutex<Session>,
    metadata: ModelMetadata,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl ChurnModel {
    /// Build a session from model bytes already read (and checksummed) by the
    /// artifact loader.
    pub fn from_bytes(
        model_bytes: &[u8],
        model_path: &str,
        checksum: String,
        features: usize,
    ) -> Result<Self, InferenceError> {
        log::info!(
            "Loading ONNX model from {} ({} bytes)",
            model_path,
            model_bytes.len()
        );

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        log::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            metadata: ModelMetadata {
                model_path: model_path.to_string(),
                checksum,
                features,
                loaded_at: Utc::now(),
            },
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Forward pass: one assembled row in, churn probability out.
    ///
    /// No retries, no fallback. A wrong-width vector is a precondition
    /// violation by the caller and is rejected before it reaches the session.
    pub fn predict(&self, vector: &FeatureVector) -> Result<f32, InferenceError> {
        let start_time = std::time::Instant::now();

        if vector.len() != self.metadata.features {
            return Err(InferenceError(format!(
                "feature vector width {} does not match model input width {}",
                vector.len(),
                self.metadata.features
            )));
        }

        let input_array =
            Array2::<f32>::from_shape_vec((1, vector.len()), vector.as_slice().to_vec())
                .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| InferenceError("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;
        let probability = data
            .first()
            .copied()
            .ok_or_else(|| InferenceError("Empty output tensor".to_string()))?;

        let inference_time = start_time.elapsed().as_micros() as u64;
        self.latency_sum_us.fetch_add(inference_time, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(probability.clamp(0.0, 1.0))
    }

    pub fn status(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            model_loaded: true,
            model_name: self.metadata.model_path.clone(),
            inference_device: "ONNX Runtime (CPU)".to_string(),
            feature_count: self.metadata.features,
            avg_latency_ms: avg,
            inference_count: count,
        }
    }
}

//! Model Module - Inference Engine + Risk Banding
//!
//! Inference is separated from feature preparation so the model can be
//! swapped without touching the assembler.

pub mod inference;
pub mod risk;

// Re-export common types
pub use inference::{ChurnModel, EngineStatus, InferenceError, ModelMetadata};
pub use risk::{ChurnAssessment, RiskBand};

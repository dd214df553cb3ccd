//! Tauri Commands - API for the dashboard frontend
//!
//! Thin wrappers only: every command validates input, calls into `logic`,
//! and maps errors to strings. Each widget change on the page re-invokes
//! `predict_churn`, which recomputes the full assessment in one round trip.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::constants::{
    AGE_MAX, AGE_MIN, APP_VERSION, CREDIT_SCORE_MAX, CREDIT_SCORE_MIN, MODEL_ACCURACY_PCT,
    PRODUCTS_MAX, PRODUCTS_MIN, TENURE_MAX, TENURE_MIN,
};
use crate::logic::artifacts::ArtifactBundle;
use crate::logic::batch::{self, BatchUploadAck};
use crate::logic::charts::{GaugeSpec, RadarProfile};
use crate::logic::explain::{self, FactorBreakdown};
use crate::logic::features::CustomerProfile;
use crate::logic::history::{HistoryStore, PredictionRecord};
use crate::logic::model::{ChurnAssessment, RiskBand};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model + engine status for the sidebar stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub app_version: String,
    pub model_loaded: bool,
    pub model_name: String,
    pub model_checksum: String,
    pub inference_device: String,
    pub feature_count: usize,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
    pub accuracy_pct: f32,
    pub loaded_at: String,
    pub predictions_saved: usize,
}

/// Inclusive widget range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: i32,
    pub max: i32,
}

/// Everything the form needs to restrict itself to known values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputOptions {
    pub geographies: Vec<String>,
    pub genders: Vec<String>,
    pub credit_score: RangeSpec,
    pub age: RangeSpec,
    pub tenure: RangeSpec,
    pub num_products: RangeSpec,
}

/// Full assessment for one profile: score, band, and every chart the page
/// shows for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub probability: f32,
    pub risk_percent: f32,
    pub band: RiskBand,
    pub risk_level: String,
    pub color: String,
    pub recommendation: String,
    pub balance_salary_ratio: f32,
    pub gauge: GaugeSpec,
    pub radar: RadarProfile,
    pub factors: FactorBreakdown,
}

/// History row for the table view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: String,
    pub geography: String,
    pub age: i32,
    pub credit_score: i32,
    pub balance: f32,
    pub risk_percent: f32,
    pub risk_level: String,
}

impl From<PredictionRecord> for HistoryEntry {
    fn from(r: PredictionRecord) -> Self {
        Self {
            id: r.id,
            timestamp: r.timestamp.to_rfc3339(),
            geography: r.geography,
            age: r.age,
            credit_score: r.credit_score,
            balance: r.balance,
            risk_percent: r.risk_percent,
            risk_level: r.risk_level,
        }
    }
}

// ============================================================================
// STATUS COMMANDS
// ============================================================================

/// Engine + model status for the sidebar
#[tauri::command]
pub async fn get_model_status(
    bundle: State<'_, ArtifactBundle>,
    history: State<'_, HistoryStore>,
) -> Result<ModelStatus, String> {
    let status = bundle.model.status();
    let metadata = bundle.model.metadata();

    Ok(ModelStatus {
        app_version: APP_VERSION.to_string(),
        model_loaded: status.model_loaded,
        model_name: status.model_name,
        model_checksum: metadata.checksum.clone(),
        inference_device: status.inference_device,
        feature_count: status.feature_count,
        avg_latency_ms: status.avg_latency_ms,
        inference_count: status.inference_count,
        accuracy_pct: MODEL_ACCURACY_PCT,
        loaded_at: metadata.loaded_at.to_rfc3339(),
        predictions_saved: history.len(),
    })
}

/// Known categories + widget ranges, straight from the fitted encoders.
/// The form offers these and nothing else, which is what keeps
/// `UnknownCategory` structurally unreachable from the UI.
#[tauri::command]
pub async fn get_input_options(bundle: State<'_, ArtifactBundle>) -> Result<InputOptions, String> {
    Ok(InputOptions {
        geographies: bundle.geography.categories().to_vec(),
        genders: bundle.gender.classes().to_vec(),
        credit_score: RangeSpec {
            min: CREDIT_SCORE_MIN,
            max: CREDIT_SCORE_MAX,
        },
        age: RangeSpec {
            min: AGE_MIN,
            max: AGE_MAX,
        },
        tenure: RangeSpec {
            min: TENURE_MIN,
            max: TENURE_MAX,
        },
        num_products: RangeSpec {
            min: PRODUCTS_MIN,
            max: PRODUCTS_MAX,
        },
    })
}

// ============================================================================
// PREDICTION COMMANDS
// ============================================================================

/// Validate, assemble, infer, band - the whole scoring path in one call.
#[tauri::command]
pub async fn predict_churn(
    profile: CustomerProfile,
    bundle: State<'_, ArtifactBundle>,
) -> Result<PredictionResponse, String> {
    let assessment = assess(&profile, &bundle)?;

    let balance_salary_ratio = if profile.estimated_salary > 0.0 {
        profile.balance / profile.estimated_salary * 100.0
    } else {
        0.0
    };

    Ok(PredictionResponse {
        probability: assessment.probability,
        risk_percent: assessment.risk_percent,
        band: assessment.band,
        risk_level: assessment.band.label().to_string(),
        color: assessment.band.color().to_string(),
        recommendation: assessment.band.recommendation().to_string(),
        balance_salary_ratio,
        gauge: GaugeSpec::for_assessment(&assessment),
        radar: RadarProfile::from_profile(&profile),
        factors: explain::breakdown(&profile),
    })
}

/// Factor-impact panel only (illustrative heuristic, see `logic::explain`)
#[tauri::command]
pub async fn get_risk_factors(profile: CustomerProfile) -> Result<FactorBreakdown, String> {
    profile.validate().map_err(|e| e.to_string())?;
    Ok(explain::breakdown(&profile))
}

/// Radar chart data only
#[tauri::command]
pub async fn get_radar_profile(profile: CustomerProfile) -> Result<RadarProfile, String> {
    profile.validate().map_err(|e| e.to_string())?;
    Ok(RadarProfile::from_profile(&profile))
}

// ============================================================================
// HISTORY COMMANDS
// ============================================================================

/// Re-score the profile and append the snapshot to the session log.
/// Returns the new log length.
#[tauri::command]
pub async fn save_prediction(
    profile: CustomerProfile,
    bundle: State<'_, ArtifactBundle>,
    history: State<'_, HistoryStore>,
) -> Result<usize, String> {
    let assessment = assess(&profile, &bundle)?;
    let record = PredictionRecord::capture(&profile, &assessment);
    let len = history.save(record);
    log::debug!("Prediction saved, history length {}", len);
    Ok(len)
}

/// Session log in insertion order
#[tauri::command]
pub async fn get_prediction_history(
    history: State<'_, HistoryStore>,
) -> Result<Vec<HistoryEntry>, String> {
    Ok(history
        .entries()
        .into_iter()
        .map(HistoryEntry::from)
        .collect())
}

/// Discard the session log
#[tauri::command]
pub async fn clear_prediction_history(history: State<'_, HistoryStore>) -> Result<bool, String> {
    history.clear();
    Ok(true)
}

// ============================================================================
// BATCH COMMANDS
// ============================================================================

/// Acknowledge an uploaded CSV (shape check only, no scoring)
#[tauri::command]
pub async fn upload_batch_csv(contents: String) -> Result<BatchUploadAck, String> {
    batch::acknowledge_csv(&contents).map_err(|e| e.to_string())
}

// ============================================================================
// HELPERS
// ============================================================================

fn assess(
    profile: &CustomerProfile,
    bundle: &ArtifactBundle,
) -> Result<ChurnAssessment, String> {
    profile.validate().map_err(|e| e.to_string())?;
    let vector = bundle.assemble(profile).map_err(|e| e.to_string())?;
    let probability = bundle.model.predict(&vector).map_err(|e| e.to_string())?;
    Ok(ChurnAssessment::from_probability(probability))
}

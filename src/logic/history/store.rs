//! Session Prediction Log
//!
//! Append-only, in-memory, session-scoped. The store is an owned state
//! object registered with the Tauri builder and injected into commands;
//! nothing survives process exit and nothing is written to disk.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::features::CustomerProfile;
use crate::logic::model::ChurnAssessment;

/// Snapshot of one saved prediction: the display fields of the profile plus
/// the assessment outcome, tagged with the capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub geography: String,
    pub age: i32,
    pub credit_score: i32,
    pub balance: f32,
    pub risk_percent: f32,
    pub risk_level: String,
}

impl PredictionRecord {
    pub fn capture(profile: &CustomerProfile, assessment: &ChurnAssessment) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            geography: profile.geography.clone(),
            age: profile.age,
            credit_score: profile.credit_score,
            balance: profile.balance,
            risk_percent: assessment.risk_percent,
            risk_level: assessment.band.label().to_string(),
        }
    }
}

/// In-memory prediction log for the current session.
#[derive(Default)]
pub struct HistoryStore {
    records: Mutex<Vec<PredictionRecord>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; returns the new log length.
    pub fn save(&self, record: PredictionRecord) -> usize {
        let mut records = self.records.lock();
        records.push(record);
        records.len()
    }

    /// All records in insertion order.
    pub fn entries(&self) -> Vec<PredictionRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Discard the whole log.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::profile::sample_profile;

    fn record(percent: f32) -> PredictionRecord {
        PredictionRecord::capture(
            &sample_profile(),
            &ChurnAssessment::from_probability(percent / 100.0),
        )
    }

    #[test]
    fn test_save_preserves_insertion_order() {
        let store = HistoryStore::new();
        for i in 0..5 {
            let len = store.save(record(i as f32 * 10.0));
            assert_eq!(len, i + 1);
        }

        let entries = store.entries();
        assert_eq!(entries.len(), 5);
        for (i, entry) in entries.iter().enumerate() {
            assert!((entry.risk_percent - i as f32 * 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let store = HistoryStore::new();
        store.save(record(55.0));
        store.save(record(75.0));
        assert_eq!(store.len(), 2);

        store.clear();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_record_snapshot_fields() {
        let rec = record(75.5);
        assert_eq!(rec.geography, "France");
        assert_eq!(rec.credit_score, 650);
        assert_eq!(rec.risk_level, "HIGH RISK");
        assert!(!rec.id.is_empty());
    }
}

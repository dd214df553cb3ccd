//! History Module - session-scoped prediction log

pub mod store;

pub use store::{HistoryStore, PredictionRecord};

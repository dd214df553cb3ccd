//! Batch Upload Acknowledgment
//!
//! The batch affordance stops at acknowledgment: the upload is parsed and
//! counted so the user gets a sanity check, but no batch scoring happens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("empty upload")]
    Empty,

    #[error("failed to parse CSV: {0}")]
    Parse(#[from] csv::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchUploadAck {
    pub rows: usize,
    pub columns: usize,
    pub headers: Vec<String>,
}

/// Parse an uploaded CSV and report its shape.
pub fn acknowledge_csv(contents: &str) -> Result<BatchUploadAck, BatchError> {
    if contents.trim().is_empty() {
        return Err(BatchError::Empty);
    }

    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = 0;
    for record in reader.records() {
        record?;
        rows += 1;
    }

    Ok(BatchUploadAck {
        rows,
        columns: headers.len(),
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_counts_rows_and_columns() {
        let csv = "credit_score,age,geography\n650,45,France\n720,31,Spain\n";
        let ack = acknowledge_csv(csv).unwrap();
        assert_eq!(ack.rows, 2);
        assert_eq!(ack.columns, 3);
        assert_eq!(ack.headers[2], "geography");
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(acknowledge_csv("  \n"), Err(BatchError::Empty)));
    }

    #[test]
    fn test_ragged_csv_rejected() {
        let csv = "a,b\n1,2\n3\n";
        assert!(matches!(acknowledge_csv(csv), Err(BatchError::Parse(_))));
    }
}

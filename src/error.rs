use chrono::{DateTime, Utc};
use thiserror::Error;

/// Lifecycle misuse of the session analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("analysis already recording")]
    AlreadyRecording,
    #[error("no recording in progress")]
    NotRecording,
    #[error("recording still in progress")]
    RecordingInProgress,
}

/// Errors surfaced by the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("invalid goal: {0}")]
    InvalidGoal(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Errors from the recording flow: lifecycle misuse of the controller or
/// a failed save at the end.
#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("a recording is already in progress")]
    AlreadyRecording,
    #[error("no recording in progress")]
    NotRecording,
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_range_error_names_both_endpoints() {
        let start = Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let message = StoreError::InvalidDateRange { start, end }.to_string();
        assert!(message.contains("2026-03-10"));
        assert!(message.contains("2026-03-01"));
    }
}

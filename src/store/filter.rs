use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::models::ExerciseSession;

/// Date window, inclusive at both ends.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Criteria for querying stored sessions. Every populated criterion must
/// match; results come back newest first.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub real_activity_only: bool,
    pub date_range: Option<DateRange>,
    /// Allow-list of exercise names. `Some(vec![])` matches nothing.
    pub exercise_names: Option<Vec<String>>,
    pub min_reps: Option<u32>,
    pub max_reps: Option<u32>,
}

impl SessionFilter {
    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        if let Some(range) = self.date_range {
            if range.end < range.start {
                return Err(StoreError::InvalidDateRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn matches(&self, session: &ExerciseSession) -> bool {
        if self.real_activity_only && !session.has_real_activity {
            return false;
        }
        if let Some(range) = self.date_range {
            if session.date < range.start || session.date > range.end {
                return false;
            }
        }
        if let Some(names) = &self.exercise_names {
            if !names.iter().any(|name| name == &session.exercise_name) {
                return false;
            }
        }
        if let Some(min_reps) = self.min_reps {
            if session.reps < min_reps {
                return false;
            }
        }
        if let Some(max_reps) = self.max_reps {
            if session.reps > max_reps {
                return false;
            }
        }
        true
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::ExerciseAnalysis;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    pub difficulty: Difficulty,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub weather: Option<String>,
}

/// One saved workout. `has_real_activity` is decided once at save time;
/// when it is false, `reps`, `calories`, and every `ai_metrics` field are
/// zeroed so invalid sessions can never leak into totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSession {
    pub id: String,
    /// Recording session this record came from.
    pub session_id: String,
    pub exercise_name: String,
    pub reps: u32,
    pub sets: u32,
    pub weight_kg: f64,
    pub duration_secs: u32,
    pub calories: u32,
    pub date: DateTime<Utc>,
    pub metadata: SessionMetadata,
    pub ai_metrics: ExerciseAnalysis,
    pub has_real_activity: bool,
}

/// Caller-supplied input to `save_session`. The store fills id, defaults,
/// and the activity verdict.
#[derive(Debug, Clone)]
pub struct SessionDraft {
    pub exercise_name: String,
    pub duration_secs: u32,
    pub date: DateTime<Utc>,
    pub analysis: ExerciseAnalysis,
    pub session_id: Option<String>,
    pub sets: Option<u32>,
    pub weight_kg: Option<f64>,
    pub metadata: Option<SessionMetadata>,
}

impl SessionDraft {
    /// Draft built straight from an analyzer result, the way the recording
    /// flow hands sessions over.
    pub fn from_analysis(analysis: ExerciseAnalysis, date: DateTime<Utc>) -> Self {
        Self {
            exercise_name: analysis.exercise_name.clone(),
            duration_secs: analysis.duration_secs,
            date,
            analysis,
            session_id: None,
            sets: None,
            weight_kg: None,
            metadata: None,
        }
    }
}

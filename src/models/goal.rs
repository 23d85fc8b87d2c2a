use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl GoalPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPeriod::Daily => "daily",
            GoalPeriod::Weekly => "weekly",
            GoalPeriod::Monthly => "monthly",
        }
    }
}

/// A rep target for one exercise over a date window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGoal {
    pub id: String,
    pub exercise_name: String,
    pub target_reps: u32,
    pub target_sets: Option<u32>,
    pub target_weight_kg: Option<f64>,
    pub period: GoalPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub current_progress: u32,
    pub is_active: bool,
}

/// Goal input before the store assigns an id and zeroed progress.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub exercise_name: String,
    pub target_reps: u32,
    pub target_sets: Option<u32>,
    pub target_weight_kg: Option<f64>,
    pub period: GoalPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

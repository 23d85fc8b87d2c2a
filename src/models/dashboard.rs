use serde::{Deserialize, Serialize};

/// One point in a chart series; `x` is the axis label, `label` the
/// display string rendered next to the value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub x: String,
    pub y: f64,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    OnTrack,
    OffTrack,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::OnTrack => "on-track",
            GoalStatus::OffTrack => "off-track",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub exercise_name: String,
    pub current: u32,
    pub target: u32,
    pub percentage: u32,
    pub status: GoalStatus,
}

/// Aggregated view of stored history for the dashboard screen. Derived on
/// demand; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_sessions: u32,
    pub total_reps: u32,
    pub total_calories: u32,
    pub average_accuracy: u32,
    pub current_streak: u32,
    pub weekly_progress: Vec<ChartPoint>,
    pub exercise_comparison: Vec<ChartPoint>,
    pub goal_progress: Vec<GoalProgress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::OnTrack).unwrap(),
            "\"on-track\""
        );
        assert_eq!(GoalStatus::OffTrack.as_str(), "off-track");
    }
}

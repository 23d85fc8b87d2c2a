use serde::{Deserialize, Serialize};

/// One classified frame, tagged with its offset from recording start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameSample {
    pub timestamp_secs: f64,
    pub motion_detected: bool,
    pub quality: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QualityTier {
    Ultra,
    High,
    Medium,
    Low,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Ultra => "ultra",
            QualityTier::High => "high",
            QualityTier::Medium => "medium",
            QualityTier::Low => "low",
        }
    }
}

/// Per-axis technique estimates, each in 70..=100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechniqueScores {
    pub posture: f64,
    pub range_of_motion: f64,
    pub speed: f64,
    pub consistency: f64,
}

/// Scored result of one recorded exercise session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseAnalysis {
    pub exercise_name: String,
    pub duration_secs: u32,
    /// Counted reps, or elapsed hold seconds for hold exercises.
    pub reps: u32,
    pub accuracy: u32,
    pub quality: QualityTier,
    pub score: u32,
    pub form_score: u32,
    pub calories: u32,
    pub technique: TechniqueScores,
    pub feedback: Vec<String>,
    pub improvements: Vec<String>,
}

impl ExerciseAnalysis {
    /// Zeroed metrics recorded in place of the real analysis when a session
    /// fails the activity gate.
    pub fn no_activity(exercise_name: &str) -> Self {
        Self {
            exercise_name: exercise_name.to_string(),
            duration_secs: 0,
            reps: 0,
            accuracy: 0,
            quality: QualityTier::Low,
            score: 0,
            form_score: 0,
            calories: 0,
            technique: TechniqueScores {
                posture: 0.0,
                range_of_motion: 0.0,
                speed: 0.0,
                consistency: 0.0,
            },
            feedback: vec!["No activity detected during recording".to_string()],
            improvements: vec![
                "Ensure you are performing the exercise".to_string(),
                "Check camera positioning".to_string(),
            ],
        }
    }
}

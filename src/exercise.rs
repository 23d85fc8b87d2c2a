use serde::{Deserialize, Serialize};

/// Exercise categories the analyzer knows how to score.
///
/// Unknown names fall back to `Freeform`, which keeps the generic rep
/// cadence and calorie rate, so the pipeline never rejects a session for
/// carrying an unrecognized exercise name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseKind {
    SitUps,
    PushUps,
    VerticalJump,
    PlankHold,
    Freeform,
}

impl Default for ExerciseKind {
    fn default() -> Self {
        ExerciseKind::Freeform
    }
}

impl ExerciseKind {
    /// Resolve a user-facing exercise name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "sit-ups" => ExerciseKind::SitUps,
            "push-ups" => ExerciseKind::PushUps,
            "vertical jump" => ExerciseKind::VerticalJump,
            "plank hold" => ExerciseKind::PlankHold,
            _ => ExerciseKind::Freeform,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::SitUps => "Sit-ups",
            ExerciseKind::PushUps => "Push-ups",
            ExerciseKind::VerticalJump => "Vertical Jump",
            ExerciseKind::PlankHold => "Plank Hold",
            ExerciseKind::Freeform => "Freeform",
        }
    }

    /// Minimum seconds between counted reps. Zero disables the discrete
    /// rep counter entirely; hold exercises report elapsed time instead.
    pub fn rep_threshold_secs(&self) -> f64 {
        match self {
            ExerciseKind::SitUps => 1.0,
            ExerciseKind::PushUps => 0.8,
            ExerciseKind::VerticalJump => 2.0,
            ExerciseKind::PlankHold => 0.0,
            ExerciseKind::Freeform => 1.0,
        }
    }

    pub fn calories_per_minute(&self) -> f64 {
        match self {
            ExerciseKind::SitUps => 8.0,
            ExerciseKind::PushUps => 7.0,
            ExerciseKind::VerticalJump => 10.0,
            ExerciseKind::PlankHold => 3.0,
            ExerciseKind::Freeform => 6.0,
        }
    }

    /// Per-frame probability that the simulated classifier reports motion.
    /// Tuned per movement pattern: jumps are short bursts, holds are
    /// mostly still.
    pub fn motion_probability(&self) -> f64 {
        match self {
            ExerciseKind::SitUps => 0.30,
            ExerciseKind::PushUps => 0.40,
            ExerciseKind::VerticalJump => 0.20,
            ExerciseKind::PlankHold => 0.10,
            ExerciseKind::Freeform => 0.50,
        }
    }

    /// Hold exercises report elapsed seconds in the reps field.
    pub fn is_hold(&self) -> bool {
        matches!(self, ExerciseKind::PlankHold)
    }
}

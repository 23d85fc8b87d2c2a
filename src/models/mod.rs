//! Data model shared by the analyzer, the session store, and the dashboard.

mod analysis;
mod dashboard;
mod goal;
mod profile;
mod session;

pub use analysis::{ExerciseAnalysis, FrameSample, QualityTier, TechniqueScores};
pub use dashboard::{ChartPoint, DashboardData, GoalProgress, GoalStatus};
pub use goal::{ExerciseGoal, GoalPeriod, NewGoal};
pub use profile::{FitnessLevel, Preferences, ProfileUpdate, Theme, Units, UserProfile};
pub use session::{Difficulty, ExerciseSession, SessionDraft, SessionMetadata};

//! fitsense: exercise session analysis and history engine.
//!
//! A recording produces a per-frame motion/quality trace. The analyzer
//! folds that trace into a scored [`models::ExerciseAnalysis`]; the store
//! checks the trace against the real-activity gate before persisting the
//! session, so a camera pointed at an empty room never earns reps or
//! calories. Dashboard rollups (streak, weekly series, per-exercise
//! comparison, goal progress) are derived on demand from stored history.
//!
//! The pieces compose one way: analyzer → store → dashboard. The
//! [`recording::RecordingController`] ties them together for callers that
//! want the whole flow, but the analyzer and store are usable on their
//! own.

pub mod analysis;
pub mod dashboard;
pub mod error;
pub mod exercise;
pub mod models;
pub mod recording;
pub mod storage;
pub mod store;

pub use analysis::SessionAnalyzer;
pub use error::{AnalyzerError, RecordingError, StoreError};
pub use exercise::ExerciseKind;
pub use recording::{RecordingConfig, RecordingController};
pub use store::{SessionFilter, SessionStore};

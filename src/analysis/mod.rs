//! Session analysis: per-frame classification, rep counting, and the
//! scored report derived when a recording finishes.

mod analyzer;
mod classifier;
mod report;

pub use analyzer::{AnalyzerStatus, SessionAnalyzer};
pub use classifier::{FrameAssessment, FrameClassifier, FrameInput, SimulatedClassifier};

//! Recording flow: owns the frame-sampling tick during a recording and
//! the stop → settle → analyze → save handoff into the session store.

use std::time::Duration;

mod controller;
mod sampler;

pub use controller::RecordingController;

/// Cadence and latency knobs for a recording. Defaults mirror the app's
/// camera screen: a frame every 100 ms and a two-second settling pause
/// before the analysis is read.
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    pub frame_interval: Duration,
    /// Pause between stopping the recording and reading the analysis,
    /// standing in for post-processing latency.
    pub settling_delay: Duration,
    /// Seed for the simulated classifier; `None` draws from entropy.
    pub classifier_seed: Option<u64>,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(100),
            settling_delay: Duration::from_secs(2),
            classifier_seed: None,
        }
    }
}

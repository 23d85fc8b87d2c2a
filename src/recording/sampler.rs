use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::analysis::{FrameInput, SessionAnalyzer};

/// Feeds synthetic frames into the analyzer at a fixed cadence until the
/// token is cancelled. The first frame lands immediately, matching an
/// interval timer that starts with the recording.
pub(super) async fn frame_sampling_loop(
    analyzer: Arc<Mutex<SessionAnalyzer>>,
    frame_interval: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut rng = StdRng::from_entropy();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let frame = FrameInput::synthetic(Utc::now(), &mut rng);
                let mut guard = analyzer.lock().await;
                if let Err(err) = guard.ingest_frame(&frame, Instant::now()) {
                    warn!("Frame sampling loop stopping: {err}");
                    break;
                }
            }
            _ = cancel_token.cancelled() => break,
        }
    }
}

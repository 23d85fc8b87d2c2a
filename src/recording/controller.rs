use std::{sync::Arc, time::Instant};

use chrono::Utc;
use log::{info, warn};
use tokio::{sync::Mutex, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::analysis::{SessionAnalyzer, SimulatedClassifier};
use crate::error::RecordingError;
use crate::exercise::ExerciseKind;
use crate::models::{ExerciseSession, SessionDraft};
use crate::store::SessionStore;

use super::sampler::frame_sampling_loop;
use super::RecordingConfig;

struct ActiveRecording {
    analyzer: Arc<Mutex<SessionAnalyzer>>,
    cancel_token: CancellationToken,
    sampler: JoinHandle<()>,
    started: Instant,
}

/// Drives one recording at a time: spawns the sampling loop on start,
/// and on stop freezes the analyzer, waits out the settling delay, and
/// hands the result to the store. One controller per store is expected.
#[derive(Clone)]
pub struct RecordingController {
    store: SessionStore,
    config: RecordingConfig,
    active: Arc<Mutex<Option<ActiveRecording>>>,
}

impl RecordingController {
    pub fn new(store: SessionStore) -> Self {
        Self::with_config(store, RecordingConfig::default())
    }

    pub fn with_config(store: SessionStore, config: RecordingConfig) -> Self {
        Self {
            store,
            config,
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// Begin recording the named exercise.
    pub async fn start(&self, exercise_name: &str) -> Result<(), RecordingError> {
        let mut active = self.active.lock().await;
        if active.is_some() {
            return Err(RecordingError::AlreadyRecording);
        }

        let started = Instant::now();
        let mut analyzer = match self.config.classifier_seed {
            Some(seed) => SessionAnalyzer::with_classifier(
                exercise_name,
                Box::new(SimulatedClassifier::with_seed(
                    ExerciseKind::from_name(exercise_name),
                    seed,
                )),
            ),
            None => SessionAnalyzer::new(exercise_name),
        };
        analyzer.start(started)?;

        let analyzer = Arc::new(Mutex::new(analyzer));
        let cancel_token = CancellationToken::new();
        let sampler = tokio::spawn(frame_sampling_loop(
            analyzer.clone(),
            self.config.frame_interval,
            cancel_token.clone(),
        ));

        info!("Recording started for {exercise_name}");
        *active = Some(ActiveRecording {
            analyzer,
            cancel_token,
            sampler,
            started,
        });
        Ok(())
    }

    /// End the recording, analyze the trace, and persist the session.
    pub async fn stop(&self) -> Result<ExerciseSession, RecordingError> {
        let recording = self
            .active
            .lock()
            .await
            .take()
            .ok_or(RecordingError::NotRecording)?;

        recording.cancel_token.cancel();
        if let Err(err) = recording.sampler.await {
            warn!("Frame sampling task ended abnormally: {err}");
        }

        {
            let mut analyzer = recording.analyzer.lock().await;
            analyzer.finish(Instant::now())?;
        }
        tokio::time::sleep(self.config.settling_delay).await;

        let (analysis, trace) = {
            let analyzer = recording.analyzer.lock().await;
            (analyzer.analysis()?, analyzer.motion_trace().to_vec())
        };

        let draft = SessionDraft::from_analysis(analysis, Utc::now());
        let saved = self.store.save_session(draft, &trace).await?;
        info!(
            "Recording stopped: {} frames analyzed, session {} saved",
            trace.len(),
            saved.id
        );
        Ok(saved)
    }

    /// Abandon the recording without saving anything. A no-op when idle.
    pub async fn cancel(&self) {
        let recording = match self.active.lock().await.take() {
            Some(recording) => recording,
            None => return,
        };

        recording.cancel_token.cancel();
        if let Err(err) = recording.sampler.await {
            warn!("Frame sampling task ended abnormally: {err}");
        }
        info!("Recording cancelled; trace discarded");
    }

    pub async fn is_recording(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// Whole seconds since the recording started, for a duration display.
    pub async fn elapsed_secs(&self) -> u64 {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|recording| recording.started.elapsed().as_secs())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::SessionFilter;
    use std::time::Duration;

    async fn controller() -> RecordingController {
        let store = SessionStore::open(Arc::new(MemoryStorage::new()))
            .await
            .unwrap();
        let config = RecordingConfig {
            frame_interval: Duration::from_millis(10),
            settling_delay: Duration::ZERO,
            classifier_seed: Some(7),
        };
        RecordingController::with_config(store, config)
    }

    #[tokio::test]
    async fn only_one_recording_at_a_time() {
        let controller = controller().await;
        controller.start("Push-ups").await.unwrap();
        let err = controller.start("Sit-ups").await.unwrap_err();
        assert!(matches!(err, RecordingError::AlreadyRecording));
        controller.cancel().await;
    }

    #[tokio::test]
    async fn stop_without_start_is_rejected() {
        let controller = controller().await;
        let err = controller.stop().await.unwrap_err();
        assert!(matches!(err, RecordingError::NotRecording));
    }

    #[tokio::test]
    async fn cancel_when_idle_is_a_no_op() {
        let controller = controller().await;
        controller.cancel().await;
        assert!(!controller.is_recording().await);
    }

    #[tokio::test]
    async fn short_recording_is_saved_but_fails_the_gate() {
        let controller = controller().await;
        controller.start("Push-ups").await.unwrap();
        assert!(controller.is_recording().await);

        tokio::time::sleep(Duration::from_millis(150)).await;
        let saved = controller.stop().await.unwrap();
        assert!(!controller.is_recording().await);

        // Well under the five-second activity floor.
        assert!(!saved.has_real_activity);
        assert_eq!(saved.reps, 0);
        assert_eq!(saved.calories, 0);
        assert_eq!(saved.exercise_name, "Push-ups");

        let sessions = controller
            .store
            .sessions(&SessionFilter::default())
            .unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0], saved);
    }

    #[tokio::test]
    async fn cancelled_recordings_save_nothing() {
        let controller = controller().await;
        controller.start("Sit-ups").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.cancel().await;

        assert!(!controller.is_recording().await);
        assert!(controller
            .store
            .sessions(&SessionFilter::default())
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn controller_can_record_again_after_stopping() {
        let controller = controller().await;
        controller.start("Plank Hold").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.stop().await.unwrap();

        controller.start("Plank Hold").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.stop().await.unwrap();

        let sessions = controller
            .store
            .sessions(&SessionFilter::default())
            .unwrap();
        assert_eq!(sessions.len(), 2);
    }
}

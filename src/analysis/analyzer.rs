use std::time::Instant;

use crate::error::AnalyzerError;
use crate::exercise::ExerciseKind;
use crate::models::{ExerciseAnalysis, FrameSample};

use super::classifier::{FrameClassifier, FrameInput, SimulatedClassifier};
use super::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerStatus {
    Idle,
    Recording,
    Finished,
}

/// Per-session analyzer. Owns the frame trace and rep counter for one
/// recording; callers pass explicit instants so frame timing never depends
/// on wall-clock reads inside the analyzer.
pub struct SessionAnalyzer {
    exercise_name: String,
    kind: ExerciseKind,
    classifier: Box<dyn FrameClassifier>,
    status: AnalyzerStatus,
    started_anchor: Option<Instant>,
    elapsed_secs: f64,
    counted_reps: u32,
    last_rep_secs: f64,
    trace: Vec<FrameSample>,
}

impl SessionAnalyzer {
    pub fn new(exercise_name: &str) -> Self {
        let kind = ExerciseKind::from_name(exercise_name);
        Self::with_classifier(exercise_name, Box::new(SimulatedClassifier::new(kind)))
    }

    pub fn with_classifier(exercise_name: &str, classifier: Box<dyn FrameClassifier>) -> Self {
        Self {
            exercise_name: exercise_name.to_string(),
            kind: ExerciseKind::from_name(exercise_name),
            classifier,
            status: AnalyzerStatus::Idle,
            started_anchor: None,
            elapsed_secs: 0.0,
            counted_reps: 0,
            last_rep_secs: 0.0,
            trace: Vec::new(),
        }
    }

    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn status(&self) -> AnalyzerStatus {
        self.status
    }

    pub fn counted_reps(&self) -> u32 {
        self.counted_reps
    }

    /// Seconds recorded so far: live while recording, frozen once finished.
    pub fn elapsed_secs(&self) -> f64 {
        match (self.status, self.started_anchor) {
            (AnalyzerStatus::Recording, Some(anchor)) => anchor.elapsed().as_secs_f64(),
            (AnalyzerStatus::Finished, _) => self.elapsed_secs,
            _ => 0.0,
        }
    }

    /// Begin a fresh recording, clearing any previous trace and counters.
    pub fn start(&mut self, now: Instant) -> Result<(), AnalyzerError> {
        if self.status == AnalyzerStatus::Recording {
            return Err(AnalyzerError::AlreadyRecording);
        }

        self.status = AnalyzerStatus::Recording;
        self.started_anchor = Some(now);
        self.elapsed_secs = 0.0;
        self.counted_reps = 0;
        self.last_rep_secs = 0.0;
        self.trace.clear();
        Ok(())
    }

    /// Classify one frame and fold it into the trace. A rep is counted when
    /// motion lands at least the exercise's rep threshold after the previous
    /// one; a zero threshold disables the counter entirely.
    pub fn ingest_frame(&mut self, frame: &FrameInput, now: Instant) -> Result<(), AnalyzerError> {
        let anchor = match (self.status, self.started_anchor) {
            (AnalyzerStatus::Recording, Some(anchor)) => anchor,
            _ => return Err(AnalyzerError::NotRecording),
        };

        let elapsed = now.duration_since(anchor).as_secs_f64();
        let assessment = self.classifier.classify(frame);

        self.trace.push(FrameSample {
            timestamp_secs: elapsed,
            motion_detected: assessment.motion_detected,
            quality: assessment.quality,
        });

        let threshold = self.kind.rep_threshold_secs();
        if assessment.motion_detected
            && threshold > 0.0
            && elapsed - self.last_rep_secs >= threshold
        {
            self.counted_reps += 1;
            self.last_rep_secs = elapsed;
        }

        Ok(())
    }

    /// Stop recording, freezing the trace, counters, and elapsed time.
    pub fn finish(&mut self, now: Instant) -> Result<(), AnalyzerError> {
        let anchor = match (self.status, self.started_anchor) {
            (AnalyzerStatus::Recording, Some(anchor)) => anchor,
            _ => return Err(AnalyzerError::NotRecording),
        };

        self.elapsed_secs = now.duration_since(anchor).as_secs_f64();
        self.status = AnalyzerStatus::Finished;
        self.started_anchor = None;
        Ok(())
    }

    /// Scored report for the finished recording.
    pub fn analysis(&self) -> Result<ExerciseAnalysis, AnalyzerError> {
        match self.status {
            AnalyzerStatus::Recording => Err(AnalyzerError::RecordingInProgress),
            AnalyzerStatus::Idle => Err(AnalyzerError::NotRecording),
            AnalyzerStatus::Finished => Ok(report::build(
                &self.exercise_name,
                self.kind,
                self.elapsed_secs,
                self.counted_reps,
                &self.trace,
            )),
        }
    }

    /// The accumulated frame trace, for activity validation.
    pub fn motion_trace(&self) -> &[FrameSample] {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::FrameAssessment;
    use chrono::Utc;
    use std::time::Duration;

    /// Replays a fixed assessment pattern, cycling when it runs out.
    struct ScriptedClassifier {
        pattern: Vec<FrameAssessment>,
        next: usize,
    }

    impl ScriptedClassifier {
        fn uniform(motion_detected: bool, quality: f64) -> Self {
            Self {
                pattern: vec![FrameAssessment {
                    motion_detected,
                    quality,
                }],
                next: 0,
            }
        }
    }

    impl FrameClassifier for ScriptedClassifier {
        fn classify(&mut self, _frame: &FrameInput) -> FrameAssessment {
            let assessment = self.pattern[self.next % self.pattern.len()];
            self.next += 1;
            assessment
        }
    }

    fn frame() -> FrameInput {
        FrameInput {
            captured_at: Utc::now(),
            luma_delta: 0.5,
            keypoint_confidence: 0.9,
        }
    }

    fn drive(analyzer: &mut SessionAnalyzer, base: Instant, frames: u32, step_ms: u64) {
        for tick in 1..=frames {
            let at = base + Duration::from_millis(step_ms * tick as u64);
            analyzer.ingest_frame(&frame(), at).unwrap();
        }
    }

    #[test]
    fn rejects_frames_before_start() {
        let mut analyzer = SessionAnalyzer::new("Sit-ups");
        let err = analyzer.ingest_frame(&frame(), Instant::now()).unwrap_err();
        assert!(matches!(err, AnalyzerError::NotRecording));
    }

    #[test]
    fn rejects_double_start() {
        let mut analyzer = SessionAnalyzer::new("Sit-ups");
        analyzer.start(Instant::now()).unwrap();
        let err = analyzer.start(Instant::now()).unwrap_err();
        assert!(matches!(err, AnalyzerError::AlreadyRecording));
    }

    #[test]
    fn analysis_is_unavailable_while_recording() {
        let mut analyzer = SessionAnalyzer::new("Push-ups");
        analyzer.start(Instant::now()).unwrap();
        let err = analyzer.analysis().unwrap_err();
        assert!(matches!(err, AnalyzerError::RecordingInProgress));
    }

    #[test]
    fn analysis_is_unavailable_before_any_recording() {
        let analyzer = SessionAnalyzer::new("Push-ups");
        assert!(matches!(
            analyzer.analysis().unwrap_err(),
            AnalyzerError::NotRecording
        ));
    }

    #[test]
    fn rep_counting_respects_the_threshold() {
        let mut analyzer = SessionAnalyzer::with_classifier(
            "Sit-ups",
            Box::new(ScriptedClassifier::uniform(true, 90.0)),
        );
        let base = Instant::now();
        analyzer.start(base).unwrap();
        // 30 frames at 100ms: motion on every frame, but at most one rep
        // per threshold second.
        drive(&mut analyzer, base, 30, 100);
        assert_eq!(analyzer.counted_reps(), 3);
        assert_eq!(analyzer.motion_trace().len(), 30);

        analyzer.finish(base + Duration::from_secs(3)).unwrap();
        let report = analyzer.analysis().unwrap();
        assert_eq!(report.duration_secs, 3);
        assert_eq!(report.reps, 3);
    }

    #[test]
    fn motionless_recording_falls_back_to_cadence_estimate() {
        let mut analyzer = SessionAnalyzer::with_classifier(
            "Push-ups",
            Box::new(ScriptedClassifier::uniform(false, 88.0)),
        );
        let base = Instant::now();
        analyzer.start(base).unwrap();
        drive(&mut analyzer, base, 40, 100);
        analyzer.finish(base + Duration::from_secs(4)).unwrap();

        assert_eq!(analyzer.counted_reps(), 0);
        let report = analyzer.analysis().unwrap();
        assert_eq!(report.reps, 5);
    }

    #[test]
    fn plank_never_counts_discrete_reps() {
        let mut analyzer = SessionAnalyzer::with_classifier(
            "Plank Hold",
            Box::new(ScriptedClassifier::uniform(true, 85.0)),
        );
        let base = Instant::now();
        analyzer.start(base).unwrap();
        drive(&mut analyzer, base, 50, 100);
        analyzer.finish(base + Duration::from_secs(5)).unwrap();

        assert_eq!(analyzer.counted_reps(), 0);
        let report = analyzer.analysis().unwrap();
        // Hold time lands in the reps field.
        assert_eq!(report.reps, 5);
    }

    #[test]
    fn trace_timestamps_are_monotone() {
        let mut analyzer = SessionAnalyzer::with_classifier(
            "Sit-ups",
            Box::new(ScriptedClassifier::uniform(false, 80.0)),
        );
        let base = Instant::now();
        analyzer.start(base).unwrap();
        drive(&mut analyzer, base, 20, 100);

        let trace = analyzer.motion_trace();
        for window in trace.windows(2) {
            assert!(window[0].timestamp_secs <= window[1].timestamp_secs);
        }
    }

    #[test]
    fn restarting_clears_previous_session_state() {
        let mut analyzer = SessionAnalyzer::with_classifier(
            "Sit-ups",
            Box::new(ScriptedClassifier::uniform(true, 90.0)),
        );
        let base = Instant::now();
        analyzer.start(base).unwrap();
        drive(&mut analyzer, base, 30, 100);
        analyzer.finish(base + Duration::from_secs(3)).unwrap();
        assert!(analyzer.counted_reps() > 0);

        let restart = base + Duration::from_secs(10);
        analyzer.start(restart).unwrap();
        assert_eq!(analyzer.status(), AnalyzerStatus::Recording);
        assert_eq!(analyzer.counted_reps(), 0);
        assert!(analyzer.motion_trace().is_empty());
    }

    #[test]
    fn finish_freezes_elapsed_time() {
        let mut analyzer = SessionAnalyzer::with_classifier(
            "Push-ups",
            Box::new(ScriptedClassifier::uniform(false, 85.0)),
        );
        let base = Instant::now();
        analyzer.start(base).unwrap();
        analyzer.finish(base + Duration::from_millis(7_400)).unwrap();
        assert!((analyzer.elapsed_secs() - 7.4).abs() < 1e-9);
        let report = analyzer.analysis().unwrap();
        assert_eq!(report.duration_secs, 7);
    }
}

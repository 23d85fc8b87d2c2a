use crate::exercise::ExerciseKind;
use crate::models::{ExerciseAnalysis, FrameSample, QualityTier, TechniqueScores};

/// Fold a finished recording into the scored report.
pub(crate) fn build(
    exercise_name: &str,
    kind: ExerciseKind,
    elapsed_secs: f64,
    counted_reps: u32,
    trace: &[FrameSample],
) -> ExerciseAnalysis {
    let avg_quality = mean_quality(trace);
    let reps = final_reps(kind, elapsed_secs, counted_reps);

    ExerciseAnalysis {
        exercise_name: exercise_name.to_string(),
        duration_secs: elapsed_secs.round() as u32,
        reps,
        accuracy: avg_quality.round() as u32,
        quality: quality_tier(avg_quality),
        score: score(avg_quality, elapsed_secs, counted_reps),
        form_score: form_score(avg_quality),
        calories: calories(kind, elapsed_secs, reps),
        technique: technique(avg_quality),
        feedback: feedback(elapsed_secs, avg_quality, counted_reps),
        improvements: improvements(avg_quality),
    }
}

/// Mean frame quality, defaulting to the baseline when nothing was sampled.
fn mean_quality(trace: &[FrameSample]) -> f64 {
    if trace.is_empty() {
        return 85.0;
    }
    trace.iter().map(|sample| sample.quality).sum::<f64>() / trace.len() as f64
}

/// Hold exercises report elapsed seconds; everything else takes the higher
/// of the counted reps and the cadence-based floor estimate.
fn final_reps(kind: ExerciseKind, elapsed_secs: f64, counted_reps: u32) -> u32 {
    if kind.is_hold() {
        return elapsed_secs.round() as u32;
    }
    let time_based = (elapsed_secs / kind.rep_threshold_secs()).floor() as u32;
    counted_reps.max(time_based)
}

fn quality_tier(avg_quality: f64) -> QualityTier {
    if avg_quality >= 95.0 {
        QualityTier::Ultra
    } else if avg_quality >= 90.0 {
        QualityTier::High
    } else if avg_quality >= 80.0 {
        QualityTier::Medium
    } else {
        QualityTier::Low
    }
}

/// Quality plus capped duration and rep bonuses, capped at 100.
fn score(avg_quality: f64, elapsed_secs: f64, counted_reps: u32) -> u32 {
    let duration_bonus = (elapsed_secs / 10.0).min(10.0);
    let rep_bonus = (counted_reps as f64 / 10.0).min(5.0);
    (avg_quality + duration_bonus + rep_bonus).min(100.0).round() as u32
}

/// Form score trails overall quality slightly, floored at 70.
fn form_score(avg_quality: f64) -> u32 {
    ((avg_quality - 5.0).round() as i64).max(70) as u32
}

fn calories(kind: ExerciseKind, elapsed_secs: f64, reps: u32) -> u32 {
    let duration_minutes = elapsed_secs / 60.0;
    let rep_bonus = reps as f64 * 0.5;
    (kind.calories_per_minute() * duration_minutes + rep_bonus).round() as u32
}

/// Per-axis technique estimates anchored to mean quality, clamped to
/// 70..=100.
fn technique(avg_quality: f64) -> TechniqueScores {
    let axis = |offset: f64| (avg_quality + offset).clamp(70.0, 100.0);
    TechniqueScores {
        posture: axis(0.0),
        range_of_motion: axis(-2.0),
        speed: axis(3.0),
        consistency: axis(-1.0),
    }
}

fn feedback(elapsed_secs: f64, avg_quality: f64, counted_reps: u32) -> Vec<String> {
    let mut feedback = Vec::new();

    if avg_quality >= 90.0 {
        feedback.push("Excellent form and technique!".to_string());
        feedback.push("Great consistency throughout the exercise".to_string());
    } else if avg_quality >= 80.0 {
        feedback.push("Good form with minor improvements needed".to_string());
        feedback.push("Maintain steady breathing".to_string());
    } else {
        feedback.push("Focus on proper form and technique".to_string());
        feedback.push("Slow down and concentrate on each movement".to_string());
    }

    if elapsed_secs >= 60.0 {
        feedback.push("Great endurance and persistence!".to_string());
    }

    if counted_reps > 0 {
        feedback.push(format!("Completed {counted_reps} reps successfully"));
    }

    feedback
}

fn improvements(avg_quality: f64) -> Vec<String> {
    let mut improvements = Vec::new();

    if avg_quality < 85.0 {
        improvements.push("Focus on maintaining proper posture".to_string());
        improvements.push("Control your breathing rhythm".to_string());
    }

    if avg_quality < 90.0 {
        improvements.push("Increase your range of motion".to_string());
        improvements.push("Maintain consistent tempo".to_string());
    }

    improvements.push("Practice regularly to improve technique".to_string());
    improvements
        .push("Consider working with a trainer for personalized guidance".to_string());

    improvements
}

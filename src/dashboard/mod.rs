//! Rollups derived from stored history: totals, streaks, chart series,
//! and goal progress. Everything here is computed on demand from the
//! session and goal collections; nothing is persisted.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    ChartPoint, DashboardData, ExerciseGoal, ExerciseSession, GoalProgress, GoalStatus,
};

const ACTIVE_DAY_COLOR: &str = "#34C759";
const IDLE_DAY_COLOR: &str = "#FF3B30";

const EXERCISE_PALETTE: [&str; 6] = [
    "#007AFF", "#34C759", "#FF9500", "#AF52DE", "#FF3B30", "#5AC8FA",
];

/// Build the dashboard view. Totals, the streak, and both chart series
/// consider only sessions that passed the activity gate; goal progress
/// applies the same check per goal window.
pub fn build(
    sessions: &[ExerciseSession],
    goals: &[ExerciseGoal],
    now: DateTime<Utc>,
) -> DashboardData {
    let real: Vec<&ExerciseSession> = sessions
        .iter()
        .filter(|session| session.has_real_activity)
        .collect();

    let total_sessions = real.len() as u32;
    let total_reps = real.iter().map(|session| session.reps).sum();
    let total_calories = real.iter().map(|session| session.calories).sum();
    let average_accuracy = if real.is_empty() {
        0
    } else {
        let sum: u32 = real.iter().map(|session| session.ai_metrics.accuracy).sum();
        (sum as f64 / real.len() as f64).round() as u32
    };

    DashboardData {
        total_sessions,
        total_reps,
        total_calories,
        average_accuracy,
        current_streak: current_streak(&real, now),
        weekly_progress: weekly_progress(&real, now),
        exercise_comparison: exercise_comparison(&real),
        goal_progress: goal_progress(sessions, goals),
    }
}

/// Consecutive calendar days with at least one session, counting back
/// from today. A day with several sessions counts once; the first gap
/// ends the streak.
fn current_streak(sessions: &[&ExerciseSession], now: DateTime<Utc>) -> u32 {
    if sessions.is_empty() {
        return 0;
    }

    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let today = now.date_naive();
    let mut streak: i64 = 0;
    for session in sorted {
        let days_diff = (today - session.date.date_naive()).num_days();
        if days_diff == streak {
            streak += 1;
        } else if days_diff > streak {
            break;
        }
        // Another session on an already-counted day; keep scanning.
    }

    streak as u32
}

/// Rep totals for the last seven calendar days, oldest first, today last.
fn weekly_progress(sessions: &[&ExerciseSession], now: DateTime<Utc>) -> Vec<ChartPoint> {
    let today = now.date_naive();

    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let total_reps: u32 = sessions
                .iter()
                .filter(|session| session.date.date_naive() == day)
                .map(|session| session.reps)
                .sum();

            ChartPoint {
                x: day.format("%a").to_string(),
                y: total_reps as f64,
                label: format!("{total_reps} reps"),
                color: if total_reps > 0 {
                    ACTIVE_DAY_COLOR
                } else {
                    IDLE_DAY_COLOR
                }
                .to_string(),
            }
        })
        .collect()
}

/// Mean reps per session for each exercise, in first-seen order.
fn exercise_comparison(sessions: &[&ExerciseSession]) -> Vec<ChartPoint> {
    let mut stats: Vec<(String, u32, u32)> = Vec::new();
    for session in sessions {
        match stats
            .iter_mut()
            .find(|(name, _, _)| name == &session.exercise_name)
        {
            Some((_, total_reps, count)) => {
                *total_reps += session.reps;
                *count += 1;
            }
            None => stats.push((session.exercise_name.clone(), session.reps, 1)),
        }
    }

    stats
        .into_iter()
        .map(|(name, total_reps, count)| {
            let average = (total_reps as f64 / count as f64).round() as u32;
            ChartPoint {
                y: average as f64,
                label: format!("{average} avg reps"),
                color: exercise_color(&name).to_string(),
                x: name,
            }
        })
        .collect()
}

/// Stable per-exercise color: byte-sum hash into the fixed palette.
fn exercise_color(name: &str) -> &'static str {
    let hash = name.bytes().fold(0u32, |acc, byte| acc.wrapping_add(u32::from(byte)));
    EXERCISE_PALETTE[(hash % EXERCISE_PALETTE.len() as u32) as usize]
}

/// Progress toward each goal: reps from gate-passing sessions of the
/// goal's exercise inside its window, against the target.
fn goal_progress(sessions: &[ExerciseSession], goals: &[ExerciseGoal]) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|goal| {
            let current: u32 = sessions
                .iter()
                .filter(|session| {
                    session.exercise_name == goal.exercise_name
                        && session.has_real_activity
                        && session.date >= goal.start_date
                        && session.date <= goal.end_date
                })
                .map(|session| session.reps)
                .sum();

            let percentage =
                ((current as f64 / goal.target_reps as f64) * 100.0).round() as u32;
            let status = if percentage >= 80 {
                GoalStatus::OnTrack
            } else {
                GoalStatus::OffTrack
            };

            GoalProgress {
                exercise_name: goal.exercise_name.clone(),
                current,
                target: goal.target_reps,
                percentage,
                status,
            }
        })
        .collect()
}

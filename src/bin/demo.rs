//! Records one simulated session end-to-end and prints the resulting
//! analysis and dashboard. Usage: `fitsense-demo [exercise] [seconds]`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{Duration as ChronoDuration, Utc};
use log::info;

use fitsense::models::{GoalPeriod, NewGoal};
use fitsense::storage::SqliteStorage;
use fitsense::{RecordingConfig, RecordingController, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let exercise = args.next().unwrap_or_else(|| "Push-ups".to_string());
    let seconds: u64 = args.next().and_then(|raw| raw.parse().ok()).unwrap_or(10);

    let db_path = std::env::temp_dir().join("fitsense-demo.db");
    let backend = SqliteStorage::open(db_path)?;
    let store = SessionStore::open(Arc::new(backend)).await?;

    let now = Utc::now();
    if store.goals().is_empty() {
        store
            .add_goal(NewGoal {
                exercise_name: exercise.clone(),
                target_reps: 100,
                target_sets: None,
                target_weight_kg: None,
                period: GoalPeriod::Weekly,
                start_date: now - ChronoDuration::days(6),
                end_date: now + ChronoDuration::days(1),
            })
            .await?;
    }

    let controller = RecordingController::with_config(store.clone(), RecordingConfig::default());

    info!("Recording {seconds}s of simulated {exercise}");
    controller.start(&exercise).await?;
    tokio::time::sleep(Duration::from_secs(seconds)).await;
    let session = controller.stop().await?;

    println!("--- session ---");
    println!("exercise:      {}", session.exercise_name);
    println!("real activity: {}", session.has_real_activity);
    println!("duration:      {}s", session.duration_secs);
    println!("reps:          {}", session.reps);
    println!("calories:      {}", session.calories);
    println!("score:         {}", session.ai_metrics.score);
    println!("quality:       {}", session.ai_metrics.quality.as_str());
    for line in &session.ai_metrics.feedback {
        println!("feedback:      {line}");
    }

    let dashboard = store.dashboard(Utc::now());
    println!("--- dashboard ---");
    println!("sessions:      {}", dashboard.total_sessions);
    println!("total reps:    {}", dashboard.total_reps);
    println!("streak:        {} days", dashboard.current_streak);
    for point in &dashboard.weekly_progress {
        println!("  {:<4} {}", point.x, point.label);
    }
    for progress in &dashboard.goal_progress {
        println!(
            "goal {}: {}/{} ({}%, {})",
            progress.exercise_name,
            progress.current,
            progress.target,
            progress.percentage,
            progress.status.as_str()
        );
    }

    Ok(())
}

//! Store of saved sessions, goals, and the user profile.
//!
//! Collections live in memory and are mirrored whole into the storage
//! backend on every mutation, the way the original app wrote through to
//! device storage. Mutations serialize a snapshot first and commit it in
//! memory only after the backend write succeeds, so a failed write never
//! leaves the two views disagreeing. Writers are expected to arrive one
//! at a time (a single recording flow per store).

use std::sync::{Arc, RwLock};

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::{info, warn};
use uuid::Uuid;

use crate::dashboard;
use crate::error::StoreError;
use crate::models::{
    DashboardData, ExerciseAnalysis, ExerciseGoal, ExerciseSession, FrameSample, NewGoal,
    ProfileUpdate, SessionDraft, UserProfile,
};
use crate::storage::{StorageBackend, GOALS_KEY, PROFILE_KEY, SESSIONS_KEY};

mod activity;
mod filter;

pub use activity::is_real_activity;
pub use filter::{DateRange, SessionFilter};

#[derive(Default)]
struct Collections {
    sessions: Vec<ExerciseSession>,
    goals: Vec<ExerciseGoal>,
    profile: Option<UserProfile>,
}

struct StoreInner {
    collections: RwLock<Collections>,
    backend: Arc<dyn StorageBackend>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl SessionStore {
    /// Load all collections from the backend. Missing keys start empty;
    /// unparseable payloads are surfaced rather than discarded.
    pub async fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        let sessions: Vec<ExerciseSession> = match backend.get(SESSIONS_KEY).await? {
            Some(raw) => {
                serde_json::from_str(&raw).context("failed to parse stored session history")?
            }
            None => Vec::new(),
        };
        let goals: Vec<ExerciseGoal> = match backend.get(GOALS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).context("failed to parse stored goals")?,
            None => Vec::new(),
        };
        let profile: Option<UserProfile> = match backend.get(PROFILE_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).context("failed to parse stored profile")?,
            None => None,
        };

        info!(
            "Session store opened with {} sessions, {} goals",
            sessions.len(),
            goals.len()
        );

        Ok(Self {
            inner: Arc::new(StoreInner {
                collections: RwLock::new(Collections {
                    sessions,
                    goals,
                    profile,
                }),
                backend,
            }),
        })
    }

    /// Validate the recording against its frame trace and persist it.
    /// Sessions that fail the activity gate are kept for the record but
    /// with reps, calories, and analysis metrics zeroed.
    pub async fn save_session(
        &self,
        draft: SessionDraft,
        trace: &[FrameSample],
    ) -> Result<ExerciseSession, StoreError> {
        let has_real_activity = is_real_activity(trace, draft.duration_secs);
        if !has_real_activity {
            warn!(
                "No real activity detected in '{}' recording; zeroing metrics",
                draft.exercise_name
            );
        }

        let (reps, calories, ai_metrics) = if has_real_activity {
            (
                draft.analysis.reps,
                draft.analysis.calories,
                draft.analysis,
            )
        } else {
            (0, 0, ExerciseAnalysis::no_activity(&draft.exercise_name))
        };

        let mut metadata = draft.metadata.unwrap_or_default();
        if metadata.notes.is_none() {
            metadata.notes = Some(
                if has_real_activity {
                    "Real activity detected"
                } else {
                    "No real activity detected"
                }
                .to_string(),
            );
        }

        let record = ExerciseSession {
            id: Uuid::new_v4().to_string(),
            session_id: draft
                .session_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            exercise_name: draft.exercise_name,
            reps,
            sets: draft.sets.unwrap_or(1),
            weight_kg: draft.weight_kg.unwrap_or(0.0),
            duration_secs: draft.duration_secs,
            calories,
            date: draft.date,
            metadata,
            ai_metrics,
            has_real_activity,
        };

        let snapshot = {
            let collections = self.inner.collections.read().unwrap();
            let mut sessions = collections.sessions.clone();
            sessions.push(record.clone());
            sessions
        };
        self.persist_sessions(&snapshot).await?;
        self.inner.collections.write().unwrap().sessions = snapshot;

        info!(
            "Saved {} session {} (real activity: {})",
            record.exercise_name, record.id, record.has_real_activity
        );
        Ok(record)
    }

    /// Stored sessions matching the filter, newest first.
    pub fn sessions(&self, filter: &SessionFilter) -> Result<Vec<ExerciseSession>, StoreError> {
        filter.validate()?;

        let collections = self.inner.collections.read().unwrap();
        let mut matches: Vec<ExerciseSession> = collections
            .sessions
            .iter()
            .filter(|session| filter.matches(session))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matches)
    }

    /// Aggregate rollups over stored history; `now` anchors the streak
    /// and weekly series.
    pub fn dashboard(&self, now: DateTime<Utc>) -> DashboardData {
        let collections = self.inner.collections.read().unwrap();
        dashboard::build(&collections.sessions, &collections.goals, now)
    }

    pub async fn add_goal(&self, goal: NewGoal) -> Result<ExerciseGoal, StoreError> {
        if goal.target_reps == 0 {
            return Err(StoreError::InvalidGoal(
                "target reps must be greater than zero".to_string(),
            ));
        }
        if goal.end_date < goal.start_date {
            return Err(StoreError::InvalidGoal(
                "goal window ends before it starts".to_string(),
            ));
        }

        let record = ExerciseGoal {
            id: Uuid::new_v4().to_string(),
            exercise_name: goal.exercise_name,
            target_reps: goal.target_reps,
            target_sets: goal.target_sets,
            target_weight_kg: goal.target_weight_kg,
            period: goal.period,
            start_date: goal.start_date,
            end_date: goal.end_date,
            current_progress: 0,
            is_active: true,
        };

        let snapshot = {
            let collections = self.inner.collections.read().unwrap();
            let mut goals = collections.goals.clone();
            goals.push(record.clone());
            goals
        };
        self.persist_goals(&snapshot).await?;
        self.inner.collections.write().unwrap().goals = snapshot;

        Ok(record)
    }

    pub fn goals(&self) -> Vec<ExerciseGoal> {
        self.inner.collections.read().unwrap().goals.clone()
    }

    /// Merge a partial update over the stored profile, creating one from
    /// neutral defaults if none exists yet.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, StoreError> {
        let updated = {
            let collections = self.inner.collections.read().unwrap();
            let mut profile = collections
                .profile
                .clone()
                .unwrap_or_else(UserProfile::empty);
            profile.apply(update);
            profile
        };

        self.persist_profile(&Some(updated.clone())).await?;
        self.inner.collections.write().unwrap().profile = Some(updated.clone());
        Ok(updated)
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.inner.collections.read().unwrap().profile.clone()
    }

    /// Reset every collection and persist the empty state.
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        self.persist_sessions(&[]).await?;
        self.persist_goals(&[]).await?;
        self.persist_profile(&None).await?;

        let mut collections = self.inner.collections.write().unwrap();
        collections.sessions.clear();
        collections.goals.clear();
        collections.profile = None;

        info!("Cleared all stored fitness data");
        Ok(())
    }

    async fn persist_sessions(&self, sessions: &[ExerciseSession]) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_string(sessions).context("failed to serialize session history")?;
        self.inner.backend.set(SESSIONS_KEY, &serialized).await?;
        Ok(())
    }

    async fn persist_goals(&self, goals: &[ExerciseGoal]) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(goals).context("failed to serialize goals")?;
        self.inner.backend.set(GOALS_KEY, &serialized).await?;
        Ok(())
    }

    async fn persist_profile(&self, profile: &Option<UserProfile>) -> Result<(), StoreError> {
        let serialized =
            serde_json::to_string(profile).context("failed to serialize profile")?;
        self.inner.backend.set(PROFILE_KEY, &serialized).await?;
        Ok(())
    }
}

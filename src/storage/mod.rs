//! Durable key-value persistence behind the session store.
//!
//! Collections are serialized whole and written under fixed keys, so a
//! backend only needs `get` and `set` with last-write-wins semantics.

use anyhow::Result;
use async_trait::async_trait;

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Key holding the serialized session history.
pub const SESSIONS_KEY: &str = "fitnessApp_sessions";
/// Key holding the serialized goal list.
pub const GOALS_KEY: &str = "fitnessApp_goals";
/// Key holding the serialized user profile.
pub const PROFILE_KEY: &str = "fitnessApp_profile";

#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

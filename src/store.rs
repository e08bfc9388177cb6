//! Durable key-value persistence for profile, goals, responses, and
//! completed-day marks.
//!
//! Contract (mirrors the on-device storage the app grew up with):
//! - `load` never fails: a missing or corrupt value is treated as absent and
//!   the default substituted; corruption is logged, never surfaced.
//! - Each `save_*` persists its slice independently; there is no multi-key
//!   transaction. A crash between saves leaves whichever keys completed.
//! - Writes are whole-value overwrites, last write wins per key.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::warn;

use crate::models::{Goal, Level, UserProfile};

pub const KEY_NAME: &str = "name";
pub const KEY_SELECTED_GOALS: &str = "selectedGoals";
pub const KEY_STRENGTH_LEVELS: &str = "strengthLevels";
pub const KEY_RESPONSES: &str = "responses";
pub const KEY_COMPLETED_DAYS: &str = "completedDays";
pub const KEY_IS_SUBMITTED: &str = "isSubmitted";
pub const KEY_IS_RETURNING_USER: &str = "isReturningUser";

/// Write-path failure. Read-path failures never escape this module.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage write failed: {0}")]
    Write(#[from] sqlx::Error),
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// Everything the store persists, with defaults for anything absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppData {
    pub profile: UserProfile,
    pub goals: BTreeSet<Goal>,
    pub levels: BTreeMap<Goal, Level>,
    pub responses: BTreeMap<String, String>,
    pub completed_days: BTreeMap<String, bool>,
    /// Fast-path hints; the composite `is_returning_user` check stays
    /// authoritative.
    pub is_submitted: bool,
    pub is_returning_user_hint: bool,
}

/// Composite returning-user check: profile plus full goal data present.
/// Gates which screen the controller shows first.
pub fn is_returning_user(data: &AppData) -> bool {
    !data.profile.name.is_empty()
        && !data.goals.is_empty()
        && !data.levels.is_empty()
        && !data.responses.is_empty()
}

// ---------------------------------------------------------------------------
// Raw key access
// ---------------------------------------------------------------------------

async fn read_value(pool: &SqlitePool, key: &str) -> Option<String> {
    match sqlx::query_scalar::<_, String>("SELECT value FROM app_state WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
    {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "storage read failed, treating key as absent");
            None
        }
    }
}

async fn read_json<T: DeserializeOwned>(pool: &SqlitePool, key: &str) -> Option<T> {
    let raw = read_value(pool, key).await?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "corrupt stored value, treating key as absent");
            None
        }
    }
}

async fn write_value(pool: &SqlitePool, key: &'static str, value: String) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        INSERT INTO app_state (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

async fn write_json<T: Serialize>(
    pool: &SqlitePool,
    key: &'static str,
    value: &T,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
    write_value(pool, key, encoded).await
}

// ---------------------------------------------------------------------------
// Store operations
// ---------------------------------------------------------------------------

/// Load all persisted state, substituting defaults for missing keys.
pub async fn load(pool: &SqlitePool) -> AppData {
    // The profile name is stored raw; everything else is a JSON blob.
    let name = read_value(pool, KEY_NAME).await.unwrap_or_default();

    AppData {
        profile: UserProfile { name },
        goals: read_json(pool, KEY_SELECTED_GOALS).await.unwrap_or_default(),
        levels: read_json(pool, KEY_STRENGTH_LEVELS).await.unwrap_or_default(),
        responses: read_json(pool, KEY_RESPONSES).await.unwrap_or_default(),
        completed_days: read_json(pool, KEY_COMPLETED_DAYS).await.unwrap_or_default(),
        is_submitted: read_json(pool, KEY_IS_SUBMITTED).await.unwrap_or_default(),
        is_returning_user_hint: read_json(pool, KEY_IS_RETURNING_USER)
            .await
            .unwrap_or_default(),
    }
}

/// Persist the onboarding slice: the profile name.
pub async fn save_onboarding(pool: &SqlitePool, profile: &UserProfile) -> Result<(), StoreError> {
    write_value(pool, KEY_NAME, profile.name.clone()).await
}

/// Persist the goal-entry slice: goals, levels, and responses, plus the
/// fast-path hint flags. Keys are written one by one, not transactionally.
pub async fn save_goal_data(
    pool: &SqlitePool,
    goals: &BTreeSet<Goal>,
    levels: &BTreeMap<Goal, Level>,
    responses: &BTreeMap<String, String>,
) -> Result<(), StoreError> {
    write_json(pool, KEY_SELECTED_GOALS, goals).await?;
    write_json(pool, KEY_STRENGTH_LEVELS, levels).await?;
    write_json(pool, KEY_RESPONSES, responses).await?;
    write_json(pool, KEY_IS_SUBMITTED, &true).await?;
    write_json(pool, KEY_IS_RETURNING_USER, &true).await?;
    Ok(())
}

/// Persist the completed-day map.
pub async fn save_completion(
    pool: &SqlitePool,
    completed_days: &BTreeMap<String, bool>,
) -> Result<(), StoreError> {
    write_json(pool, KEY_COMPLETED_DAYS, completed_days).await
}

/// Delete every persisted key, profile included.
pub async fn reset_all(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM app_state").execute(pool).await?;
    Ok(())
}

/// Delete every persisted key except the profile name. The caller re-saves
/// fresh goal data afterwards; completed days from the old cycle are gone.
pub async fn reset_for_new_cycle(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM app_state WHERE key != ?")
        .bind(KEY_NAME)
        .execute(pool)
        .await?;
    Ok(())
}

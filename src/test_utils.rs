//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Seed helpers for persisted app state
//! - Goal-data factories

use std::collections::{BTreeMap, BTreeSet};

use sqlx::SqlitePool;

use crate::classifier::response_key;
use crate::models::{Goal, Level, UserProfile};
use crate::store;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Goal-Data Factories
/// ---------------------------------------------------------------------------

/// Build a complete Beginner goal-data triple from (goal, count, hold)
/// entries, answers keyed the way the questionnaire stores them.
pub fn beginner_goal_data(
  entries: &[(Goal, &str, &str)],
) -> (
  BTreeSet<Goal>,
  BTreeMap<Goal, Level>,
  BTreeMap<String, String>,
) {
  let mut goals = BTreeSet::new();
  let mut levels = BTreeMap::new();
  let mut responses = BTreeMap::new();

  for &(goal, count, hold) in entries {
    goals.insert(goal);
    levels.insert(goal, Level::Beginner);
    responses.insert(response_key(goal, Level::Beginner, 0), count.to_string());
    responses.insert(response_key(goal, Level::Beginner, 1), hold.to_string());
  }

  (goals, levels, responses)
}

/// Seed dual-goal Beginner data (both goals mid-band answers)
pub async fn seed_goal_data(pool: &SqlitePool) {
  let (goals, levels, responses) =
    beginner_goal_data(&[(Goal::Planche, "4", "5"), (Goal::FrontLever, "5", "6")]);

  store::save_goal_data(pool, &goals, &levels, &responses)
    .await
    .expect("Failed to seed goal data");
}

/// Seed a complete returning user: profile plus single-goal Beginner data
pub async fn seed_full_returning_user(pool: &SqlitePool) {
  store::save_onboarding(
    pool,
    &UserProfile {
      name: "Fedor".to_string(),
    },
  )
  .await
  .expect("Failed to seed profile");

  let (goals, levels, responses) = beginner_goal_data(&[(Goal::Planche, "4", "5")]);
  store::save_goal_data(pool, &goals, &levels, &responses)
    .await
    .expect("Failed to seed goal data");
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

//! Daily usage limiting for the free tier.
//!
//! Free users get 50 analyses per day; Pro users are uncapped. The count
//! and the last-reset date are persisted as a small JSON file and the
//! count resets whenever the stored date differs from today in the local
//! timezone. This tracker is the only shared mutable state in the system;
//! the web layer serializes access behind a mutex, and the analysis engine
//! never touches it.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Daily analysis cap for free users.
pub const DAILY_MESSAGE_LIMIT: u32 = 50;

/// Persisted usage state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageState {
    /// Analyses accepted today
    pub message_count: u32,

    /// Local date the counter was last reset
    pub last_reset: NaiveDate,

    /// Whether the user is on the Pro plan (uncapped)
    pub is_pro_user: bool,
}

impl UsageState {
    fn fresh(today: NaiveDate) -> Self {
        Self {
            message_count: 0,
            last_reset: today,
            is_pro_user: false,
        }
    }
}

/// Owner of the usage state and its read-modify-write cycle.
#[derive(Debug)]
pub struct UsageTracker {
    state: UsageState,
    path: PathBuf,
    limit: u32,
}

impl UsageTracker {
    /// Load the tracker from the given file, creating fresh state if the
    /// file does not exist yet. The daily rollover is applied on load.
    pub fn load(path: impl Into<PathBuf>, limit: u32) -> Result<Self> {
        let path = path.into();
        let today = Local::now().date_naive();

        let state = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read usage state from {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("malformed usage state in {}", path.display()))?
        } else {
            UsageState::fresh(today)
        };

        let mut tracker = Self { state, path, limit };
        tracker.refresh_at(today)?;
        Ok(tracker)
    }

    /// Reset the counter if the stored date is not `today`.
    ///
    /// Called before every read or write so a tracker that lives across
    /// midnight rolls over correctly.
    fn refresh_at(&mut self, today: NaiveDate) -> Result<()> {
        if self.state.last_reset != today {
            info!(
                previous = %self.state.last_reset,
                count = self.state.message_count,
                "resetting daily usage counter"
            );
            self.state.message_count = 0;
            self.state.last_reset = today;
            self.save()?;
        }
        Ok(())
    }

    /// Whether another analysis may be accepted right now.
    pub fn can_send(&mut self) -> Result<bool> {
        self.refresh_at(Local::now().date_naive())?;
        Ok(self.state.is_pro_user || self.state.message_count < self.limit)
    }

    /// Count one accepted analysis and persist.
    ///
    /// Callers must invoke this exactly once per accepted analysis, after
    /// checking `can_send`.
    pub fn increment(&mut self) -> Result<()> {
        self.refresh_at(Local::now().date_naive())?;
        self.state.message_count += 1;
        self.save()
    }

    /// Analyses left today, saturating at zero. `None` means unlimited
    /// (Pro plan); the frontend renders that case explicitly instead of
    /// showing a number.
    pub fn remaining(&mut self) -> Result<Option<u32>> {
        self.refresh_at(Local::now().date_naive())?;
        if self.state.is_pro_user {
            return Ok(None);
        }
        Ok(Some(self.limit.saturating_sub(self.state.message_count)))
    }

    /// Upgrade the user to the Pro plan and persist.
    pub fn upgrade_to_pro(&mut self) -> Result<()> {
        self.state.is_pro_user = true;
        info!("user upgraded to Pro plan");
        self.save()
    }

    /// The configured daily limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Current state snapshot.
    pub fn state(&self) -> &UsageState {
        &self.state
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create usage state dir {}", parent.display())
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.state)
            .context("failed to serialize usage state")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("failed to write usage state to {}", self.path.display()))?;
        Ok(())
    }

    /// Path the state is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tracker_in(dir: &TempDir) -> UsageTracker {
        UsageTracker::load(dir.path().join("usage.json"), DAILY_MESSAGE_LIMIT)
            .expect("Should load fresh tracker")
    }

    // ==================== Fresh State Tests ====================

    #[test]
    fn test_fresh_tracker_starts_at_zero() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        assert_eq!(tracker.state().message_count, 0);
        assert!(!tracker.state().is_pro_user);
        assert!(tracker.can_send().unwrap());
        assert_eq!(tracker.remaining().unwrap(), Some(DAILY_MESSAGE_LIMIT));
    }

    // ==================== Increment Tests ====================

    #[test]
    fn test_increment_counts_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");

        {
            let mut tracker = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT).unwrap();
            tracker.increment().unwrap();
            tracker.increment().unwrap();
            assert_eq!(tracker.state().message_count, 2);
        }

        // Reload from disk; the count survives
        let tracker = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT).unwrap();
        assert_eq!(tracker.state().message_count, 2);
    }

    #[test]
    fn test_remaining_decreases_with_use() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        tracker.increment().unwrap();
        tracker.increment().unwrap();
        tracker.increment().unwrap();
        assert_eq!(tracker.remaining().unwrap(), Some(DAILY_MESSAGE_LIMIT - 3));
    }

    // ==================== Limit Tests ====================

    #[test]
    fn test_free_user_blocked_at_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");
        let mut tracker = UsageTracker::load(&path, 3).unwrap();

        for _ in 0..3 {
            assert!(tracker.can_send().unwrap());
            tracker.increment().unwrap();
        }

        assert!(!tracker.can_send().unwrap());
        assert_eq!(tracker.remaining().unwrap(), Some(0));
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");
        let mut tracker = UsageTracker::load(&path, 2).unwrap();

        for _ in 0..4 {
            tracker.increment().unwrap();
        }
        assert_eq!(tracker.remaining().unwrap(), Some(0));
    }

    // ==================== Pro Plan Tests ====================

    #[test]
    fn test_pro_user_is_never_blocked() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");
        let mut tracker = UsageTracker::load(&path, 2).unwrap();

        tracker.upgrade_to_pro().unwrap();
        for _ in 0..10 {
            assert!(tracker.can_send().unwrap());
            tracker.increment().unwrap();
        }
        // Pro users have no quota to count down
        assert_eq!(tracker.remaining().unwrap(), None);
    }

    #[test]
    fn test_pro_flag_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");

        {
            let mut tracker = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT).unwrap();
            tracker.upgrade_to_pro().unwrap();
        }

        let tracker = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT).unwrap();
        assert!(tracker.state().is_pro_user);
    }

    // ==================== Daily Rollover Tests ====================

    #[test]
    fn test_stale_date_resets_count_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");

        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        let stale = UsageState {
            message_count: 42,
            last_reset: yesterday,
            is_pro_user: false,
        };
        std::fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let tracker = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT).unwrap();
        assert_eq!(tracker.state().message_count, 0);
        assert_eq!(tracker.state().last_reset, Local::now().date_naive());
    }

    #[test]
    fn test_rollover_keeps_pro_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");

        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        let stale = UsageState {
            message_count: 100,
            last_reset: yesterday,
            is_pro_user: true,
        };
        std::fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let tracker = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT).unwrap();
        assert_eq!(tracker.state().message_count, 0);
        assert!(tracker.state().is_pro_user);
    }

    #[test]
    fn test_rollover_via_refresh_at() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        tracker.increment().unwrap();
        assert_eq!(tracker.state().message_count, 1);

        // Simulate the clock crossing midnight
        let tomorrow = Local::now().date_naive().succ_opt().unwrap();
        tracker.refresh_at(tomorrow).unwrap();
        assert_eq!(tracker.state().message_count, 0);
        assert_eq!(tracker.state().last_reset, tomorrow);
    }

    // ==================== Error Handling Tests ====================

    #[test]
    fn test_malformed_state_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("malformed usage state"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("usage.json");

        let mut tracker = UsageTracker::load(&path, DAILY_MESSAGE_LIMIT).unwrap();
        tracker.increment().unwrap();
        assert!(path.exists());
    }
}

#![forbid(unsafe_code)]

//! Derived-state calculations for the HabitMetrics dashboard.
//!
//! This crate provides:
//! - Domain types (habits, streak records, mood entries)
//! - Wellness classification, best-streak aggregation, mood analytics
//! - Day-of-week schedule gating and category grouping
//! - Collaborator payload shapes and settle-all snapshot loading
//! - A file-backed mood journal

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod wellness;
pub mod streaks;
pub mod mood;
pub mod schedule;
pub mod grouping;
pub mod api;
pub mod snapshot;
pub mod journal;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use wellness::{classify, Tier, Trend, WellnessStatus};
pub use streaks::{best_streak, top_streaks, StreakPayload};
pub use mood::{classify_impact, mood_score, summarize, ImpactCategory, MoodSummary};
pub use schedule::{can_log_today, loggable_today};
pub use grouping::{group_by_category, CategoryGroups, UNCATEGORIZED};
pub use api::{LogRejection, MoodLogRequest, WellnessReading};
pub use snapshot::{DashboardSnapshot, DataDir, QuickStats};
pub use journal::{JsonlMoodJournal, RecentMoodHistory, DEFAULT_HISTORY_LIMIT};

//! Request and response shapes exchanged with the habit server.
//!
//! Transport lives elsewhere; these types only pin down the JSON shapes and
//! the meaning of the server's rejection statuses.

use crate::mood::classify_impact;
use crate::wellness::{classify, WellnessStatus};
use crate::Mood;
use serde::{Deserialize, Serialize};

/// Response of the wellness-score endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessReading {
    #[serde(default)]
    pub score: Option<i64>,
}

impl WellnessReading {
    /// Score, 0 when the server left it out
    pub fn score(&self) -> i64 {
        self.score.unwrap_or(0)
    }

    pub fn status(&self) -> WellnessStatus {
        classify(self.score())
    }
}

/// Body of the mood-log write request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoodLogRequest {
    pub mood: Mood,
    pub notes: String,
    #[serde(rename = "habitsImpact")]
    pub habits_impact: String,
}

impl MoodLogRequest {
    pub fn new(mood: Mood, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        let habits_impact = classify_impact(&notes).headline().to_string();
        Self {
            mood,
            notes,
            habits_impact,
        }
    }
}

/// Why the server refused a habit log attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogRejection {
    /// 409: the habit was already logged today
    AlreadyLoggedToday,
    /// 403: today is not one of the habit's days
    NotScheduledToday,
    /// Any other non-success status
    Failed(u16),
}

impl LogRejection {
    /// Classify an HTTP status; success statuses are not rejections
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            409 => Some(LogRejection::AlreadyLoggedToday),
            403 => Some(LogRejection::NotScheduledToday),
            other => Some(LogRejection::Failed(other)),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            LogRejection::AlreadyLoggedToday => "Already logged today",
            LogRejection::NotScheduledToday => "Cannot log today",
            LogRejection::Failed(_) => "Failed to log habit",
        }
    }
}

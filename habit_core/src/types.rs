//! Core domain types for HabitMetrics.
//!
//! These mirror the records the habit server hands out:
//! - Habits and their goal types
//! - Streak records (with the upstream alternate field spellings)
//! - Mood entries
//!
//! Every record is deserialized leniently. Missing fields fall back to
//! defaults instead of failing the whole payload.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::mood::{classify_impact, ImpactCategory};

// ============================================================================
// Habit Types
// ============================================================================

/// Goal type of a habit
///
/// Unrecognized goal types are preserved verbatim and are never day-gated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalType {
    #[default]
    Daily,
    Weekly,
    /// Restricted to a subset of weekdays (see [`Habit::days`])
    Daywise,
    Other(String),
}

impl From<String> for GoalType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "daily" => GoalType::Daily,
            "weekly" => GoalType::Weekly,
            "daywise" => GoalType::Daywise,
            _ => GoalType::Other(s),
        }
    }
}

impl From<GoalType> for String {
    fn from(goal: GoalType) -> Self {
        match goal {
            GoalType::Daily => "daily".into(),
            GoalType::Weekly => "weekly".into(),
            GoalType::Daywise => "daywise".into(),
            GoalType::Other(s) => s,
        }
    }
}

/// A habit as returned by the habit read API
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Habit {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub title: String,
    pub category: Option<String>,
    pub goal_type: GoalType,
    /// Number or numeric string; anything else reads as 1
    #[serde(deserialize_with = "lenient_goal_value")]
    pub goal_value: u32,
    /// Weekday codes (`Mon`..`Sun`), only meaningful for daywise goals.
    /// Unparseable codes are dropped.
    #[serde(deserialize_with = "lenient_weekdays")]
    pub days: Vec<Weekday>,
    #[serde(rename = "loggedToday")]
    pub logged_today: bool,
    pub completed: bool,
}

impl Default for Habit {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            category: None,
            goal_type: GoalType::Daily,
            goal_value: 1,
            days: Vec::new(),
            logged_today: false,
            completed: false,
        }
    }
}

impl Habit {
    /// Category key, or `None` when missing or blank
    pub fn category_key(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

// ============================================================================
// Streak Types
// ============================================================================

/// Current consecutive-completion count for one habit
///
/// Upstream sends either `streak`/`title` or `currentStreak`/`habitName`.
/// Both spellings are kept as separate fields so a record carrying both
/// still parses.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StreakRecord {
    #[serde(rename = "habitId", skip_serializing_if = "Option::is_none")]
    pub habit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "habitName", skip_serializing_if = "Option::is_none")]
    pub habit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    #[serde(rename = "currentStreak", skip_serializing_if = "Option::is_none")]
    pub current_streak: Option<u32>,
}

impl StreakRecord {
    /// Streak count: `streak` if present, else `currentStreak`, else 0.
    /// An explicit `streak: 0` is a real count and does not fall through.
    pub fn count(&self) -> u32 {
        self.streak.or(self.current_streak).unwrap_or(0)
    }

    /// Display title, falling back to `habitName` and then `Unnamed Habit`
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.habit_name.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or("Unnamed Habit")
    }
}

// ============================================================================
// Mood Types
// ============================================================================

/// Self-reported mood
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Bad,
    Terrible,
    /// Anything else upstream sent, kept verbatim
    Unknown(String),
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Unknown(String::new())
    }
}

impl Mood {
    /// Parse a mood name, rejecting unknown values
    pub fn parse(s: &str) -> Option<Self> {
        match Mood::from(s.to_string()) {
            Mood::Unknown(_) => None,
            mood => Some(mood),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Bad => "bad",
            Mood::Terrible => "terrible",
            Mood::Unknown(s) => s,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "🙂",
            Mood::Okay => "😐",
            Mood::Bad => "☹️",
            Mood::Terrible => "😢",
            Mood::Unknown(_) => "😐",
        }
    }

    /// Whether this mood counts as a good day
    pub fn is_positive(&self) -> bool {
        matches!(self, Mood::Great | Mood::Good)
    }
}

impl From<String> for Mood {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "great" => Mood::Great,
            "good" => Mood::Good,
            "okay" => Mood::Okay,
            "bad" => Mood::Bad,
            "terrible" => Mood::Terrible,
            _ => Mood::Unknown(s),
        }
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        mood.as_str().to_string()
    }
}

/// A logged mood entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub notes: String,
    pub date: DateTime<Utc>,
    #[serde(
        rename = "habitImpact",
        default,
        deserialize_with = "lenient_impact",
        skip_serializing_if = "Option::is_none"
    )]
    pub habit_impact: Option<ImpactCategory>,
}

impl MoodEntry {
    /// Create a new entry with a fresh id and the impact detected from the notes
    pub fn new(mood: Mood, notes: impl Into<String>, date: DateTime<Utc>) -> Self {
        let notes = notes.into();
        let habit_impact = Some(classify_impact(&notes));
        Self {
            id: Uuid::new_v4().to_string(),
            mood,
            notes,
            date,
            habit_impact,
        }
    }
}

// ============================================================================
// Lenient field readers
// ============================================================================

/// Strings as-is, numbers in their decimal form, anything else empty
fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_goal_value<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(d)?;
    let parsed = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(parsed
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n >= 1)
        .unwrap_or_else(|| {
            tracing::warn!("Invalid goal_value {}, using 1", value);
            1
        }))
}

fn lenient_weekdays<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Weekday>, D::Error> {
    let items = match Value::deserialize(d)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!("Ignoring non-list days value {}", other);
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .filter_map(|item| {
            let day = item.as_str().and_then(|s| s.trim().parse::<Weekday>().ok());
            if day.is_none() {
                tracing::warn!("Ignoring unknown weekday code {}", item);
            }
            day
        })
        .collect())
}

/// Accepts the lowercase category or the headline text
fn lenient_impact<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ImpactCategory>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => ImpactCategory::from_label(&s),
        _ => None,
    })
}

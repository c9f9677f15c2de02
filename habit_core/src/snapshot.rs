//! Dashboard snapshot loading.
//!
//! The dashboard needs three independent inputs: habits, the wellness score
//! and streaks. They are fetched separately and settled together: every
//! source that succeeded is kept, every source that failed falls back to
//! its empty value. One failing source never blanks the others.
//!
//! [`DataDir`] reads the three inputs from JSON files in a directory:
//! - `habits.json`
//! - `wellness.json`
//! - `streaks.json`

use crate::api::WellnessReading;
use crate::streaks::{best_streak, StreakPayload};
use crate::wellness::WellnessStatus;
use crate::{Error, Habit, Result, StreakRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Settled dashboard inputs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub habits: Vec<Habit>,
    pub wellness_score: i64,
    pub streaks: Vec<Option<StreakRecord>>,
}

impl DashboardSnapshot {
    /// Combine three fetch results, keeping successes and defaulting failures
    pub fn settle(
        habits: Result<Vec<Habit>>,
        wellness: Result<WellnessReading>,
        streaks: Result<StreakPayload>,
    ) -> Self {
        let habits = habits.unwrap_or_else(|e| {
            tracing::warn!("Failed to load habits: {}. Showing none.", e);
            Vec::new()
        });

        let wellness_score = match wellness {
            Ok(reading) => reading.score(),
            Err(e) => {
                tracing::warn!("Failed to load wellness score: {}. Using 0.", e);
                0
            }
        };

        let streaks = match streaks {
            Ok(payload) => payload.into_records(),
            Err(e) => {
                tracing::warn!("Failed to load streaks: {}. Showing none.", e);
                Vec::new()
            }
        };

        tracing::debug!(
            "Settled snapshot: {} habits, score {}, {} streak slots",
            habits.len(),
            wellness_score,
            streaks.len()
        );

        Self {
            habits,
            wellness_score,
            streaks,
        }
    }

    pub fn wellness(&self) -> WellnessStatus {
        crate::wellness::classify(self.wellness_score)
    }

    pub fn quick_stats(&self) -> QuickStats {
        QuickStats {
            total_habits: self.habits.len(),
            logged_today: self.habits.iter().filter(|h| h.logged_today).count(),
            best_streak: best_streak(&self.streaks),
        }
    }
}

/// Headline numbers shown on the dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub total_habits: usize,
    pub logged_today: usize,
    pub best_streak: u32,
}

/// Directory holding the exported server responses
#[derive(Clone, Debug)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn habits_path(&self) -> PathBuf {
        self.root.join("habits.json")
    }

    pub fn wellness_path(&self) -> PathBuf {
        self.root.join("wellness.json")
    }

    pub fn streaks_path(&self) -> PathBuf {
        self.root.join("streaks.json")
    }

    /// Load the habit list. Elements that are not habit objects are skipped
    /// with a warning, so one bad entry never hides the rest.
    pub fn load_habits(&self) -> Result<Vec<Habit>> {
        let path = self.habits_path();
        match read_json::<Value>(&path)? {
            Value::Array(items) => Ok(parse_habits(items)),
            other => Err(Error::Payload(format!(
                "expected a list of habits in {:?}, found {}",
                path,
                json_kind(&other)
            ))),
        }
    }

    pub fn load_wellness(&self) -> Result<WellnessReading> {
        read_json(&self.wellness_path())
    }

    pub fn load_streaks(&self) -> Result<StreakPayload> {
        read_json(&self.streaks_path())
    }

    /// Load and settle all three inputs
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::settle(self.load_habits(), self.load_wellness(), self.load_streaks())
    }
}

fn parse_habits(items: Vec<Value>) -> Vec<Habit> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Habit>(item) {
            Ok(habit) => Some(habit),
            Err(e) => {
                tracing::warn!("Skipping malformed habit at index {}: {}", idx, e);
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&contents)?;
    tracing::debug!("Loaded {:?}", path);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Tier};

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_settle_keeps_successes() {
        let habits = vec![
            Habit {
                title: "Water".into(),
                logged_today: true,
                ..Habit::default()
            },
            Habit {
                title: "Read".into(),
                ..Habit::default()
            },
        ];
        let streaks = StreakPayload::from(serde_json::json!([{"streak": 4}, {"currentStreak": 6}]));

        let snapshot = DashboardSnapshot::settle(
            Ok(habits),
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "timeout",
            ))),
            Ok(streaks),
        );

        assert_eq!(snapshot.wellness_score, 0);
        assert_eq!(
            snapshot.quick_stats(),
            QuickStats {
                total_habits: 2,
                logged_today: 1,
                best_streak: 6,
            }
        );
    }

    #[test]
    fn test_settle_all_failed() {
        let snapshot = DashboardSnapshot::settle(
            Err(Error::Config("a".into())),
            Err(Error::Config("b".into())),
            Err(Error::Config("c".into())),
        );
        assert_eq!(snapshot, DashboardSnapshot::default());
        assert_eq!(snapshot.wellness().tier, Tier::NeedsAttention);
    }

    #[test]
    fn test_data_dir_snapshot() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "habits.json",
            r#"[{"id": "1", "title": "Run", "category": "fitness"}]"#,
        );
        write(temp_dir.path(), "wellness.json", r#"{"score": 81}"#);
        write(
            temp_dir.path(),
            "streaks.json",
            r#"{"data": [{"habitName": "Run", "currentStreak": 12}]}"#,
        );

        let snapshot = DataDir::new(temp_dir.path()).snapshot();

        assert_eq!(snapshot.habits.len(), 1);
        assert_eq!(snapshot.wellness().tier, Tier::Excellent);
        assert_eq!(snapshot.quick_stats().best_streak, 12);
    }

    #[test]
    fn test_data_dir_missing_and_malformed_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "habits.json", "not json");
        write(temp_dir.path(), "wellness.json", r#"{"score": 55}"#);

        let data_dir = DataDir::new(temp_dir.path());
        assert!(data_dir.load_habits().is_err());
        assert!(matches!(data_dir.load_streaks(), Err(Error::Io(_))));

        let snapshot = data_dir.snapshot();
        assert!(snapshot.habits.is_empty());
        assert!(snapshot.streaks.is_empty());
        assert_eq!(snapshot.wellness_score, 55);
    }

    #[test]
    fn test_load_habits_skips_only_malformed_elements() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "habits.json",
            r#"[
                {"id": "1", "title": "Run", "category": "fitness"},
                {"id": 2, "title": "Read", "goal_value": "1"},
                "not a habit",
                {"id": "3", "title": "Stretch", "loggedToday": "yes"}
            ]"#,
        );

        let habits = DataDir::new(temp_dir.path()).load_habits().unwrap();

        let titles: Vec<_> = habits.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Run", "Read"]);
        assert_eq!(habits[1].id, "2");
        assert_eq!(habits[1].goal_value, 1);
    }

    #[test]
    fn test_load_habits_rejects_non_list() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "habits.json", r#"{"habits": []}"#);

        let data_dir = DataDir::new(temp_dir.path());
        assert!(matches!(data_dir.load_habits(), Err(Error::Payload(_))));
        assert!(data_dir.snapshot().habits.is_empty());
    }
}

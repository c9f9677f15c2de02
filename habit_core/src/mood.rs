//! Mood analytics.
//!
//! Two independent operations:
//! - [`classify_impact`] scans free-text notes for lifestyle keywords
//! - [`summarize`] reduces a mood history to three display insights
//!
//! Percentages and averages round half up, computed in integer arithmetic
//! so that exact `.5` cases never depend on float representation.

use crate::{Mood, MoodEntry};
use serde::{Deserialize, Serialize};

/// Lifestyle factor a mood note is attributed to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactCategory {
    Exercise,
    Water,
    Sleep,
    Meditate,
    General,
}

impl ImpactCategory {
    /// Text sent upstream as `habitsImpact`
    pub fn headline(self) -> &'static str {
        match self {
            ImpactCategory::Exercise => "Exercise helped today",
            ImpactCategory::Water => "Water helped today",
            ImpactCategory::Sleep => "Sleep helped today",
            ImpactCategory::Meditate => "Meditate helped today",
            ImpactCategory::General => "General reflection",
        }
    }

    /// Parse either the lowercase category name or its headline
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let by_name = match label.to_ascii_lowercase().as_str() {
            "exercise" => Some(ImpactCategory::Exercise),
            "water" => Some(ImpactCategory::Water),
            "sleep" => Some(ImpactCategory::Sleep),
            "meditate" => Some(ImpactCategory::Meditate),
            "general" => Some(ImpactCategory::General),
            _ => None,
        };
        by_name.or_else(|| {
            [
                ImpactCategory::Exercise,
                ImpactCategory::Water,
                ImpactCategory::Sleep,
                ImpactCategory::Meditate,
                ImpactCategory::General,
            ]
            .into_iter()
            .find(|c| label.eq_ignore_ascii_case(c.headline()))
        })
    }
}

/// Keyword table, scanned in declaration order. The first category with any
/// substring hit wins, so order decides ties.
const IMPACT_KEYWORDS: [(ImpactCategory, &[&str]); 4] = [
    (
        ImpactCategory::Exercise,
        &["exercise", "gym", "workout", "run", "walk", "yoga"],
    ),
    (ImpactCategory::Water, &["water", "hydrate", "drank", "drink"]),
    (
        ImpactCategory::Sleep,
        &["sleep", "rest", "bed", "tired", "energy"],
    ),
    (
        ImpactCategory::Meditate,
        &["meditate", "mindful", "zen", "calm", "peace"],
    ),
];

/// Attribute mood notes to a habit-impact category
pub fn classify_impact(notes: &str) -> ImpactCategory {
    let lower = notes.to_lowercase();
    IMPACT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(ImpactCategory::General, |(category, _)| *category)
}

/// Numeric mood score out of 5 (unknown moods score 3)
pub fn mood_score(mood: &Mood) -> u32 {
    match mood {
        Mood::Great => 5,
        Mood::Good => 4,
        Mood::Okay => 3,
        Mood::Bad => 2,
        Mood::Terrible => 1,
        Mood::Unknown(_) => 3,
    }
}

/// `round(numer / denom)` with halves rounded up; `denom` must be non-zero
fn round_half_up(numer: u64, denom: u64) -> u64 {
    (2 * numer + denom) / (2 * denom)
}

/// Numeric aggregates behind the mood insights
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoodSummary {
    pub good_day_percent: u32,
    pub total_logs: usize,
    /// Average mood score out of 5
    pub avg_mood: u32,
}

impl MoodSummary {
    /// Compute the summary, or `None` for an empty history
    pub fn compute(history: &[MoodEntry]) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let total = history.len() as u64;
        let good_days = history.iter().filter(|e| e.mood.is_positive()).count() as u64;
        let score_sum: u64 = history.iter().map(|e| u64::from(mood_score(&e.mood))).sum();

        Some(Self {
            good_day_percent: round_half_up(100 * good_days, total) as u32,
            total_logs: history.len(),
            avg_mood: round_half_up(score_sum, total) as u32,
        })
    }

    /// Render as the three display insights, in fixed order
    pub fn insights(&self) -> Vec<Insight> {
        vec![
            Insight {
                emoji: "📈",
                label: "Good Days",
                value: format!("{}%", self.good_day_percent),
                description: "Percentage of positive mood days",
            },
            Insight {
                emoji: "🔥",
                label: "Mood Logs",
                value: self.total_logs.to_string(),
                description: "Total mood entries tracked",
            },
            Insight {
                emoji: "⚡",
                label: "Avg Mood",
                value: format!("{}/5", self.avg_mood),
                description: "Average mood score",
            },
        ]
    }
}

/// A display-ready insight card
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub emoji: &'static str,
    pub label: &'static str,
    pub value: String,
    pub description: &'static str,
}

/// Summarize a mood history into insights (empty history gives none)
pub fn summarize(history: &[MoodEntry]) -> Vec<Insight> {
    MoodSummary::compute(history)
        .map(|summary| summary.insights())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(mood: Mood) -> MoodEntry {
        MoodEntry {
            id: String::new(),
            mood,
            notes: String::new(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            habit_impact: None,
        }
    }

    #[test]
    fn test_classify_impact_examples() {
        assert_eq!(classify_impact("Went for a run today"), ImpactCategory::Exercise);
        assert_eq!(classify_impact("Drank 3L water"), ImpactCategory::Water);
        assert_eq!(classify_impact("just okay"), ImpactCategory::General);
        assert_eq!(classify_impact(""), ImpactCategory::General);
    }

    #[test]
    fn test_classify_impact_first_category_wins() {
        assert_eq!(classify_impact("run and drank water"), ImpactCategory::Exercise);
        assert_eq!(classify_impact("drank water then slept"), ImpactCategory::Water);
        assert_eq!(classify_impact("tired but calm"), ImpactCategory::Sleep);
    }

    #[test]
    fn test_classify_impact_is_case_insensitive_substring() {
        assert_eq!(classify_impact("MEDITATED for ten minutes"), ImpactCategory::Meditate);
        // "bed" inside "bedtime" still counts
        assert_eq!(classify_impact("early bedtime"), ImpactCategory::Sleep);
    }

    #[test]
    fn test_headlines() {
        assert_eq!(ImpactCategory::Exercise.headline(), "Exercise helped today");
        assert_eq!(ImpactCategory::General.headline(), "General reflection");
    }

    #[test]
    fn test_impact_from_label() {
        assert_eq!(
            ImpactCategory::from_label("Sleep helped today"),
            Some(ImpactCategory::Sleep)
        );
        assert_eq!(
            ImpactCategory::from_label("meditate"),
            Some(ImpactCategory::Meditate)
        );
        assert_eq!(
            ImpactCategory::from_label("General reflection"),
            Some(ImpactCategory::General)
        );
        assert_eq!(ImpactCategory::from_label("no idea"), None);
    }

    #[test]
    fn test_mood_scores() {
        assert_eq!(mood_score(&Mood::Great), 5);
        assert_eq!(mood_score(&Mood::Terrible), 1);
        assert_eq!(mood_score(&Mood::Unknown("meh".into())), 3);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[]).is_empty());
        assert!(MoodSummary::compute(&[]).is_none());
    }

    #[test]
    fn test_summarize_great_and_bad() {
        let history = vec![entry(Mood::Great), entry(Mood::Bad)];
        let summary = MoodSummary::compute(&history).unwrap();

        assert_eq!(summary.good_day_percent, 50);
        assert_eq!(summary.total_logs, 2);
        // (5 + 2) / 2 = 3.5 rounds up
        assert_eq!(summary.avg_mood, 4);

        let insights = summarize(&history);
        let values: Vec<_> = insights.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["50%", "2", "4/5"]);
        let labels: Vec<_> = insights.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Good Days", "Mood Logs", "Avg Mood"]);
    }

    #[test]
    fn test_percent_rounding() {
        // 1 of 3 good days = 33.33%
        let history = vec![entry(Mood::Good), entry(Mood::Okay), entry(Mood::Okay)];
        assert_eq!(MoodSummary::compute(&history).unwrap().good_day_percent, 33);

        // 2 of 3 good days = 66.67%
        let history = vec![entry(Mood::Good), entry(Mood::Great), entry(Mood::Okay)];
        assert_eq!(MoodSummary::compute(&history).unwrap().good_day_percent, 67);

        // 5 of 8 good days = 62.5% rounds up
        let mut history: Vec<_> = (0..5).map(|_| entry(Mood::Good)).collect();
        history.extend((0..3).map(|_| entry(Mood::Bad)));
        assert_eq!(MoodSummary::compute(&history).unwrap().good_day_percent, 63);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // (1 + 2) / 2 = 1.5
        let history = vec![entry(Mood::Terrible), entry(Mood::Bad)];
        assert_eq!(MoodSummary::compute(&history).unwrap().avg_mood, 2);

        // (1 + 1 + 2) / 3 = 1.33
        let history = vec![entry(Mood::Terrible), entry(Mood::Terrible), entry(Mood::Bad)];
        assert_eq!(MoodSummary::compute(&history).unwrap().avg_mood, 1);
    }

    #[test]
    fn test_unknown_moods_count_as_okay() {
        let history = vec![entry(Mood::Unknown("ecstatic".into())), entry(Mood::Great)];
        let summary = MoodSummary::compute(&history).unwrap();
        assert_eq!(summary.good_day_percent, 50);
        assert_eq!(summary.avg_mood, 4);
    }

    #[test]
    fn test_summarize_is_repeatable() {
        let history = vec![entry(Mood::Great), entry(Mood::Okay), entry(Mood::Terrible)];
        assert_eq!(summarize(&history), summarize(&history));
        assert_eq!(
            classify_impact("yoga then water"),
            classify_impact("yoga then water")
        );
    }
}

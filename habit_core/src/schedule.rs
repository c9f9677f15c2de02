//! Day-of-week gating for habits with daywise goals.
//!
//! The gate is advisory UI logic. The server enforces its own rules and may
//! still reject a log attempt (see [`crate::LogRejection`]).

use crate::{GoalType, Habit};
use chrono::Weekday;

/// Whether `habit` may be logged on `today`
///
/// Non-daywise habits can always be logged. Daywise habits only on their
/// listed days.
pub fn can_log_today(habit: &Habit, today: Weekday) -> bool {
    match habit.goal_type {
        GoalType::Daywise => habit.days.contains(&today),
        _ => true,
    }
}

/// Habits from `habits` that may be logged on `today`, in input order
pub fn loggable_today(habits: &[Habit], today: Weekday) -> Vec<&Habit> {
    habits.iter().filter(|h| can_log_today(h, today)).collect()
}

/// Short weekday code as shown in the UI
pub fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

impl Habit {
    /// Schedule badge for habits that list days: `✅ Today` or `📅 Mon, Wed`
    pub fn schedule_label(&self, today: Weekday) -> Option<String> {
        if self.days.is_empty() {
            return None;
        }
        if can_log_today(self, today) {
            return Some("✅ Today".to_string());
        }
        let days: Vec<_> = self.days.iter().map(|d| weekday_code(*d)).collect();
        Some(format!("📅 {}", days.join(", ")))
    }
}

//! Category grouping of habit lists.
//!
//! Groups keep first-seen order and habits keep input order within their
//! group. Nothing is sorted.

use crate::Habit;
use serde::Serialize;

/// Group key for habits without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Ordered mapping from category to its habits
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryGroups {
    groups: Vec<(String, Vec<Habit>)>,
}

impl CategoryGroups {
    /// Habits in `category`, if the group exists
    pub fn get(&self, category: &str) -> Option<&[Habit]> {
        self.groups
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, habits)| habits.as_slice())
    }

    /// Category keys in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Habit])> {
        self.groups
            .iter()
            .map(|(key, habits)| (key.as_str(), habits.as_slice()))
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, category: &str, habit: Habit) {
        match self.groups.iter_mut().find(|(key, _)| key == category) {
            Some((_, habits)) => habits.push(habit),
            None => self.groups.push((category.to_string(), vec![habit])),
        }
    }
}

/// Partition habits by category in a single pass
pub fn group_by_category(habits: &[Habit]) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for habit in habits {
        let category = habit.category_key().unwrap_or(UNCATEGORIZED);
        groups.push(category, habit.clone());
    }
    tracing::debug!(
        "Grouped {} habits into {} categories",
        habits.len(),
        groups.len()
    );
    groups
}

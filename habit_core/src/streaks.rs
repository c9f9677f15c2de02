//! Streak aggregation.
//!
//! The streaks endpoint answers in one of three shapes: a bare array, an
//! object with a `streaks` array, or an object with a `data` array.
//! [`StreakPayload`] resolves all of them into one canonical sequence of
//! optional records before anything is computed.

use crate::StreakRecord;
use serde::Deserialize;
use serde_json::Value;

/// Upstream streak payload, in any of its accepted shapes
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum StreakPayload {
    /// `[ {...}, ... ]`
    Bare(Vec<Value>),
    /// `{ "streaks": [ ... ] }`
    Wrapped(Vec<Value>),
    /// `{ "data": [ ... ] }`
    Data(Vec<Value>),
    /// Anything else; resolves to no records
    Unrecognized(Value),
}

impl From<Value> for StreakPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => StreakPayload::Bare(items),
            Value::Object(mut map) => {
                if matches!(map.get("streaks"), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove("streaks") {
                        return StreakPayload::Wrapped(items);
                    }
                }
                if matches!(map.get("data"), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove("data") {
                        return StreakPayload::Data(items);
                    }
                }
                StreakPayload::Unrecognized(Value::Object(map))
            }
            other => StreakPayload::Unrecognized(other),
        }
    }
}

impl StreakPayload {
    /// Resolve into the canonical record sequence
    ///
    /// `null` elements stay as `None` slots. Elements that do not parse as a
    /// streak record also become `None`, with a warning.
    pub fn into_records(self) -> Vec<Option<StreakRecord>> {
        let items = match self {
            StreakPayload::Bare(items)
            | StreakPayload::Wrapped(items)
            | StreakPayload::Data(items) => items,
            StreakPayload::Unrecognized(value) => {
                tracing::warn!("Unrecognized streak payload shape: {}", value);
                return Vec::new();
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                if item.is_null() {
                    return None;
                }
                match serde_json::from_value::<StreakRecord>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("Skipping malformed streak record {}: {}", idx, e);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Best (maximum) current streak across all records
///
/// Empty input and `None` slots count as 0.
pub fn best_streak(records: &[Option<StreakRecord>]) -> u32 {
    records
        .iter()
        .map(|slot| slot.as_ref().map_or(0, StreakRecord::count))
        .max()
        .unwrap_or(0)
}

/// The first `n` slots in upstream order, with empty slots dropped
pub fn top_streaks(records: &[Option<StreakRecord>], n: usize) -> Vec<&StreakRecord> {
    records.iter().take(n).flatten().collect()
}

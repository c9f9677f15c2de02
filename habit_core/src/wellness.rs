//! Wellness score classification.
//!
//! Maps a 0-100 score to a status tier with its display color and trend.
//! Bounds are inclusive lower bounds, checked top-down:
//! - `>= 70` Excellent
//! - `>= 40` Good
//! - otherwise Needs Attention
//!
//! Out-of-range scores are not rejected; they land in the nearest tier.

use serde::Serialize;

/// Lower bound (inclusive) of the Excellent tier
pub const EXCELLENT_FLOOR: i64 = 70;

/// Lower bound (inclusive) of the Good tier
pub const GOOD_FLOOR: i64 = 40;

/// Wellness status tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    NeedsAttention,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::NeedsAttention => "Needs Attention",
        }
    }
}

/// Direction of the trend icon shown next to the score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Flat,
    Down,
}

impl Trend {
    /// Icon name for the trend
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "trending-up",
            Trend::Flat => "minus",
            Trend::Down => "trending-down",
        }
    }
}

/// Classified wellness score
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WellnessStatus {
    pub tier: Tier,
    pub color_token: &'static str,
    pub trend: Trend,
}

impl WellnessStatus {
    /// Warning shown under the score, only for the lowest tier
    pub fn warning(&self) -> Option<&'static str> {
        match self.tier {
            Tier::NeedsAttention => Some(
                "Your wellness score is dropping! Try to be more consistent with your habits.",
            ),
            _ => None,
        }
    }
}

/// Classify a wellness score
pub fn classify(score: i64) -> WellnessStatus {
    if score >= EXCELLENT_FLOOR {
        WellnessStatus {
            tier: Tier::Excellent,
            color_token: "hsl(142, 40%, 45%)",
            trend: Trend::Up,
        }
    } else if score >= GOOD_FLOOR {
        WellnessStatus {
            tier: Tier::Good,
            color_token: "hsl(45, 80%, 55%)",
            trend: Trend::Flat,
        }
    } else {
        WellnessStatus {
            tier: Tier::NeedsAttention,
            color_token: "hsl(0, 70%, 60%)",
            trend: Trend::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(100).tier, Tier::Excellent);
        assert_eq!(classify(70).tier, Tier::Excellent);
        assert_eq!(classify(69).tier, Tier::Good);
        assert_eq!(classify(40).tier, Tier::Good);
        assert_eq!(classify(39).tier, Tier::NeedsAttention);
        assert_eq!(classify(0).tier, Tier::NeedsAttention);
    }

    #[test]
    fn test_trend_follows_tier() {
        assert_eq!(classify(85).trend, Trend::Up);
        assert_eq!(classify(55).trend, Trend::Flat);
        assert_eq!(classify(10).trend, Trend::Down);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(classify(250).tier, Tier::Excellent);
        assert_eq!(classify(-5).tier, Tier::NeedsAttention);
    }

    #[test]
    fn test_warning_only_when_low() {
        assert!(classify(39).warning().is_some());
        assert!(classify(40).warning().is_none());
        assert!(classify(90).warning().is_none());
    }

    #[test]
    fn test_labels_and_colors() {
        let status = classify(20);
        assert_eq!(status.tier.label(), "Needs Attention");
        assert_eq!(status.color_token, "hsl(0, 70%, 60%)");
        assert_eq!(status.trend.icon(), "trending-down");
    }

    #[test]
    fn test_classify_is_repeatable() {
        for score in [-1, 0, 39, 40, 69, 70, 100, 101] {
            assert_eq!(classify(score), classify(score));
        }
    }
}

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Score band for `Category::Dormant`.
pub const DORMANT_RANGE: RangeInclusive<i64> = 10..=24;
/// Score band for `Category::Growing`.
pub const GROWING_RANGE: RangeInclusive<i64> = 25..=39;

/// Feedback band derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dormant,
    Growing,
    High,
}

impl Category {
    /// Classify a total score.
    ///
    /// Anything outside the dormant and growing bands is `High`, including
    /// scores below the dormant band.
    #[must_use]
    pub fn from_score(score: i64) -> Self {
        if DORMANT_RANGE.contains(&score) {
            Category::Dormant
        } else if GROWING_RANGE.contains(&score) {
            Category::Growing
        } else {
            Category::High
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dormant => "dormant",
            Category::Growing => "growing",
            Category::High => "high",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

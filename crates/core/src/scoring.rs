//! Score computation over an answer snapshot.

use crate::model::{AnswerStore, Category};

/// Sum of every numeric answer whose field is not free text.
#[must_use]
pub fn total_score(answers: &AnswerStore) -> i64 {
    answers
        .iter()
        .filter(|(field, _)| !field.is_free_text())
        .filter_map(|(_, value)| value.as_score())
        .fold(0_i64, i64::saturating_add)
}

/// Derived result of a completed survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub total_score: i64,
    pub category: Category,
}

impl ScoreCard {
    #[must_use]
    pub fn from_answers(answers: &AnswerStore) -> Self {
        let total_score = total_score(answers);
        Self {
            total_score,
            category: Category::from_score(total_score),
        }
    }

    /// Value the results counter animates up to. Negative totals display as zero.
    #[must_use]
    pub fn display_target(&self) -> u32 {
        u32::try_from(self.total_score.max(0)).unwrap_or(u32::MAX)
    }
}

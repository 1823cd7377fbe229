use std::collections::BTreeMap;

use serde::Serialize;

use survey_core::model::{AnswerStore, AnswerValue, Category};
use survey_core::scoring::ScoreCard;

const TOTAL_SCORE_KEY: &str = "totalScore";
const CATEGORY_KEY: &str = "category";

/// JSON body posted for a completed survey.
///
/// Every answer appears as a top-level field next to `totalScore` and
/// `category`. Answers using either of those two names are dropped so the
/// derived values win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    answers: BTreeMap<String, AnswerValue>,
    #[serde(rename = "totalScore")]
    total_score: i64,
    category: Category,
}

impl SubmissionPayload {
    #[must_use]
    pub fn new(answers: &AnswerStore, score: ScoreCard) -> Self {
        let answers = answers
            .iter()
            .filter(|(field, _)| !matches!(field.as_str(), TOTAL_SCORE_KEY | CATEGORY_KEY))
            .map(|(field, value)| (field.to_string(), value.clone()))
            .collect();
        Self {
            answers,
            total_score: score.total_score,
            category: score.category,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<String, AnswerValue> {
        &self.answers
    }

    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

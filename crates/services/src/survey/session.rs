use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use survey_core::model::{
    AnswerStore, AnswerValue, Direction, FieldName, Question, QuestionCatalog, StepChange,
    StepController,
};
use survey_core::scoring::ScoreCard;

use super::progress::SurveyProgress;

//
// ─── NAVIGATION RESULT ─────────────────────────────────────────────────────────
//

/// Outcome of a navigation request on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Moved to another question step.
    Moved { step: usize },
    /// Out of bounds; nothing changed.
    Ignored,
    /// Just entered the results phase. Emitted once per entry.
    EnteredResults(ScoreCard),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory survey session: step position, answers and the derived score.
///
/// The session is the explicit context passed to every component; nothing
/// about it is global. Scoring happens only on the transition into the
/// results phase, so later answer changes do not re-score.
pub struct SurveySession {
    catalog: Arc<QuestionCatalog>,
    steps: StepController,
    answers: AnswerStore,
    score: Option<ScoreCard>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SurveySession {
    #[must_use]
    pub fn new(catalog: Arc<QuestionCatalog>, started_at: DateTime<Utc>) -> Self {
        let steps = StepController::new(catalog.len());
        Self {
            catalog,
            steps,
            answers: AnswerStore::new(),
            score: None,
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn current_step(&self) -> usize {
        self.steps.current()
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.steps.total_steps()
    }

    #[must_use]
    pub fn is_first_step(&self) -> bool {
        self.steps.is_first()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.steps.is_last_question()
    }

    #[must_use]
    pub fn is_results(&self) -> bool {
        self.steps.is_results()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Score computed when the results phase was entered.
    #[must_use]
    pub fn score(&self) -> Option<ScoreCard> {
        self.score
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.steps
            .question_index()
            .and_then(|index| self.catalog.get(index))
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|question| self.answers.get(question.field_name().as_str()))
    }

    /// True when the current question holds a numeric answer.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_answer()
            .and_then(AnswerValue::as_score)
            .is_some()
    }

    /// Record an answer for any field, returning the replaced value.
    pub fn record_answer(
        &mut self,
        field_name: FieldName,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.answers.record(field_name, value)
    }

    /// Move one step in `direction`. `at` stamps completion when results are entered.
    pub fn navigate(&mut self, direction: Direction, at: DateTime<Utc>) -> Navigation {
        let was_results = self.steps.is_results();
        match self.steps.advance(direction) {
            StepChange::Ignored => Navigation::Ignored,
            StepChange::Moved { .. } if self.steps.is_results() && !was_results => {
                let score = ScoreCard::from_answers(&self.answers.snapshot());
                self.score = Some(score);
                self.completed_at = Some(at);
                Navigation::EnteredResults(score)
            }
            StepChange::Moved { to, .. } => {
                if was_results {
                    self.score = None;
                    self.completed_at = None;
                }
                Navigation::Moved { step: to }
            }
        }
    }

    #[must_use]
    pub fn progress(&self) -> SurveyProgress {
        SurveyProgress {
            step: self.steps.current(),
            total_questions: self.steps.question_count(),
            answered: self
                .catalog
                .questions()
                .iter()
                .filter(|question| self.answers.contains(question.field_name().as_str()))
                .count(),
            is_results: self.steps.is_results(),
        }
    }
}

impl fmt::Debug for SurveySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurveySession")
            .field("step", &self.steps.current())
            .field("total_steps", &self.steps.total_steps())
            .field("answers_len", &self.answers.len())
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::model::{Category, QuestionId};
    use survey_core::time::fixed_now;

    fn catalog(n: u32) -> Arc<QuestionCatalog> {
        let questions = (1..=n)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Question {id}"),
                    FieldName::new(format!("q{id}")).unwrap(),
                )
            })
            .collect();
        Arc::new(QuestionCatalog::new(questions).unwrap())
    }

    fn answer_current(session: &mut SurveySession, value: i64) {
        let field = session.current_question().unwrap().field_name().clone();
        session.record_answer(field, value);
    }

    #[test]
    fn walks_questions_in_order() {
        let mut session = SurveySession::new(catalog(2), fixed_now());
        assert_eq!(session.current_question().unwrap().text(), "Question 1");
        assert!(!session.can_advance());

        answer_current(&mut session, 4);
        assert!(session.can_advance());
        assert_eq!(
            session.navigate(Direction::Next, fixed_now()),
            Navigation::Moved { step: 2 }
        );
        assert_eq!(session.current_question().unwrap().text(), "Question 2");
        assert!(session.is_last_question());
    }

    #[test]
    fn entering_results_scores_once() {
        let mut session = SurveySession::new(catalog(3), fixed_now());
        for _ in 0..3 {
            answer_current(&mut session, 5);
            session.navigate(Direction::Next, fixed_now());
        }

        assert!(session.is_results());
        let score = session.score().unwrap();
        assert_eq!(score.total_score, 15);
        assert_eq!(score.category, Category::Dormant);
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert_eq!(session.navigate(Direction::Next, fixed_now()), Navigation::Ignored);
    }

    #[test]
    fn answers_recorded_in_results_do_not_rescore() {
        let mut session = SurveySession::new(catalog(1), fixed_now());
        answer_current(&mut session, 2);
        let nav = session.navigate(Direction::Next, fixed_now());
        assert!(matches!(nav, Navigation::EnteredResults(card) if card.total_score == 2));

        session.record_answer(FieldName::new("q1").unwrap(), 5_i64);
        assert_eq!(session.score().unwrap().total_score, 2);
    }

    #[test]
    fn leaving_and_reentering_results_is_a_new_transition() {
        let mut session = SurveySession::new(catalog(1), fixed_now());
        answer_current(&mut session, 2);
        session.navigate(Direction::Next, fixed_now());

        assert_eq!(
            session.navigate(Direction::Prev, fixed_now()),
            Navigation::Moved { step: 1 }
        );
        assert!(session.score().is_none());
        answer_current(&mut session, 4);

        let nav = session.navigate(Direction::Next, fixed_now());
        assert!(matches!(nav, Navigation::EnteredResults(card) if card.total_score == 4));
    }

    #[test]
    fn revisiting_a_question_shows_previous_answer() {
        let mut session = SurveySession::new(catalog(2), fixed_now());
        answer_current(&mut session, 3);
        session.navigate(Direction::Next, fixed_now());
        session.navigate(Direction::Prev, fixed_now());
        assert_eq!(session.current_answer(), Some(&AnswerValue::Scale(3)));
    }

    #[test]
    fn progress_counts_catalog_answers_only() {
        let mut session = SurveySession::new(catalog(3), fixed_now());
        answer_current(&mut session, 1);
        session.record_answer(FieldName::new("missionstatement").unwrap(), "text");

        let progress = session.progress();
        assert_eq!(progress.step, 1);
        assert_eq!(progress.total_questions, 3);
        assert_eq!(progress.answered, 1);
        assert!(!progress.is_results);
    }
}

use services::{FlowStep, SurveyCompletion, SurveyFlowService, SurveySession};
use survey_core::model::{AnswerValue, Direction};
use survey_core::scoring::ScoreCard;

/// The five Likert options, lowest first.
pub const LIKERT_SCALE: [(u8, &str); 5] = [
    (1, "Strongly Disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly Agree"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurveyIntent {
    Answer(u8),
    Navigate(Direction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurveyOutcome {
    Continue,
    Completed(SurveyCompletion),
}

pub struct SurveyVm {
    session: SurveySession,
}

impl SurveyVm {
    #[must_use]
    pub fn new(session: SurveySession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    #[must_use]
    pub fn is_results(&self) -> bool {
        self.session.is_results()
    }

    #[must_use]
    pub fn score(&self) -> Option<ScoreCard> {
        self.session.score()
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.session.current_question().map(|question| question.text())
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.session.progress();
        format!("Question {} of {}", progress.step, progress.total_questions)
    }

    /// Likert value already recorded for the current question.
    #[must_use]
    pub fn selected(&self) -> Option<u8> {
        self.session
            .current_answer()
            .and_then(AnswerValue::as_score)
            .and_then(|score| u8::try_from(score).ok())
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.session.is_first_step()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.session.can_advance()
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.session.is_last_question() {
            "Finish"
        } else {
            "Next"
        }
    }

    pub fn answer(&mut self, flow: &SurveyFlowService, value: u8) {
        let Some(field_name) = self
            .session
            .current_question()
            .map(|question| question.field_name().clone())
        else {
            return;
        };
        flow.answer(&mut self.session, field_name, value);
    }

    pub fn navigate(&mut self, flow: &SurveyFlowService, direction: Direction) -> SurveyOutcome {
        match flow.navigate(&mut self.session, direction) {
            FlowStep::Completed(completion) => SurveyOutcome::Completed(completion),
            FlowStep::Moved { .. } | FlowStep::Ignored => SurveyOutcome::Continue,
        }
    }
}

#[must_use]
pub fn start_survey(flow: &SurveyFlowService) -> SurveyVm {
    SurveyVm::new(flow.start_session())
}

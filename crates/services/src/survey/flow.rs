use std::sync::Arc;

use survey_core::Clock;
use survey_core::model::{AnswerValue, Direction, FieldName, QuestionCatalog};
use survey_core::scoring::ScoreCard;

use crate::submission::{SubmissionOutcome, SubmissionPayload, SubmissionService};

use super::session::{Navigation, SurveySession};

/// Everything produced by finishing the survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyCompletion {
    pub score: ScoreCard,
    pub payload: SubmissionPayload,
}

/// Result of a navigation request routed through the flow service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    Moved { step: usize },
    Ignored,
    Completed(SurveyCompletion),
}

/// Orchestrates sessions over a shared catalog and hands completions to the
/// submission service.
#[derive(Clone, Debug)]
pub struct SurveyFlowService {
    clock: Clock,
    catalog: Arc<QuestionCatalog>,
    submissions: Arc<SubmissionService>,
}

impl SurveyFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<QuestionCatalog>,
        submissions: Arc<SubmissionService>,
    ) -> Self {
        Self {
            clock,
            catalog,
            submissions,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    #[must_use]
    pub fn start_session(&self) -> SurveySession {
        let session = SurveySession::new(Arc::clone(&self.catalog), self.clock.now());
        tracing::info!(questions = self.catalog.len(), "survey session started");
        session
    }

    pub fn answer(
        &self,
        session: &mut SurveySession,
        field_name: FieldName,
        value: impl Into<AnswerValue>,
    ) {
        let value = value.into();
        tracing::debug!(field = %field_name, value = %value, "answer recorded");
        session.record_answer(field_name, value);
    }

    /// Move the session and, on entering results, build the submission payload.
    pub fn navigate(&self, session: &mut SurveySession, direction: Direction) -> FlowStep {
        match session.navigate(direction, self.clock.now()) {
            Navigation::Ignored => {
                tracing::debug!(?direction, step = session.current_step(), "navigation ignored");
                FlowStep::Ignored
            }
            Navigation::Moved { step } => {
                tracing::debug!(?direction, step, "step changed");
                FlowStep::Moved { step }
            }
            Navigation::EnteredResults(score) => {
                let elapsed = session
                    .completed_at()
                    .map(|done| (done - session.started_at()).num_seconds());
                tracing::info!(
                    total_score = score.total_score,
                    category = %score.category,
                    elapsed_secs = elapsed,
                    "survey completed"
                );
                FlowStep::Completed(SurveyCompletion {
                    score,
                    payload: SubmissionPayload::new(session.answers(), score),
                })
            }
        }
    }

    /// One best-effort submission attempt. Never fails.
    pub async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        self.submissions.submit(payload).await
    }
}

mod results_vm;
mod survey_vm;

pub use results_vm::{BonusPanel, PresenterPhase, PresenterTimings, ResultsPresenter, RevealStage};
pub use survey_vm::{LIKERT_SCALE, SurveyIntent, SurveyOutcome, SurveyVm, start_survey};

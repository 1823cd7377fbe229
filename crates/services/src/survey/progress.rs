/// Aggregated view of survey progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyProgress {
    pub step: usize,
    pub total_questions: usize,
    pub answered: usize,
    pub is_results: bool,
}

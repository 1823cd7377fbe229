mod flow;
mod progress;
mod session;

pub use flow::{FlowStep, SurveyCompletion, SurveyFlowService};
pub use progress::SurveyProgress;
pub use session::{Navigation, SurveySession};

mod question;
mod results;
mod survey;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use question::{LikertQuestion, StepperControl};
pub use results::ResultsView;
pub use survey::SurveyView;

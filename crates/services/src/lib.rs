#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod submission;
pub mod survey;

pub use survey_core::Clock;

pub use app_services::{AppServices, load_catalog};
pub use config::SubmissionConfig;
pub use error::{AppServicesError, ConfigError, SubmissionError};
pub use submission::{
    HttpSubmissionSink, SubmissionOutcome, SubmissionPayload, SubmissionReceipt, SubmissionService,
    SubmissionSink,
};
pub use survey::{
    FlowStep, Navigation, SurveyCompletion, SurveyFlowService, SurveyProgress, SurveySession,
};

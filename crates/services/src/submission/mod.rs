mod payload;
mod service;
mod sink;

pub use payload::SubmissionPayload;
pub use service::{SubmissionOutcome, SubmissionService};
pub use sink::{HttpSubmissionSink, SubmissionReceipt, SubmissionSink};

pub use reqwest::StatusCode;

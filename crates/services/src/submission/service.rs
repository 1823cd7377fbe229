use std::fmt;
use std::sync::Arc;

use super::{SubmissionPayload, SubmissionReceipt, SubmissionSink};

/// How a best-effort submission ended. Never an error for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered(SubmissionReceipt),
    Failed { reason: String },
    Skipped,
}

/// Fire-and-forget telemetry sink for completed surveys.
///
/// One attempt per call. Failures are logged and swallowed; nothing is retried.
#[derive(Clone)]
pub struct SubmissionService {
    sink: Option<Arc<dyn SubmissionSink>>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// A service that never sends anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub async fn submit(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let Some(sink) = self.sink.as_ref() else {
            tracing::debug!("submission disabled; skipping");
            return SubmissionOutcome::Skipped;
        };

        match sink.send(payload).await {
            Ok(receipt) => {
                tracing::info!(
                    status = receipt.status,
                    body = %receipt.body,
                    total_score = payload.total_score(),
                    category = %payload.category(),
                    "survey submitted"
                );
                SubmissionOutcome::Delivered(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %err, "survey submission failed");
                SubmissionOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

impl fmt::Debug for SubmissionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionService")
            .field("enabled", &self.enabled())
            .finish()
    }
}

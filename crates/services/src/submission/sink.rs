use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::SubmissionConfig;
use crate::error::SubmissionError;

use super::SubmissionPayload;

/// What the endpoint sent back. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub body: String,
}

/// Transport for completed surveys. Implementations make exactly one attempt.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `SubmissionError` on transport failure or a non-2xx status.
    async fn send(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Posts payloads as JSON to the configured endpoint.
#[derive(Clone, Debug)]
pub struct HttpSubmissionSink {
    client: Client,
    endpoint: Url,
}

impl HttpSubmissionSink {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: &SubmissionConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn send(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(%status, error = %err, "failed to read submission response body");
                String::new()
            }
        };
        if !status.is_success() {
            return Err(SubmissionError::HttpStatus { status, body });
        }

        Ok(SubmissionReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

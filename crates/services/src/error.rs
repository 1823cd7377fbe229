//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use survey_core::model::CatalogError;

/// Errors from a single submission attempt.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("submission endpoint answered with status {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors raised while reading submission settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL {raw:?}: {reason}")]
    InvalidBaseUrl { raw: String, reason: String },
    #[error("API base URL must use http or https: {raw}")]
    UnsupportedScheme { raw: String },
    #[error("invalid request timeout {raw:?}: expected whole seconds > 0")]
    InvalidTimeout { raw: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("cannot read question catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

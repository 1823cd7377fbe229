use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://petimus-utc-survey-api.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const SUBMISSION_PATH: &str = "user";

/// Where and how completed surveys are posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionConfig {
    endpoint: Url,
    timeout: Duration,
    enabled: bool,
}

impl SubmissionConfig {
    /// Build a config posting to `{base_url}/user`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL does not parse or is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: submission_endpoint(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            enabled: true,
        })
    }

    /// Read `SURVEY_API_BASE_URL`, `SURVEY_API_TIMEOUT_SECS` and `SURVEY_SUBMIT`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SubmissionConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for malformed values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("SURVEY_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let mut config = Self::new(&base_url)?;

        if let Some(raw) = lookup("SURVEY_API_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&raw)?;
        }
        if let Some(raw) = lookup("SURVEY_SUBMIT") {
            config.enabled = !matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "0" | "off" | "false" | "no"
            );
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` unless `raw` is a positive number of seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        }),
    }
}

fn submission_endpoint(base_url: &str) -> Result<Url, ConfigError> {
    let raw = base_url.trim();
    let joined = format!("{}/{SUBMISSION_PATH}", raw.trim_end_matches('/'));
    let url = Url::parse(&joined).map_err(|err| ConfigError::InvalidBaseUrl {
        raw: raw.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            raw: raw.to_string(),
        });
    }
    Ok(url)
}

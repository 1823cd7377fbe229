use std::path::Path;
use std::sync::Arc;

use survey_core::model::QuestionCatalog;

use crate::Clock;
use crate::config::SubmissionConfig;
use crate::error::AppServicesError;
use crate::submission::{HttpSubmissionSink, SubmissionService};
use crate::survey::SurveyFlowService;

/// Load the catalog from a JSON file, or the bundled one when no path is given.
///
/// # Errors
///
/// Returns `AppServicesError` if the file cannot be read or fails validation.
pub fn load_catalog(path: Option<&Path>) -> Result<QuestionCatalog, AppServicesError> {
    let Some(path) = path else {
        return Ok(QuestionCatalog::bundled()?);
    };
    let json = std::fs::read_to_string(path).map_err(|source| AppServicesError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(QuestionCatalog::from_json_str(&json)?)
}

/// Assembles app-facing services.
#[derive(Clone, Debug)]
pub struct AppServices {
    survey_flow: Arc<SurveyFlowService>,
}

impl AppServices {
    /// Build services posting completions over HTTP (unless disabled in `config`).
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn new(
        catalog: QuestionCatalog,
        config: &SubmissionConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let submissions = if config.enabled() {
            let sink = HttpSubmissionSink::new(config)?;
            tracing::info!(endpoint = %sink.endpoint(), "survey submissions enabled");
            SubmissionService::new(Arc::new(sink))
        } else {
            tracing::info!("survey submissions disabled");
            SubmissionService::disabled()
        };
        Ok(Self::with_submissions(catalog, submissions, clock))
    }

    #[must_use]
    pub fn with_submissions(
        catalog: QuestionCatalog,
        submissions: SubmissionService,
        clock: Clock,
    ) -> Self {
        let survey_flow = Arc::new(SurveyFlowService::new(
            clock,
            Arc::new(catalog),
            Arc::new(submissions),
        ));
        Self { survey_flow }
    }

    #[must_use]
    pub fn survey_flow(&self) -> Arc<SurveyFlowService> {
        Arc::clone(&self.survey_flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn bundled_catalog_loads_without_path() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn missing_catalog_file_reports_path() {
        let path = PathBuf::from("/definitely/not/here/questions.json");
        let err = load_catalog(Some(&path)).unwrap_err();
        assert!(matches!(err, AppServicesError::CatalogRead { path: ref p, .. } if *p == path));
    }

    #[test]
    fn disabled_config_builds_without_http_client() {
        let config = SubmissionConfig::new("http://localhost:3001")
            .unwrap()
            .with_enabled(false);
        let services = AppServices::new(load_catalog(None).unwrap(), &config, Clock::system())
            .unwrap();
        assert!(!services.survey_flow().submissions().enabled());
    }
}

use std::sync::Arc;

use services::SurveyFlowService;

use crate::platform::LinkOpenerRef;
use crate::vm::PresenterTimings;

pub trait UiApp: Send + Sync {
    fn survey_flow(&self) -> Arc<SurveyFlowService>;
    fn link_opener(&self) -> LinkOpenerRef;

    fn presenter_timings(&self) -> PresenterTimings {
        PresenterTimings::default()
    }
}

#[derive(Clone)]
pub struct AppContext {
    survey_flow: Arc<SurveyFlowService>,
    link_opener: LinkOpenerRef,
    presenter_timings: PresenterTimings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            survey_flow: app.survey_flow(),
            link_opener: app.link_opener(),
            presenter_timings: app.presenter_timings(),
        }
    }

    #[must_use]
    pub fn survey_flow(&self) -> Arc<SurveyFlowService> {
        Arc::clone(&self.survey_flow)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }

    #[must_use]
    pub fn presenter_timings(&self) -> PresenterTimings {
        self.presenter_timings
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::submission::StatusCode;
use services::{
    SubmissionError, SubmissionPayload, SubmissionReceipt, SubmissionService, SubmissionSink,
    SurveyFlowService,
};
use survey_core::Clock;
use survey_core::model::QuestionCatalog;
use survey_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::SurveyView;
use crate::views::survey::SurveyTestHandles;
use crate::vm::PresenterTimings;

pub const THREE_QUESTIONS: &str = r#"{"questions": [
    {"questionId": 1, "questionText": "I set the tone for my team.", "fieldName": "q1"},
    {"questionId": 2, "questionText": "People seek out my advice.", "fieldName": "q2"},
    {"questionId": 3, "questionText": "I invest in others on purpose.", "fieldName": "q3"}
]}"#;

#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<SubmissionPayload>>,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn send(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        self.sent.lock().expect("sink lock").push(payload.clone());
        if self.fail {
            return Err(SubmissionError::HttpStatus {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "unavailable".to_string(),
            });
        }
        Ok(SubmissionReceipt {
            status: 201,
            body: "{}".to_string(),
        })
    }
}

struct IgnoreLinks;

impl UiLinkOpener for IgnoreLinks {
    fn open_url(&self, _url: &str) {}
}

struct TestApp {
    survey_flow: Arc<SurveyFlowService>,
    timings: PresenterTimings,
}

impl UiApp for TestApp {
    fn survey_flow(&self) -> Arc<SurveyFlowService> {
        Arc::clone(&self.survey_flow)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(IgnoreLinks)
    }

    fn presenter_timings(&self) -> PresenterTimings {
        self.timings
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: SurveyTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { SurveyView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sink: Arc<RecordingSink>,
    pub handles: SurveyTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep driving until the rendered HTML contains `needle` or the budget runs out.
    pub async fn drive_until(&mut self, needle: &str, max_rounds: usize) -> String {
        for _ in 0..max_rounds {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Timings short enough to play the whole results timeline in a test.
pub fn fast_timings() -> PresenterTimings {
    PresenterTimings {
        count_tick: Duration::from_millis(1),
        settle: Duration::from_millis(1),
        action_plan: Duration::from_millis(2),
        bonus: Duration::from_millis(3),
        call_to_action: Duration::from_millis(4),
    }
}

pub fn setup_view_harness(sink: RecordingSink, timings: PresenterTimings) -> ViewHarness {
    let catalog = QuestionCatalog::from_json_str(THREE_QUESTIONS).expect("catalog");
    let sink = Arc::new(sink);
    let submissions = SubmissionService::new(sink.clone());
    let survey_flow = Arc::new(SurveyFlowService::new(
        Clock::fixed(fixed_now()),
        Arc::new(catalog),
        Arc::new(submissions),
    ));
    let handles = SurveyTestHandles::default();

    let app = Arc::new(TestApp {
        survey_flow,
        timings,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        sink,
        handles,
    }
}

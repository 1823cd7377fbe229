use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use services::{
    AppServices, Clock, FlowStep, SubmissionError, SubmissionOutcome, SubmissionPayload,
    SubmissionReceipt, SubmissionService, SubmissionSink,
};
use survey_core::model::{Category, Direction, QuestionCatalog};
use survey_core::time::fixed_now;

const THREE_QUESTIONS: &str = r#"{"questions":[
    {"questionId":1,"questionText":"First","fieldName":"q1"},
    {"questionId":2,"questionText":"Second","fieldName":"q2"},
    {"questionId":3,"questionText":"Third","fieldName":"q3"}
]}"#;

#[derive(Default)]
struct RecordingSink {
    sent: Mutex<Vec<serde_json::Value>>,
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn send(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        self.sent
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload).unwrap());
        Ok(SubmissionReceipt {
            status: 200,
            body: String::new(),
        })
    }
}

struct OfflineSink;

#[async_trait]
impl SubmissionSink for OfflineSink {
    async fn send(&self, _payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::HttpStatus {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        })
    }
}

fn services_with(sink: Arc<dyn SubmissionSink>) -> AppServices {
    AppServices::with_submissions(
        QuestionCatalog::from_json_str(THREE_QUESTIONS).unwrap(),
        SubmissionService::new(sink),
        Clock::fixed(fixed_now()),
    )
}

#[tokio::test]
async fn three_fives_submit_a_dormant_payload() {
    let sink = Arc::new(RecordingSink::default());
    let services = services_with(sink.clone());
    let flow = services.survey_flow();
    let mut session = flow.start_session();

    let mut completion = None;
    while !session.is_results() {
        let field = session.current_question().unwrap().field_name().clone();
        flow.answer(&mut session, field, 5_i64);
        if let FlowStep::Completed(done) = flow.navigate(&mut session, Direction::Next) {
            completion = Some(done);
        }
    }

    let completion = completion.expect("results entered");
    assert_eq!(completion.score.total_score, 15);
    assert_eq!(completion.score.category, Category::Dormant);

    let outcome = flow.submit(&completion.payload).await;
    assert!(matches!(outcome, SubmissionOutcome::Delivered(_)));

    let sent = sink.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        json!({"q1": 5, "q2": 5, "q3": 5, "totalScore": 15, "category": "dormant"})
    );
}

#[tokio::test]
async fn results_phase_fires_once_until_left() {
    let services = services_with(Arc::new(RecordingSink::default()));
    let flow = services.survey_flow();
    let mut session = flow.start_session();

    let mut completions = 0;
    for _ in 0..10 {
        if let Some(question) = session.current_question() {
            let field = question.field_name().clone();
            flow.answer(&mut session, field, 3_i64);
        }
        if matches!(flow.navigate(&mut session, Direction::Next), FlowStep::Completed(_)) {
            completions += 1;
        }
        assert!((1..=session.total_steps()).contains(&session.current_step()));
    }
    assert_eq!(completions, 1);
    assert_eq!(flow.navigate(&mut session, Direction::Next), FlowStep::Ignored);
}

#[tokio::test]
async fn failed_submission_leaves_session_untouched() {
    let services = services_with(Arc::new(OfflineSink));
    let flow = services.survey_flow();
    let mut session = flow.start_session();
    for _ in 0..3 {
        let field = session.current_question().unwrap().field_name().clone();
        flow.answer(&mut session, field, 4_i64);
        flow.navigate(&mut session, Direction::Next);
    }
    let score_before = session.score();
    let payload = SubmissionPayload::new(session.answers(), score_before.unwrap());

    let outcome = flow.submit(&payload).await;

    assert!(matches!(outcome, SubmissionOutcome::Failed { .. }));
    assert!(session.is_results());
    assert_eq!(session.score(), score_before);
    assert_eq!(session.score().unwrap().category, Category::Dormant);
}

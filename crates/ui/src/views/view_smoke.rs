use dioxus::prelude::ReadableExt;
use survey_core::model::{Category, Direction};

use crate::vm::{PresenterTimings, SurveyIntent};

use super::test_harness::{
    RecordingSink, ViewHarness, drive_dom, fast_timings, setup_view_harness,
};

fn answer_and_advance(harness: &mut ViewHarness, value: u8) {
    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer(value));
    drive_dom(&mut harness.dom);
    dispatch.call(SurveyIntent::Navigate(Direction::Next));
    drive_dom(&mut harness.dom);
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(RecordingSink::default(), PresenterTimings::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("I set the tone for my team."), "missing question in {html}");
    assert!(html.contains("Strongly Disagree"), "missing scale in {html}");
    assert!(html.contains("Strongly Agree"), "missing scale in {html}");
    assert!(html.contains("Back"), "missing back button in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
    assert!(!html.contains("Finish"), "unexpected finish in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_highlights_revisited_answer() {
    let mut harness = setup_view_harness(RecordingSink::default(), PresenterTimings::default());
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(SurveyIntent::Answer(4));
    drive_dom(&mut harness.dom);
    assert!(harness.render().contains("likert-option--selected"));

    dispatch.call(SurveyIntent::Navigate(Direction::Next));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "missing progress in {html}");
    assert!(!html.contains("likert-option--selected"), "stale highlight in {html}");

    dispatch.call(SurveyIntent::Navigate(Direction::Prev));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("likert-option--selected"), "missing highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_labels_last_step_finish() {
    let mut harness = setup_view_harness(RecordingSink::default(), PresenterTimings::default());
    harness.rebuild();
    answer_and_advance(&mut harness, 2);
    answer_and_advance(&mut harness, 2);

    let html = harness.render();
    assert!(html.contains("Question 3 of 3"), "missing progress in {html}");
    assert!(html.contains("Finish"), "missing finish label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finishing_survey_submits_once_and_hides_navigation() {
    let mut harness = setup_view_harness(RecordingSink::default(), PresenterTimings::default());
    harness.rebuild();
    for _ in 0..3 {
        answer_and_advance(&mut harness, 5);
    }
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Your Personal Impact Score"), "missing heading in {html}");
    assert!(!html.contains("survey-next"), "navigation still shown in {html}");
    assert!(!html.contains("Question 3 of 3"), "question still shown in {html}");

    let sent = harness.sink.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].total_score(), 15);
    assert_eq!(sent[0].category(), Category::Dormant);

    harness
        .handles
        .dispatch()
        .call(SurveyIntent::Navigate(Direction::Next));
    harness.drive_async().await;
    assert_eq!(harness.sink.sent().len(), 1);
    assert_eq!(
        harness.handles.vm().read().score().map(|score| score.total_score),
        Some(15)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_reveals_sections_in_order() {
    let mut harness = setup_view_harness(RecordingSink::default(), fast_timings());
    harness.rebuild();
    for _ in 0..3 {
        answer_and_advance(&mut harness, 5);
    }

    let html = harness.render();
    assert!(!html.contains("Dormant Potential"), "category shown early in {html}");
    assert!(!html.contains("Join Focus Friday Email"), "cta shown early in {html}");

    let html = harness.drive_until("Join Focus Friday Email", 200).await;
    assert!(html.contains("Join Focus Friday Email"), "missing cta in {html}");
    assert!(html.contains("Dormant Potential"), "missing category in {html}");
    assert!(html.contains("Your Action Plan"), "missing action plan in {html}");
    assert!(html.contains("1-Day Influence Accelerator"), "missing bonus in {html}");
    assert!(html.contains(">15<"), "missing final score in {html}");
    assert!(!html.contains("Morning"), "bonus should start collapsed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submission_failure_does_not_block_results() {
    let mut harness = setup_view_harness(RecordingSink::failing(), fast_timings());
    harness.rebuild();
    for _ in 0..3 {
        answer_and_advance(&mut harness, 1);
    }

    let html = harness.drive_until("Join Focus Friday Email", 200).await;
    assert!(html.contains("Join Focus Friday Email"), "missing cta in {html}");
    // 3 is outside both bands.
    assert!(html.contains("High-Impact Leader"), "missing category in {html}");
    assert_eq!(harness.sink.sent().len(), 1);
}

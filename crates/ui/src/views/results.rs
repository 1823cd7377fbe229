use dioxus::prelude::*;
use survey_core::model::feedback::{BONUS_PLAN, CALL_TO_ACTION, SCORE_HEADING, SCORE_RANGE_HINT};
use survey_core::scoring::ScoreCard;

use crate::context::AppContext;
use crate::vm::{BonusPanel, ResultsPresenter, RevealStage};

#[component]
pub fn ResultsView(score: ScoreCard) -> Element {
    let ctx = use_context::<AppContext>();
    let timings = ctx.presenter_timings();
    let link_opener = ctx.link_opener();
    let presenter = use_signal(move || ResultsPresenter::new(score, timings));

    // Scoped to this component: unmounting drops the task and every pending sleep.
    use_future(move || async move {
        let mut presenter = presenter;
        loop {
            let Some(delay) = presenter.peek().next_delay() else {
                break;
            };
            tokio::time::sleep(delay).await;
            presenter.write().fire();
        }
    });

    let on_toggle_bonus = use_callback(move |()| {
        let mut presenter = presenter;
        presenter.write().toggle_bonus();
    });
    let on_join = use_callback(move |()| link_opener.open_url(CALL_TO_ACTION.url));

    let view = presenter.read().clone();
    let category = view.category();
    let displayed = view.displayed();

    rsx! {
        section { class: "results",
            div { class: "results-score",
                h2 { "{SCORE_HEADING}" }
                p { class: "results-score-value", "{displayed}" }
                p { class: "results-score-hint", "{SCORE_RANGE_HINT}" }
            }
            if view.shows(RevealStage::Category) {
                div { class: "results-category",
                    h3 { "{category.title()}" }
                    p { "{category.description()}" }
                }
            }
            if view.shows(RevealStage::ActionPlan) {
                div { class: "results-action-plan",
                    h3 { "Your Action Plan" }
                    ol {
                        for item in category.action_plan().iter().copied() {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
            }
            if view.shows(RevealStage::Bonus) {
                BonusBlock { panel: view.bonus(), on_toggle: on_toggle_bonus }
            }
            if view.shows(RevealStage::CallToAction) {
                div { class: "results-cta",
                    p { "{CALL_TO_ACTION.prompt}" }
                    button {
                        id: "results-join",
                        class: "stepper-btn stepper-btn--primary",
                        r#type: "button",
                        onclick: move |_| on_join.call(()),
                        "{CALL_TO_ACTION.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn BonusBlock(panel: BonusPanel, on_toggle: Callback<()>) -> Element {
    let arrow = if panel.is_expanded() { "▲" } else { "▼" };
    rsx! {
        div { class: "results-bonus",
            button {
                id: "results-bonus-toggle",
                class: "results-bonus-toggle",
                r#type: "button",
                aria_expanded: panel.is_expanded(),
                onclick: move |_| on_toggle.call(()),
                span { "{BONUS_PLAN.title}" }
                span { class: "results-bonus-arrow", "{arrow}" }
            }
            if panel.is_expanded() {
                div { class: "results-bonus-body",
                    p { "{BONUS_PLAN.summary}" }
                    for section in BONUS_PLAN.sections.iter() {
                        div { key: "{section.label}", class: "results-bonus-section",
                            h4 { "{section.label}" }
                            ul {
                                for item in section.items.iter().copied() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

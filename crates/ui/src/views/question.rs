use dioxus::prelude::*;
use survey_core::model::Direction;

use crate::vm::LIKERT_SCALE;

fn option_class(selected: Option<u8>, value: u8) -> &'static str {
    if selected == Some(value) {
        "likert-option likert-option--selected"
    } else {
        "likert-option"
    }
}

#[component]
pub fn LikertQuestion(
    progress_label: String,
    text: String,
    selected: Option<u8>,
    on_select: Callback<u8>,
) -> Element {
    rsx! {
        section { class: "question",
            p { class: "question-progress", "{progress_label}" }
            h2 { class: "question-text", "{text}" }
            div { class: "likert", role: "radiogroup",
                for (value, label) in LIKERT_SCALE {
                    button {
                        key: "{value}",
                        class: option_class(selected, value),
                        r#type: "button",
                        role: "radio",
                        aria_checked: selected == Some(value),
                        onclick: move |_| on_select.call(value),
                        span { class: "likert-value", "{value}" }
                        span { class: "likert-label", "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StepperControl(
    can_go_back: bool,
    can_go_next: bool,
    next_label: &'static str,
    on_navigate: Callback<Direction>,
) -> Element {
    rsx! {
        nav { class: "stepper",
            button {
                id: "survey-back",
                class: "stepper-btn stepper-btn--secondary",
                r#type: "button",
                disabled: !can_go_back,
                onclick: move |_| on_navigate.call(Direction::Prev),
                "Back"
            }
            button {
                id: "survey-next",
                class: "stepper-btn stepper-btn--primary",
                r#type: "button",
                disabled: !can_go_next,
                onclick: move |_| on_navigate.call(Direction::Next),
                "{next_label}"
            }
        }
    }
}

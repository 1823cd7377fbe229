use dioxus::prelude::*;
use survey_core::scoring::ScoreCard;

use crate::context::AppContext;
use crate::vm::{SurveyIntent, SurveyOutcome, SurveyVm, start_survey};

use super::question::{LikertQuestion, StepperControl};
use super::results::ResultsView;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Question {
        progress_label: String,
        text: String,
        selected: Option<u8>,
        can_go_back: bool,
        can_go_next: bool,
        next_label: &'static str,
    },
    Results(ScoreCard),
    Empty,
}

fn screen_for(vm: &SurveyVm) -> Screen {
    if vm.is_results() {
        return vm.score().map_or(Screen::Empty, Screen::Results);
    }
    let Some(text) = vm.question_text() else {
        return Screen::Empty;
    };
    Screen::Question {
        progress_label: vm.progress_label(),
        text: text.to_string(),
        selected: vm.selected(),
        can_go_back: vm.can_go_back(),
        can_go_next: vm.can_go_next(),
        next_label: vm.next_label(),
    }
}

#[component]
pub fn SurveyView() -> Element {
    let ctx = use_context::<AppContext>();
    let flow = ctx.survey_flow();

    let vm = {
        let flow = flow.clone();
        use_signal(move || start_survey(&flow))
    };
    // Bumped on every entry into results so the presenter restarts per completion.
    let completions = use_signal(|| 0_u32);

    let dispatch_intent = {
        let flow = flow.clone();
        use_callback(move |intent: SurveyIntent| {
            let mut vm = vm;
            let mut completions = completions;
            match intent {
                SurveyIntent::Answer(value) => vm.write().answer(&flow, value),
                SurveyIntent::Navigate(direction) => {
                    let outcome = vm.write().navigate(&flow, direction);
                    if let SurveyOutcome::Completed(completion) = outcome {
                        completions.with_mut(|count| *count += 1);
                        let flow = flow.clone();
                        spawn(async move {
                            let outcome = flow.submit(&completion.payload).await;
                            tracing::debug!(?outcome, "submission task finished");
                        });
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SurveyTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let screen = screen_for(&vm.read());
    let run = completions();

    rsx! {
        div { class: "page survey",
            match screen {
                Screen::Question {
                    progress_label,
                    text,
                    selected,
                    can_go_back,
                    can_go_next,
                    next_label,
                } => rsx! {
                    LikertQuestion {
                        progress_label,
                        text,
                        selected,
                        on_select: move |value| dispatch_intent.call(SurveyIntent::Answer(value)),
                    }
                    StepperControl {
                        can_go_back,
                        can_go_next,
                        next_label,
                        on_navigate: move |direction| {
                            dispatch_intent.call(SurveyIntent::Navigate(direction));
                        },
                    }
                },
                Screen::Results(score) => rsx! {
                    ResultsView { key: "{run}", score }
                },
                Screen::Empty => rsx! {
                    p { class: "survey-empty", "No questions to show." }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SurveyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SurveyIntent>>>>,
    vm: Rc<RefCell<Option<Signal<SurveyVm>>>>,
}

#[cfg(test)]
impl SurveyTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SurveyIntent>, vm: Signal<SurveyVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<SurveyIntent> {
        (*self.dispatch.borrow()).expect("survey dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<SurveyVm> {
        (*self.vm.borrow()).expect("survey vm registered")
    }
}

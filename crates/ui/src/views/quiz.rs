use dioxus::prelude::*;
use dioxus_router::Link;
use dna_core::{QuizEffect, QuizEvent};
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{MatchCardVm, QuestionVm, QuizScreen, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Feed `event` to the current controller; rejected input is logged and dropped.
fn apply_event(mut vm: Signal<Option<QuizVm>>, event: QuizEvent) -> Option<QuizEffect> {
    let event_name = event.name();
    let mut guard = vm.write();
    let current = guard.as_mut()?;
    match current.handle(event) {
        Ok(effect) => effect,
        Err(err) => {
            warn!(event = event_name, error = %err, "ignored quiz input");
            None
        }
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut error = error;
        let mut vm = vm;

        async move {
            let controller = quiz_loop.start().await;
            vm.set(Some(QuizVm::new(controller)));
            error.set(None);
        }
    });

    let dispatch = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |event: QuizEvent| {
            let Some(effect) = apply_event(vm, event) else {
                return;
            };
            let quiz_loop = quiz_loop.clone();
            let mut vm = vm;
            let mut error = error;
            let mut resource = resource;

            spawn(async move {
                let mut pending = Some(effect);
                while let Some(effect) = pending.take() {
                    let reload = matches!(effect, QuizEffect::ClearAndReload);
                    match quiz_loop.run_effect(effect).await {
                        Ok(Some(next)) => pending = apply_event(vm, next),
                        Ok(None) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "quiz effect failed");
                            error.set(Some(ViewError::Unknown));
                            return;
                        }
                    }
                    if reload {
                        vm.set(None);
                        resource.restart();
                    }
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Key::Character(value) = evt.data.key() else {
            return;
        };
        let option = vm
            .read()
            .as_ref()
            .and_then(|current| current.option_for_key(&value));
        if let Some(option) = option {
            evt.prevent_default();
            dispatch.call(QuizEvent::OptionSelected(option));
        }
    });

    let screen = vm.read().as_ref().map(|current| current.screen());
    let body = match (error(), screen) {
        (Some(err), _) => rsx! {
            p { class: "quiz-error", "{err.message()}" }
        },
        (None, Some(QuizScreen::Question(question))) => rsx! {
            QuestionPanel { question, dispatch }
        },
        (None, Some(QuizScreen::Loading)) => rsx! {
            div { class: "quiz-loading",
                h2 { "Analyzing Your DNA..." }
                p { "Curating your perfect photography matches." }
            }
        },
        (None, Some(QuizScreen::Results(cards))) => rsx! {
            ResultsPanel { cards, dispatch }
        },
        (None, Some(QuizScreen::Error)) => {
            let message = ViewError::Connection.message();
            rsx! {
                p { class: "quiz-error", "{message}" }
            }
        }
        (None, None) => rsx! {
            h2 { id: "q-title", class: "quiz-title", "Discover Your Photography DNA" }
            p { id: "quiz-subtitle", class: "quiz-subtitle",
                "Six quick choices. Three photographers who see the world the way you do."
            }
            div { id: "options", class: "quiz-options" }
        },
    };

    rsx! {
        div { class: "page quiz-page",
            div {
                id: "quiz-container",
                class: "quiz-container",
                tabindex: "0",
                onkeydown: on_key,
                onmounted: move |evt: MountedEvent| async move {
                    let _ = evt.set_focus(true).await;
                },
                {body}
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, dispatch: Callback<QuizEvent>) -> Element {
    let buttons = question.options.iter().enumerate().map(|(index, option)| {
        let label = option.clone();
        rsx! {
            button {
                key: "{index}",
                class: "dna-btn",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizEvent::OptionSelected(label.clone())),
                "{option}"
            }
        }
    });

    rsx! {
        h2 { id: "q-title", class: "quiz-title",
            span { class: "quiz-progress", "{question.progress_label}" }
            div { class: "quiz-prompt", "{question.prompt}" }
        }
        div { id: "options", class: "quiz-options", {buttons} }
    }
}

#[component]
fn ResultsPanel(cards: Vec<MatchCardVm>, dispatch: Callback<QuizEvent>) -> Element {
    let items = cards.iter().enumerate().map(|(index, card)| {
        let link = card.portfolio_path.clone().map(|path| {
            rsx! {
                Link { class: "match-link", to: path, "View Full Portfolio" }
            }
        });
        rsx! {
            div { key: "{index}", class: "match-card",
                span { class: "match-score", "Match Score: {card.score_label}" }
                h3 { class: "match-name", "{card.name}" }
                p { class: "match-reason", "{card.reason}" }
                {link}
            }
        }
    });

    rsx! {
        div { class: "quiz-results",
            h2 { class: "results-title", "Your Curated Matches" }
            div { class: "match-list", {items} }
            button {
                class: "restart-btn",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizEvent::RestartRequested),
                "← START OVER / CLEAR DNA"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizEvent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizEvent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizEvent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}

use dioxus::prelude::*;

use tour_core::model::QuizChoice;

use crate::vm::QuizVm;

#[component]
pub(super) fn QuizPanel(
    quiz: QuizVm,
    #[props(!optional)] selected: Option<QuizChoice>,
    on_select: EventHandler<QuizChoice>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "quiz-box", id: "quiz-box",
            p { class: "quiz-prompt", "{quiz.prompt}" }
            div { class: "quiz-options",
                for option in quiz.options.iter().cloned() {
                    label { key: "{option.choice.number()}", class: "quiz-option",
                        input {
                            r#type: "radio",
                            name: "quiz-answer",
                            value: "{option.choice.number()}",
                            checked: option.checked || selected == Some(option.choice),
                            disabled: quiz.answered,
                            onchange: move |_| on_select.call(option.choice),
                        }
                        span { "{option.label}" }
                    }
                }
            }
            if !quiz.answered {
                button {
                    class: "btn btn--submit",
                    id: "quiz-submit",
                    onclick: move |_| on_submit.call(()),
                    "SUBMIT ANSWER"
                }
            }
            if let Some(message) = quiz.outcome_message.clone() {
                p { class: "{quiz.outcome_class}", id: "quiz-result", "{message}" }
            }
        }
    }
}

#[component]
pub(super) fn GalleryPanel(
    label: String,
    #[props(!optional)] image: Option<String>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "gallery", id: "gallery",
            div { class: "gallery-frame",
                if let Some(src) = image {
                    img { class: "gallery-image", src: "{src}", alt: "Gallery image {label}" }
                } else {
                    p { class: "placeholder", "Image not available" }
                }
            }
            div { class: "gallery-controls",
                button { class: "btn", id: "gallery-prev", onclick: move |_| on_prev.call(()), "Previous" }
                span { class: "gallery-count", "{label}" }
                button { class: "btn", id: "gallery-next", onclick: move |_| on_next.call(()), "Next" }
                button { class: "btn btn--close", id: "gallery-close", onclick: move |_| on_close.call(()), "Close" }
            }
        }
    }
}

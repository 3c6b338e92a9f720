use dioxus::prelude::*;
use dioxus_router::use_navigator;

use lesson_core::model::LessonRef;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};

#[component]
pub fn PickerView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // Deep-link boot: the picker is the root view, so it owns the one-shot
    // jump into a decoded `#lesson=..&stage=..` position.
    let boot_ctx = ctx.clone();
    use_effect(move || {
        if let Some(position) = boot_ctx.take_boot_position() {
            let _ = navigator.replace(Route::Lesson {
                id: position.lesson.as_str().to_string(),
                stage: position.stage,
            });
        }
    });

    let library = ctx.library();
    let resource = use_resource(move || {
        let library = library.clone();
        async move { library.load_lessons().await }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page picker-page",
            header { class: "view-header",
                h2 { class: "view-title", "Lessons" }
                p { class: "view-subtitle", "Pick a lesson to start." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(None) => rsx! {
                    div { class: "lesson-grid",
                        div { class: "card card--empty",
                            h3 { "No lessons found" }
                            p {
                                "Add a "
                                code { "lessons.json" }
                                " like "
                                code { "[\"001\",\"002\"]" }
                                " and matching folders to the content root."
                            }
                        }
                    }
                },
                ViewState::Ready(Some(lessons)) => rsx! {
                    div { class: "lesson-grid",
                        for lesson in lessons {
                            LessonCard { lesson }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn LessonCard(lesson: LessonRef) -> Element {
    let navigator = use_navigator();
    let id = lesson.id.as_str().to_string();

    rsx! {
        div { class: "card lesson-card",
            div { class: "muted",
                "Folder: "
                code { "{lesson.id}" }
            }
            h3 { "{lesson.title}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Lesson {
                        id: id.clone(),
                        stage: 0,
                    });
                },
                "Start"
            }
        }
    }
}

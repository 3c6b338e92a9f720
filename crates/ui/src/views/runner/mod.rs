use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use keyboard_types::Key;

use lesson_core::model::{Difficulty, LessonId, LessonRef, Playback};
use services::StageContent;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::markdown_to_html;

mod scripts;

/// Runs one lesson: renders the current stage, drives prev/next navigation,
/// and keeps the difficulty dock in sync with the persisted preference.
///
/// The route is the single source of truth for the playback position; the
/// stage plan is cheap enough to rebuild from it on every render.
#[component]
pub fn RunnerView(id: String, stage: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // Mirror the route props into a signal so resources and effects restart
    // when navigation changes the position.
    let mut route_key = use_signal(|| (id.clone(), stage));
    let mut dialogue_failed = use_signal(|| false);
    let mut qanda_image_hidden = use_signal(|| false);
    if route_key() != (id.clone(), stage) {
        route_key.set((id.clone(), stage));
        dialogue_failed.set(false);
        qanda_image_hidden.set(false);
    }

    // An out-of-range stage segment (hand-edited deep link) redirects to the
    // clamped position instead of erroring.
    use_effect(move || {
        let (lesson_raw, requested) = route_key();
        let playback = Playback::start_at(LessonId::new(lesson_raw.clone()), requested);
        if playback.stage_index() != requested {
            let _ = navigator.replace(Route::Lesson {
                id: lesson_raw,
                stage: playback.stage_index(),
            });
        }
    });

    let difficulty_svc = ctx.difficulty();
    let save_svc = ctx.difficulty();
    let stage_svc = ctx.stages();

    // The persisted preference loads once; explicit selections override it
    // for the rest of the session without waiting on the write.
    let mut selected = use_signal(|| None::<Difficulty>);
    let pref_resource = use_resource(move || {
        let svc = difficulty_svc.clone();
        async move { svc.load().await }
    });

    let content = use_resource(move || {
        let svc = stage_svc.clone();
        let (lesson_raw, requested) = route_key();
        let persisted = pref_resource.value().read().as_ref().copied();
        let chosen = selected().or(persisted);
        async move {
            // Hold the first reading render until the preference is known,
            // so the stage is fetched once with the right difficulty.
            let difficulty = chosen?;
            let playback = Playback::start_at(LessonId::new(lesson_raw), requested);
            Some(svc.load(playback.current(), difficulty).await)
        }
    });

    // An empty watch stage never remains the current view: advance past it
    // without user action (unless it is somehow the last stage).
    use_effect(move || {
        let skipped = matches!(
            content.value().read().as_ref(),
            Some(Some(StageContent::WatchSkipped))
        );
        if skipped {
            let (lesson_raw, requested) = route_key();
            let playback = Playback::start_at(LessonId::new(lesson_raw.clone()), requested);
            if !playback.is_last() {
                let _ = navigator.replace(Route::Lesson {
                    id: lesson_raw,
                    stage: playback.stage_index() + 1,
                });
            }
        }
    });

    let go = use_callback(move |delta: i32| {
        let (lesson_raw, requested) = route_key();
        let mut playback = Playback::start_at(LessonId::new(lesson_raw.clone()), requested);
        let moved = if delta < 0 {
            playback.prev()
        } else {
            playback.next()
        };
        if moved {
            let _ = navigator.push(Route::Lesson {
                id: lesson_raw,
                stage: playback.stage_index(),
            });
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| match evt.data.key() {
        Key::ArrowRight => {
            evt.prevent_default();
            go.call(1);
        }
        Key::ArrowLeft => {
            evt.prevent_default();
            go.call(-1);
        }
        _ => {}
    });

    let on_difficulty = use_callback(move |difficulty: Difficulty| {
        selected.set(Some(difficulty));
        let svc = save_svc.clone();
        spawn(async move {
            // The in-memory selection already drives rendering; a failed
            // write only loses persistence across restarts.
            let _ = svc.save(difficulty).await;
        });
    });

    let playback = Playback::start_at(LessonId::new(id.clone()), stage);
    let lesson = LessonRef::from_id(LessonId::new(id.clone()));
    let heading = format!("{} • {}", lesson.id, lesson.title);
    let indicator = format!(
        "Stage {} / {}",
        playback.stage_index() + 1,
        playback.stage_count()
    );
    let show_dock = playback.current().shows_difficulty_dock();
    let effective = selected()
        .or(pref_resource.value().read().as_ref().copied())
        .unwrap_or_default();
    let state = view_state_from_resource(content);

    rsx! {
        div { class: "page runner-page", tabindex: "0", autofocus: true, onkeydown: on_key,
            header { class: "runner-header",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Picker {});
                    },
                    "← All lessons"
                }
                h2 { class: "lesson-title", "{heading}" }
                span { class: "stage-indicator", "{indicator}" }
            }
            if show_dock {
                div { class: "difficulty-dock", role: "radiogroup",
                    span { class: "dock-label", "Difficulty:" }
                    for difficulty in Difficulty::ALL {
                        label { class: "dock-option",
                            input {
                                r#type: "radio",
                                name: "diff",
                                value: "{difficulty}",
                                checked: effective == difficulty,
                                onchange: move |_| on_difficulty.call(difficulty),
                            }
                            "{difficulty.label()}"
                        }
                    }
                }
            }
            div { class: "stage-container",
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading | ViewState::Ready(None) => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(Some(content)) => rsx! {
                        StageBody {
                            content,
                            dialogue_failed,
                            qanda_image_hidden,
                        }
                    },
                }
            }
            footer { class: "runner-footer",
                button {
                    class: "btn nav-btn",
                    r#type: "button",
                    disabled: playback.is_first(),
                    onclick: move |_| go.call(-1),
                    "◀ Prev"
                }
                button {
                    class: "btn nav-btn",
                    r#type: "button",
                    disabled: playback.is_last(),
                    onclick: move |_| go.call(1),
                    "Next ▶"
                }
            }
        }
    }
}

#[component]
fn StageBody(
    content: StageContent,
    dialogue_failed: Signal<bool>,
    qanda_image_hidden: Signal<bool>,
) -> Element {
    let mut dialogue_failed = dialogue_failed;
    let mut qanda_image_hidden = qanda_image_hidden;

    match content {
        StageContent::Reading { title, markdown } => {
            let html = markdown_to_html(&markdown);
            rsx! {
                section { class: "stage stage-reading",
                    h3 { class: "reading-title", "{title}" }
                    div { class: "md", dangerous_inner_html: "{html}" }
                }
            }
        }
        StageContent::Dialogue { image_url } => rsx! {
            section { class: "stage stage-dialogue",
                if dialogue_failed() {
                    div { class: "dialogue-missing", "dialogue_image.png missing" }
                } else {
                    img {
                        class: "dialogue-bg",
                        src: "{image_url}",
                        alt: "Lesson dialogue",
                        onerror: move |_| dialogue_failed.set(true),
                    }
                }
            }
        },
        StageContent::Watch { embed_url } => rsx! {
            section { class: "stage stage-watch",
                iframe {
                    class: "watch-frame",
                    src: "{embed_url}",
                    allow: "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        },
        StageContent::WatchSkipped => rsx! {
            // The runner replaces this route immediately; render nothing.
            section { class: "stage stage-watch" }
        },
        StageContent::Qanda {
            markdown,
            image_url,
        } => {
            let html = markdown_to_html(&markdown);
            rsx! {
                section { class: "stage stage-qanda",
                    div { class: "qanda-md", dangerous_inner_html: "{html}" }
                    if !qanda_image_hidden() {
                        img {
                            class: "qanda-img",
                            src: "{image_url}",
                            alt: "Q&A",
                            onerror: move |_| qanda_image_hidden.set(true),
                        }
                    }
                    button {
                        class: "btn confetti-btn",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = eval(scripts::confetti_script());
                        },
                        "Celebrate 🎉"
                    }
                }
            }
        }
    }
}

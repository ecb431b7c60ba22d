use std::time::Duration;

use dioxus::prelude::*;

use services::{MediaHandle, TourController};
use tour_core::model::QuizChoice;
use tour_core::tour::TourEvent;

use crate::bridge::{MediaCommand, file_url};
use crate::context::AppContext;
use crate::vm::map_tour;

use super::components::{GalleryPanel, QuizPanel};
use super::scripts::{
    PlaybackEnd, fire, pause_script, play_audio_script, play_video_script, resume_script,
    run_playback, stop_script, tone_script,
};

/// Upper bound on how long the timer loop sleeps between checks.
const TIMER_TICK: Duration = Duration::from_millis(250);

/// Events applied before the first render, so view tests can start mid-tour.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct TourTestScript(pub Vec<TourEvent>);

#[cfg(test)]
fn apply_test_script(controller: &mut TourController) {
    if let Some(script) = try_consume_context::<TourTestScript>() {
        for event in script.0 {
            controller.dispatch(event);
        }
    }
}

#[cfg(not(test))]
fn apply_test_script(_controller: &mut TourController) {}

fn dispatch(mut controller: Signal<TourController>, event: TourEvent) {
    controller.write().dispatch(event);
}

async fn track_playback(handle: MediaHandle, script: String, mut controller: Signal<TourController>) {
    match run_playback(&script).await {
        Ok(PlaybackEnd::Ended) => {
            controller.write().media_completed(handle);
        }
        Ok(PlaybackEnd::Stopped) => {}
        Ok(PlaybackEnd::Failed(reason)) => {
            tracing::warn!(handle = %handle, %reason, "playback failed");
            controller.write().media_failed(handle, &reason);
        }
        Err(err) => {
            tracing::warn!(handle = %handle, error = %err, "playback script failed");
            controller.write().media_failed(handle, &err.to_string());
        }
    }
}

fn run_command(command: MediaCommand, controller: Signal<TourController>) {
    match command {
        MediaCommand::PlayAudio { handle, src } => {
            spawn(track_playback(handle, play_audio_script(handle, &src), controller));
        }
        MediaCommand::PlayVideo {
            handle,
            src,
            segment,
        } => {
            spawn(track_playback(
                handle,
                play_video_script(handle, &src, segment),
                controller,
            ));
        }
        MediaCommand::Pause(handle) => fire(&pause_script(handle)),
        MediaCommand::Resume(handle) => fire(&resume_script(handle)),
        MediaCommand::Stop(handle) => fire(&stop_script(handle)),
        MediaCommand::Tone(tone) => fire(&tone_script(&tone)),
    }
}

#[component]
pub fn TourView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let assets = ctx.assets();

    let controller = use_signal(|| {
        let mut controller = ctx.controller();
        apply_test_script(&mut controller);
        controller
    });
    let mut selected_answer = use_signal(|| None::<QuizChoice>);

    let bridge = ctx.bridge().clone();
    use_future(move || {
        let bridge = bridge.clone();
        async move {
            let Some(mut commands) = bridge.take_commands() else {
                return;
            };
            while let Some(command) = commands.recv().await {
                run_command(command, controller);
            }
        }
    });

    use_future(move || async move {
        loop {
            let wait = controller
                .peek()
                .until_next_deadline()
                .map_or(TIMER_TICK, |left| left.to_std().unwrap_or_default().min(TIMER_TICK));
            tokio::time::sleep(wait).await;
            let due = controller
                .peek()
                .until_next_deadline()
                .is_some_and(|left| left <= chrono::Duration::zero());
            if due {
                let mut controller = controller;
                controller.write().advance();
            }
        }
    });

    let snapshot = controller.read().snapshot().clone();
    let vm = map_tour(&snapshot, &catalog);

    use_effect(move || {
        if controller.read().snapshot().quiz.is_none() && selected_answer.peek().is_some() {
            selected_answer.set(None);
        }
    });

    let landmark = snapshot.selected.and_then(|id| catalog.landmark(id));
    let map_src = assets.resolve_map().and_then(|path| file_url(&path));
    let main_image_src = landmark
        .and_then(|landmark| assets.main_image(landmark))
        .and_then(|path| file_url(&path));
    let gallery_image_src = landmark
        .zip(snapshot.gallery)
        .and_then(|(landmark, gallery)| assets.gallery_image(landmark, gallery.index))
        .and_then(|path| file_url(&path));
    let gallery_open = snapshot.gallery.is_some();

    let on_key = move |evt: KeyboardEvent| match evt.data.key() {
        Key::ArrowLeft if gallery_open => dispatch(controller, TourEvent::GalleryPrev),
        Key::ArrowRight if gallery_open => dispatch(controller, TourEvent::GalleryNext),
        Key::Escape => dispatch(controller, TourEvent::Reset),
        _ => {}
    };

    rsx! {
        document::Title { "{vm.window_title}" }

        div { class: "tour-root", id: "tour-root", tabindex: "0", onkeydown: on_key,
            header { class: "tour-header",
                h1 { class: "tour-title", id: "tour-title", "{vm.title}" }
                if vm.show_back {
                    button {
                        class: "btn btn--back",
                        id: "back-to-map",
                        onclick: move |_| dispatch(controller, TourEvent::Reset),
                        "Back to Map"
                    }
                }
            }

            if let Some(notice) = vm.notice.clone() {
                div { class: "notice", id: "tour-notice", role: "alert",
                    strong { class: "notice-title", "{notice.title}" }
                    span { class: "notice-message", "{notice.message}" }
                }
            }

            div { class: "tour-body",
                div { class: "map-pane",
                    if let Some(src) = map_src {
                        img { class: "map-image", src: "{src}", alt: "Map of {catalog.settings().city()}" }
                    } else {
                        div { class: "map-image map-image--missing" }
                    }
                    for hotspot in vm.hotspots.iter().cloned() {
                        div {
                            key: "hotspot-{hotspot.id}",
                            class: hotspot.class,
                            style: "{hotspot.style}",
                            title: "{hotspot.name}",
                            onclick: move |_| dispatch(controller, TourEvent::ToggleSelectLandmark(hotspot.id)),
                        }
                        span {
                            key: "hotspot-label-{hotspot.id}",
                            class: "hotspot-label",
                            style: "{hotspot.label_style}",
                            onclick: move |_| dispatch(controller, TourEvent::ToggleSelectLandmark(hotspot.id)),
                            "{hotspot.name}"
                        }
                    }
                }

                div { class: "landmark-pane",
                    if vm.show_landmark_image {
                        if let Some(src) = main_image_src {
                            img { class: "landmark-image", id: "landmark-image", src: "{src}", alt: "{vm.title}" }
                        } else {
                            p { class: "placeholder", "Image not available" }
                        }
                    }
                    video {
                        class: "tour-video",
                        id: "tour-video",
                        hidden: !vm.show_video,
                        preload: "metadata",
                    }

                    div { class: "button-row",
                        if let Some(label) = vm.audio_label {
                            button {
                                class: "btn btn--audio",
                                id: "toggle-audio",
                                onclick: move |_| dispatch(controller, TourEvent::ToggleAudio),
                                "{label}"
                            }
                        }
                        if vm.show_view_images {
                            button {
                                class: "btn btn--images",
                                id: "view-images",
                                onclick: move |_| dispatch(controller, TourEvent::OpenGallery),
                                "VIEW IMAGES"
                            }
                        }
                        if vm.show_go_to_quiz {
                            button {
                                class: "btn btn--quiz",
                                id: "go-to-quiz",
                                onclick: move |_| dispatch(controller, TourEvent::GoToQuiz),
                                "GO TO QUIZ"
                            }
                        }
                        if vm.show_play_video {
                            button {
                                class: "btn btn--video",
                                id: "play-video",
                                onclick: move |_| dispatch(controller, TourEvent::PlayVideo),
                                "PLAY VIDEO"
                            }
                        }
                        if let Some(label) = vm.video_pause_label {
                            button {
                                class: "btn btn--pause",
                                id: "pause-video",
                                onclick: move |_| dispatch(controller, TourEvent::ToggleVideoPause),
                                "{label}"
                            }
                        }
                        if vm.show_end_video {
                            button {
                                class: "btn btn--end",
                                id: "end-video",
                                onclick: move |_| dispatch(controller, TourEvent::EndVideo),
                                "END VIDEO"
                            }
                        }
                    }

                    if let Some(quiz) = vm.quiz.clone() {
                        QuizPanel {
                            quiz,
                            selected: selected_answer(),
                            on_select: move |choice| selected_answer.set(Some(choice)),
                            on_submit: move |()| {
                                dispatch(controller, TourEvent::SubmitAnswer(selected_answer()));
                            },
                        }
                    }

                    if let Some(label) = vm.gallery_label.clone() {
                        GalleryPanel {
                            label,
                            image: gallery_image_src,
                            on_prev: move |()| dispatch(controller, TourEvent::GalleryPrev),
                            on_next: move |()| dispatch(controller, TourEvent::GalleryNext),
                            on_close: move |()| dispatch(controller, TourEvent::CloseGallery),
                        }
                    }
                }
            }
        }
    }
}

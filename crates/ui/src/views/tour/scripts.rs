use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dioxus::document::eval;

use services::{MediaHandle, Tone};
use tour_core::model::VideoSegment;

use crate::views::ViewError;

/// How a playback script settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum PlaybackEnd {
    Ended,
    Stopped,
    Failed(String),
}

impl PlaybackEnd {
    pub(super) fn parse(raw: &str) -> Self {
        match raw {
            "ended" => Self::Ended,
            "stopped" => Self::Stopped,
            other => Self::Failed(
                other
                    .strip_prefix("error:")
                    .unwrap_or(other)
                    .trim()
                    .to_string(),
            ),
        }
    }
}

/// Run a playback script and wait until it settles.
pub(super) async fn run_playback(script: &str) -> Result<PlaybackEnd, ViewError> {
    eval(script)
        .join::<String>()
        .await
        .map(|raw| PlaybackEnd::parse(&raw))
        .map_err(|err| ViewError::Script(format!("{err:?}")))
}

/// Run a control script without waiting for it.
pub(super) fn fire(script: &str) {
    let _ = eval(script);
}

// Every playback registers `{ el, finish }` under `window.__tourMedia[handle]`.
// `finish` settles the pending eval exactly once.
const MEDIA_REGISTRY: &str = r#"
    const registry = window.__tourMedia || (window.__tourMedia = {});
"#;

pub(super) fn play_audio_script(handle: MediaHandle, src: &str) -> String {
    let src = js_string_literal(src);
    format!(
        r#"{MEDIA_REGISTRY}
        const key = "{handle}";
        const audio = new Audio({src});
        return await new Promise((resolve) => {{
            const finish = (result) => {{
                if (!registry[key]) return;
                delete registry[key];
                resolve(result);
            }};
            registry[key] = {{ el: audio, finish }};
            audio.addEventListener("ended", () => finish("ended"), {{ once: true }});
            audio.addEventListener("error", () => finish("error:Audio file could not be played"), {{ once: true }});
            audio.play().catch((err) => finish("error:" + err));
        }});
        "#
    )
}

pub(super) fn play_video_script(handle: MediaHandle, src: &str, segment: VideoSegment) -> String {
    let src = js_string_literal(src);
    let start = segment.start_secs();
    let end = segment.end_secs();
    format!(
        r#"{MEDIA_REGISTRY}
        const key = "{handle}";
        const video = document.getElementById("tour-video");
        if (!video) return "error:Video player is not available";
        return await new Promise((resolve) => {{
            const onTime = () => {{
                if (video.currentTime >= {end}) {{
                    video.pause();
                    finish("ended");
                }}
            }};
            const onEnded = () => finish("ended");
            const onError = () => finish("error:Video file could not be played");
            const finish = (result) => {{
                if (!registry[key]) return;
                delete registry[key];
                video.removeEventListener("timeupdate", onTime);
                video.removeEventListener("ended", onEnded);
                video.removeEventListener("error", onError);
                resolve(result);
            }};
            registry[key] = {{ el: video, finish }};
            video.addEventListener("timeupdate", onTime);
            video.addEventListener("ended", onEnded);
            video.addEventListener("error", onError);
            const begin = () => {{
                video.currentTime = {start};
                video.play().catch((err) => finish("error:" + err));
            }};
            if (video.src !== {src}) {{
                video.src = {src};
                video.addEventListener("loadedmetadata", begin, {{ once: true }});
                video.load();
            }} else {{
                begin();
            }}
        }});
        "#
    )
}

pub(super) fn pause_script(handle: MediaHandle) -> String {
    format!(
        r#"{MEDIA_REGISTRY}
        const entry = registry["{handle}"];
        if (entry) entry.el.pause();
        "#
    )
}

pub(super) fn resume_script(handle: MediaHandle) -> String {
    format!(
        r#"{MEDIA_REGISTRY}
        const entry = registry["{handle}"];
        if (entry) entry.el.play().catch(() => {{}});
        "#
    )
}

pub(super) fn stop_script(handle: MediaHandle) -> String {
    format!(
        r#"{MEDIA_REGISTRY}
        const entry = registry["{handle}"];
        if (entry) {{
            entry.el.pause();
            entry.finish("stopped");
        }}
        "#
    )
}

pub(super) fn tone_script(tone: &Tone) -> String {
    let data = STANDARD.encode(tone.to_wav());
    format!(
        r#"
        const cue = new Audio("data:audio/wav;base64,{data}");
        cue.play().catch(() => {{}});
        "#
    )
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

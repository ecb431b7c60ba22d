//! Media and tone backends that hand work to the webview.
//!
//! The service side only queues `MediaCommand`s; the tour view drains the queue and runs
//! each command as a `document::eval` script.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use url::Url;

use services::{
    CueError, HandleAllocator, MediaError, MediaHandle, MediaService, Tone, ToneCue, ToneSink,
};
use tour_core::model::VideoSegment;

#[derive(Clone, Debug, PartialEq)]
pub enum MediaCommand {
    PlayAudio {
        handle: MediaHandle,
        src: String,
    },
    PlayVideo {
        handle: MediaHandle,
        src: String,
        segment: VideoSegment,
    },
    Pause(MediaHandle),
    Resume(MediaHandle),
    Stop(MediaHandle),
    Tone(Tone),
}

/// `file://` URL for a local asset, resolving relative paths against the working directory.
#[must_use]
pub fn file_url(path: &Path) -> Option<String> {
    let absolute = std::path::absolute(path).ok()?;
    Url::from_file_path(absolute).ok().map(String::from)
}

#[derive(Debug)]
pub struct WebviewMedia {
    handles: HandleAllocator,
    commands: UnboundedSender<MediaCommand>,
}

impl WebviewMedia {
    fn send(&self, command: MediaCommand) -> Result<(), MediaError> {
        self.commands
            .send(command)
            .map_err(|_| MediaError::Unavailable)
    }

    fn source(path: &Path) -> Result<String, MediaError> {
        file_url(path).ok_or_else(|| MediaError::Open {
            path: PathBuf::from(path),
            reason: "not a local file path".to_string(),
        })
    }
}

impl MediaService for WebviewMedia {
    fn play_audio(&self, track: &Path) -> Result<MediaHandle, MediaError> {
        let src = Self::source(track)?;
        let handle = self.handles.next();
        self.send(MediaCommand::PlayAudio { handle, src })?;
        Ok(handle)
    }

    fn play_video_segment(
        &self,
        source: &Path,
        segment: VideoSegment,
    ) -> Result<MediaHandle, MediaError> {
        let src = Self::source(source)?;
        let handle = self.handles.next();
        self.send(MediaCommand::PlayVideo {
            handle,
            src,
            segment,
        })?;
        Ok(handle)
    }

    fn pause(&self, handle: MediaHandle) {
        let _ = self.send(MediaCommand::Pause(handle));
    }

    fn resume(&self, handle: MediaHandle) {
        let _ = self.send(MediaCommand::Resume(handle));
    }

    fn stop(&self, handle: MediaHandle) {
        let _ = self.send(MediaCommand::Stop(handle));
    }
}

#[derive(Debug)]
pub struct WebviewTones {
    commands: UnboundedSender<MediaCommand>,
}

impl ToneSink for WebviewTones {
    fn play_tone(&self, tone: &Tone) -> Result<(), CueError> {
        self.commands
            .send(MediaCommand::Tone(*tone))
            .map_err(|_| CueError::Unavailable)
    }
}

pub type WebviewCue = ToneCue<WebviewTones>;

/// Both backends plus the single receiving end of their command queue.
#[derive(Clone)]
pub struct MediaBridge {
    media: Arc<WebviewMedia>,
    cues: Arc<WebviewCue>,
    commands: Arc<Mutex<Option<UnboundedReceiver<MediaCommand>>>>,
}

impl Default for MediaBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaBridge {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            media: Arc::new(WebviewMedia {
                handles: HandleAllocator::new(),
                commands: tx.clone(),
            }),
            cues: Arc::new(ToneCue::new(WebviewTones { commands: tx })),
            commands: Arc::new(Mutex::new(Some(rx))),
        }
    }

    #[must_use]
    pub fn media(&self) -> Arc<WebviewMedia> {
        Arc::clone(&self.media)
    }

    #[must_use]
    pub fn cues(&self) -> Arc<WebviewCue> {
        Arc::clone(&self.cues)
    }

    /// The command receiver. Only the first caller gets it.
    #[must_use]
    pub fn take_commands(&self) -> Option<UnboundedReceiver<MediaCommand>> {
        self.commands.lock().ok().and_then(|mut slot| slot.take())
    }
}

#[cfg(test)]
mod tests {
    use services::SoundCue;

    use super::*;

    #[test]
    fn requests_are_queued_in_order() {
        let bridge = MediaBridge::new();
        let mut rx = bridge.take_commands().unwrap();
        assert!(bridge.take_commands().is_none());

        let media = bridge.media();
        let segment = VideoSegment::new(46, 110).unwrap();
        let handle = media
            .play_video_segment(Path::new("/tour/videos/maseru_video.mp4"), segment)
            .unwrap();
        media.pause(handle);
        bridge.cues().play_correct();

        assert_eq!(
            rx.try_recv().unwrap(),
            MediaCommand::PlayVideo {
                handle,
                src: "file:///tour/videos/maseru_video.mp4".to_string(),
                segment,
            }
        );
        assert_eq!(rx.try_recv().unwrap(), MediaCommand::Pause(handle));
        assert_eq!(rx.try_recv().unwrap(), MediaCommand::Tone(Tone::CORRECT));
    }

    #[test]
    fn closed_queue_reports_unavailable() {
        let bridge = MediaBridge::new();
        drop(bridge.take_commands());
        let err = bridge
            .media()
            .play_audio(Path::new("/tour/audios/parliament.mp3"))
            .unwrap_err();
        assert!(matches!(err, MediaError::Unavailable));
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = file_url(Path::new("assets/images/map/maseru_map.jpg")).unwrap();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("/assets/images/map/maseru_map.jpg"));
    }
}

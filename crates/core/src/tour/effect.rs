use chrono::Duration;

use crate::model::{LandmarkId, PlaybackId, QuizOutcome, TimerId, VideoSegment};
use crate::tour::error::{AssetKind, MissingAsset};

/// A side effect requested by a transition, executed by the shell afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourEffect {
    PlayAudio {
        playback: PlaybackId,
        landmark: LandmarkId,
    },
    StopAudio(PlaybackId),
    PlayVideo {
        playback: PlaybackId,
        landmark: LandmarkId,
        segment: VideoSegment,
    },
    PauseVideo(PlaybackId),
    ResumeVideo(PlaybackId),
    StopVideo(PlaybackId),
    /// Count the landmark's gallery images and report back with `GalleryProbed`.
    ProbeGallery(LandmarkId),
    /// Fire `TimerFired(timer)` once `delay` has elapsed.
    ScheduleReturn { timer: TimerId, delay: Duration },
    CancelTimer(TimerId),
    PlayCue(QuizOutcome),
}

/// User-visible message attached to the snapshot produced by one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    NoSelection,
    GalleryEmpty,
    MissingAsset(MissingAsset),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoSelection => "Please select an answer!".to_string(),
            Self::GalleryEmpty => "No images available for this location".to_string(),
            Self::MissingAsset(asset) => asset.detail.clone(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::NoSelection => "Quiz",
            Self::GalleryEmpty => "Gallery",
            Self::MissingAsset(asset) => match asset.kind {
                AssetKind::Image => "Image Error",
                AssetKind::Audio => "Audio Error",
                AssetKind::Video => "Video Error",
            },
        }
    }
}

/// Result of an accepted transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub effects: Vec<TourEffect>,
    pub notice: Option<Notice>,
}

impl Step {
    #[must_use]
    pub fn with_effects(effects: Vec<TourEffect>) -> Self {
        Self {
            effects,
            notice: None,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

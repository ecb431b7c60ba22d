use crate::model::{LandmarkId, PlaybackId, QuizChoice, TimerId};
use crate::tour::error::MissingAsset;

/// Everything that can drive the tour forward.
///
/// The first group comes from the presentation layer; the rest is fed back by
/// the shell when an asynchronous request finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourEvent {
    SelectLandmark(LandmarkId),
    ToggleSelectLandmark(LandmarkId),
    ToggleAudio,
    PlayVideo,
    ToggleVideoPause,
    EndVideo,
    OpenGallery,
    CloseGallery,
    GalleryNext,
    GalleryPrev,
    GoToQuiz,
    SubmitAnswer(Option<QuizChoice>),
    Reset,

    VideoCompleted(PlaybackId),
    AudioCompleted(PlaybackId),
    MediaFailed {
        playback: PlaybackId,
        asset: MissingAsset,
    },
    GalleryProbed {
        landmark: LandmarkId,
        image_count: usize,
    },
    TimerFired(TimerId),
}

impl TourEvent {
    /// Short name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectLandmark(_) => "SelectLandmark",
            Self::ToggleSelectLandmark(_) => "ToggleSelectLandmark",
            Self::ToggleAudio => "ToggleAudio",
            Self::PlayVideo => "PlayVideo",
            Self::ToggleVideoPause => "ToggleVideoPause",
            Self::EndVideo => "EndVideo",
            Self::OpenGallery => "OpenGallery",
            Self::CloseGallery => "CloseGallery",
            Self::GalleryNext => "GalleryNext",
            Self::GalleryPrev => "GalleryPrev",
            Self::GoToQuiz => "GoToQuiz",
            Self::SubmitAnswer(_) => "SubmitAnswer",
            Self::Reset => "Reset",
            Self::VideoCompleted(_) => "VideoCompleted",
            Self::AudioCompleted(_) => "AudioCompleted",
            Self::MediaFailed { .. } => "MediaFailed",
            Self::GalleryProbed { .. } => "GalleryProbed",
            Self::TimerFired(_) => "TimerFired",
        }
    }
}

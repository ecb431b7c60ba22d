use thiserror::Error;

use crate::model::LandmarkId;
use crate::tour::effect::Notice;
use crate::tour::state::TourMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
    Video,
}

impl AssetKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Video => "Video",
        }
    }
}

/// A media asset that could not be found or opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingAsset {
    pub kind: AssetKind,
    pub detail: String,
}

impl MissingAsset {
    #[must_use]
    pub fn new(kind: AssetKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// Why an event was not applied. The tour state is unchanged in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TourError {
    #[error("{event} is not valid in {mode:?} mode")]
    IllegalTransition { event: &'static str, mode: TourMode },

    #[error("no quiz option selected")]
    NoSelection,

    #[error("landmark has no gallery images")]
    GalleryEmpty,

    #[error("ignored stale {event}")]
    StaleEvent { event: &'static str },

    #[error("landmark {0} is not in the catalog")]
    UnknownLandmark(LandmarkId),
}

impl TourError {
    /// The message to surface to the user, if this error is user-facing.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::NoSelection => Some(Notice::NoSelection),
            Self::GalleryEmpty => Some(Notice::GalleryEmpty),
            Self::IllegalTransition { .. } | Self::StaleEvent { .. } | Self::UnknownLandmark(_) => {
                None
            }
        }
    }

    /// Stale events are expected races and only worth a debug log.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleEvent { .. })
    }
}

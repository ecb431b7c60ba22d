use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::quiz::{QuizError, QuizQuestion, QuizQuestionDraft};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LandmarkError {
    #[error("landmark name cannot be empty")]
    EmptyName,

    #[error("hotspot color must be a #rrggbb hex string, got {raw:?}")]
    InvalidColor { raw: String },

    #[error("video segment end ({end}s) must be after start ({start}s)")]
    InvalidSegment { start: u32, end: u32 },

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

//
// ─── VALUE TYPES ───────────────────────────────────────────────────────────────
//

/// Half-open `[start, end)` range of the shared tour video, in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSegment {
    start_secs: u32,
    end_secs: u32,
}

impl VideoSegment {
    /// # Errors
    ///
    /// Returns `LandmarkError::InvalidSegment` if `end_secs <= start_secs`.
    pub fn new(start_secs: u32, end_secs: u32) -> Result<Self, LandmarkError> {
        if end_secs <= start_secs {
            return Err(LandmarkError::InvalidSegment {
                start: start_secs,
                end: end_secs,
            });
        }
        Ok(Self {
            start_secs,
            end_secs,
        })
    }

    #[must_use]
    pub fn start_secs(&self) -> u32 {
        self.start_secs
    }

    #[must_use]
    pub fn end_secs(&self) -> u32 {
        self.end_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.end_secs - self.start_secs
    }
}

/// Map coordinates of a hotspot, in map-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: u32,
    pub y: u32,
}

/// `#rrggbb` color of a hotspot when it is not selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HotspotColor(String);

impl HotspotColor {
    /// # Errors
    ///
    /// Returns `LandmarkError::InvalidColor` for anything other than `#` plus six hex digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, LandmarkError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        let valid = trimmed.len() == 7
            && trimmed.starts_with('#')
            && trimmed[1..].chars().all(|ch| ch.is_ascii_hexdigit());
        if !valid {
            return Err(LandmarkError::InvalidColor { raw });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ─── LANDMARK ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landmark {
    name: String,
    hotspot: Hotspot,
    color: HotspotColor,
    segment: VideoSegment,
    quiz: QuizQuestion,
}

impl Landmark {
    /// # Errors
    ///
    /// Returns `LandmarkError::EmptyName` if the name is blank.
    pub fn new(
        name: impl Into<String>,
        hotspot: Hotspot,
        color: HotspotColor,
        segment: VideoSegment,
        quiz: QuizQuestion,
    ) -> Result<Self, LandmarkError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(LandmarkError::EmptyName);
        }
        Ok(Self {
            name,
            hotspot,
            color,
            segment,
            quiz,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asset directory / file stem: lowercase name with spaces as underscores.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    #[must_use]
    pub fn hotspot(&self) -> Hotspot {
        self.hotspot
    }

    #[must_use]
    pub fn color(&self) -> &HotspotColor {
        &self.color
    }

    #[must_use]
    pub fn segment(&self) -> VideoSegment {
        self.segment
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizQuestion {
        &self.quiz
    }
}

/// Unvalidated landmark as it appears in catalog files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LandmarkDraft {
    pub name: String,
    pub hotspot: Hotspot,
    pub color: String,
    pub segment: [u32; 2],
    pub quiz: QuizQuestionDraft,
}

impl LandmarkDraft {
    /// # Errors
    ///
    /// Returns `LandmarkError` for the first invalid field.
    pub fn validate(self) -> Result<Landmark, LandmarkError> {
        let color = HotspotColor::new(self.color)?;
        let segment = VideoSegment::new(self.segment[0], self.segment[1])?;
        let quiz = self.quiz.validate()?;
        Landmark::new(self.name, self.hotspot, color, segment, quiz)
    }
}

impl From<&Landmark> for LandmarkDraft {
    fn from(landmark: &Landmark) -> Self {
        Self {
            name: landmark.name.clone(),
            hotspot: landmark.hotspot,
            color: landmark.color.as_str().to_string(),
            segment: [landmark.segment.start_secs, landmark.segment.end_secs],
            quiz: QuizQuestionDraft::from(&landmark.quiz),
        }
    }
}

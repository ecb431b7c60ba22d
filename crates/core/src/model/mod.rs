mod catalog;
mod ids;
mod landmark;
mod quiz;
mod settings;

pub use catalog::{CatalogError, TourCatalog, TourCatalogDraft};
pub use ids::{LandmarkId, PlaybackId, TimerId};

pub use landmark::{Hotspot, HotspotColor, Landmark, LandmarkDraft, LandmarkError, VideoSegment};
pub use quiz::{OPTION_COUNT, QuizChoice, QuizError, QuizOutcome, QuizQuestion, QuizQuestionDraft};
pub use settings::{DEFAULT_RETURN_DELAY_SECS, TourSettings, TourSettingsDraft};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::LandmarkId;
use crate::model::landmark::{
    Hotspot, HotspotColor, Landmark, LandmarkDraft, LandmarkError, VideoSegment,
};
use crate::model::quiz::QuizQuestion;
use crate::model::settings::{TourSettings, TourSettingsDraft};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("a tour needs at least one landmark")]
    Empty,

    #[error("landmark {index}: {source}")]
    Landmark {
        index: usize,
        #[source]
        source: LandmarkError,
    },

    #[error("duplicate landmark name: {name}")]
    DuplicateName { name: String },
}

/// The static tour content: landmarks in hotspot order plus presentation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourCatalog {
    landmarks: Vec<Landmark>,
    settings: TourSettings,
}

impl TourCatalog {
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and `CatalogError::DuplicateName`
    /// when two landmarks would share an asset slug.
    pub fn new(landmarks: Vec<Landmark>, settings: TourSettings) -> Result<Self, CatalogError> {
        if landmarks.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, landmark) in landmarks.iter().enumerate() {
            let slug = landmark.slug();
            if landmarks[..index].iter().any(|other| other.slug() == slug) {
                return Err(CatalogError::DuplicateName {
                    name: landmark.name().to_string(),
                });
            }
        }
        Ok(Self {
            landmarks,
            settings,
        })
    }

    /// The built-in Maseru tour.
    ///
    /// # Panics
    ///
    /// Panics if the built-in content fails validation.
    #[must_use]
    pub fn maseru() -> Self {
        fn landmark(
            name: &str,
            (x, y): (u32, u32),
            color: &str,
            (start, end): (u32, u32),
            prompt: &str,
            options: [&str; 3],
            correct: u8,
        ) -> Landmark {
            let quiz = QuizQuestion::new(prompt, options.map(str::to_string), correct)
                .expect("built-in quiz is valid");
            Landmark::new(
                name,
                Hotspot { x, y },
                HotspotColor::new(color).expect("built-in color is valid"),
                VideoSegment::new(start, end).expect("built-in segment is valid"),
                quiz,
            )
            .expect("built-in landmark is valid")
        }

        let landmarks = vec![
            landmark(
                "Mokorotlong",
                (485, 355),
                "#e74c3c",
                (46, 110),
                "What is Mokorotlong known for?",
                ["Cultural center", "Mining area", "Government offices"],
                1,
            ),
            landmark(
                "Royal Palace",
                (520, 300),
                "#3498db",
                (240, 280),
                "When was the Royal Palace built?",
                ["1800s", "1900s", "2000s"],
                2,
            ),
            landmark(
                "Setsoto Stadium",
                (722, 330),
                "#2ecc71",
                (367, 410),
                "What is Setsoto Stadium's capacity?",
                ["10,000", "20,000", "30,000"],
                2,
            ),
            landmark(
                "Parliament",
                (630, 460),
                "#f39c12",
                (484, 542),
                "How many Parliament seats?",
                ["80", "120", "150"],
                2,
            ),
        ];

        Self::new(landmarks, TourSettings::default()).expect("built-in catalog is valid")
    }

    #[must_use]
    pub fn settings(&self) -> &TourSettings {
        &self.settings
    }

    #[must_use]
    pub fn with_settings(mut self, settings: TourSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Returns the id for `index` if it names a landmark in this catalog.
    #[must_use]
    pub fn landmark_id(&self, index: usize) -> Option<LandmarkId> {
        (index < self.landmarks.len()).then(|| LandmarkId::new(index))
    }

    #[must_use]
    pub fn landmark(&self, id: LandmarkId) -> Option<&Landmark> {
        self.landmarks.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandmarkId, &Landmark)> {
        self.landmarks
            .iter()
            .enumerate()
            .map(|(index, landmark)| (LandmarkId::new(index), landmark))
    }
}

/// Serialized form of a catalog, e.g. a JSON content file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TourCatalogDraft {
    #[serde(default)]
    pub settings: TourSettingsDraft,
    pub landmarks: Vec<LandmarkDraft>,
}

impl TourCatalogDraft {
    /// # Errors
    ///
    /// Returns `CatalogError` naming the first invalid landmark.
    pub fn validate(self) -> Result<TourCatalog, CatalogError> {
        let landmarks = self
            .landmarks
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| CatalogError::Landmark { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        TourCatalog::new(landmarks, self.settings.validate())
    }
}

impl From<&TourCatalog> for TourCatalogDraft {
    fn from(catalog: &TourCatalog) -> Self {
        Self {
            settings: TourSettingsDraft::from(&catalog.settings),
            landmarks: catalog.landmarks.iter().map(LandmarkDraft::from).collect(),
        }
    }
}

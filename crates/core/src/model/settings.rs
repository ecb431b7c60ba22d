use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Seconds between answering a quiz and the automatic return to the map.
pub const DEFAULT_RETURN_DELAY_SECS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourSettings {
    city: String,
    return_delay_secs: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TourSettingsDraft {
    pub city: Option<String>,
    pub return_delay_secs: Option<u32>,
}

impl TourSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize the draft, falling back to defaults for missing or blank values.
    #[must_use]
    pub fn validate(self) -> TourSettings {
        let defaults = TourSettings::default();
        let city = normalize_optional(self.city).unwrap_or(defaults.city);
        let return_delay_secs = self
            .return_delay_secs
            .unwrap_or(defaults.return_delay_secs);

        TourSettings {
            city,
            return_delay_secs,
        }
    }
}

impl TourSettings {
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn return_delay_secs(&self) -> u32 {
        self.return_delay_secs
    }

    #[must_use]
    pub fn return_delay(&self) -> Duration {
        Duration::seconds(i64::from(self.return_delay_secs))
    }

    #[must_use]
    pub fn with_return_delay_secs(mut self, secs: u32) -> Self {
        self.return_delay_secs = secs;
        self
    }

    /// Heading shown above the map, e.g. `MASERU`.
    #[must_use]
    pub fn map_title(&self) -> String {
        self.city.to_uppercase()
    }

    /// Window title while no landmark is selected.
    #[must_use]
    pub fn window_title(&self) -> String {
        format!("{} Virtual Tour Guide", self.city)
    }

    /// Window title while `landmark` is selected.
    #[must_use]
    pub fn landmark_window_title(&self, landmark: &str) -> String {
        format!("{} - {landmark}", self.city)
    }
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            city: "Maseru".to_string(),
            return_delay_secs: DEFAULT_RETURN_DELAY_SECS,
        }
    }
}

impl From<&TourSettings> for TourSettingsDraft {
    fn from(settings: &TourSettings) -> Self {
        Self {
            city: Some(settings.city.clone()),
            return_delay_secs: Some(settings.return_delay_secs),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

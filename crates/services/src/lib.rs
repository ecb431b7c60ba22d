#![forbid(unsafe_code)]

pub mod app_services;
pub mod assets;
pub mod catalog;
pub mod controller;
pub mod cue;
pub mod error;
pub mod media;
pub mod timers;

pub use tour_core::Clock;

pub use app_services::{AppConfig, AppServices};
pub use assets::{AssetResolver, FsAssetResolver};
pub use controller::TourController;
pub use cue::{SoundCue, Tone, ToneCue, ToneSink};
pub use error::{AppServicesError, CatalogLoadError, CueError, MediaError};
pub use media::{HandleAllocator, MediaHandle, MediaService};
pub use timers::TimerQueue;

//! The tour navigation and media-playback state machine.
//!
//! `TourState::apply` is a pure transition: it mutates the state and returns the
//! effects a shell must execute (media requests, timers, sound cues). Asynchronous
//! results come back in as further `TourEvent`s.

mod effect;
mod error;
mod event;
mod snapshot;
mod state;

pub use effect::{Notice, Step, TourEffect};
pub use error::{AssetKind, MissingAsset, TourError};
pub use event::TourEvent;
pub use snapshot::{Affordances, GalleryView, QuizView, UiSnapshot};
pub use state::{TourMode, TourState};

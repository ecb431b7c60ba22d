//! Playback requests for landmark audio and video segments.

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use tour_core::model::VideoSegment;

use crate::error::MediaError;

/// Backend-issued identifier for one started playback.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaHandle(u64);

impl MediaHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaHandle({})", self.0)
    }
}

impl fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Starts and controls playback. Every method only submits a request and returns
/// immediately; completion is reported back through `TourController::media_completed`,
/// at most once per handle and never after `stop`.
pub trait MediaService: Send + Sync {
    /// # Errors
    ///
    /// Returns `MediaError` if the request cannot be submitted.
    fn play_audio(&self, track: &Path) -> Result<MediaHandle, MediaError>;

    /// # Errors
    ///
    /// Returns `MediaError` if the request cannot be submitted.
    fn play_video_segment(
        &self,
        source: &Path,
        segment: VideoSegment,
    ) -> Result<MediaHandle, MediaError>;

    fn pause(&self, handle: MediaHandle);
    fn resume(&self, handle: MediaHandle);
    fn stop(&self, handle: MediaHandle);
}

/// Hands out sequential handles for media backends.
#[derive(Debug)]
pub struct HandleAllocator(AtomicU64);

impl Default for HandleAllocator {
    fn default() -> Self {
        Self(AtomicU64::new(1))
    }
}

impl HandleAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> MediaHandle {
        MediaHandle(self.0.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_hands_out_distinct_handles() {
        let allocator = HandleAllocator::new();
        let first = allocator.next();
        let second = allocator.next();
        assert_ne!(first, second);
        assert_eq!(first.value() + 1, second.value());
    }
}

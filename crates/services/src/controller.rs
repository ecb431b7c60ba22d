//! Runs the tour state machine against real collaborators.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use tour_core::model::{LandmarkId, PlaybackId, TourCatalog};
use tour_core::tour::{AssetKind, MissingAsset, Notice, TourEffect, TourEvent, TourState, UiSnapshot};

use crate::assets::{AssetResolver, audio_path};
use crate::cue::SoundCue;
use crate::media::{MediaHandle, MediaService};
use crate::timers::TimerQueue;
use crate::Clock;

#[derive(Clone, Copy, Debug)]
struct ActivePlayback {
    handle: MediaHandle,
    kind: AssetKind,
}

/// Owns the `TourState` and executes the effects each transition asks for.
///
/// Events are processed one at a time. Follow-up events raised while effects run
/// (gallery probes, missing assets) are queued and drained before `dispatch` returns.
pub struct TourController {
    catalog: Arc<TourCatalog>,
    state: TourState,
    clock: Clock,
    timers: TimerQueue,
    media: Arc<dyn MediaService>,
    assets: Arc<dyn AssetResolver>,
    cues: Arc<dyn SoundCue>,
    playbacks: HashMap<PlaybackId, ActivePlayback>,
    queue: VecDeque<TourEvent>,
    snapshot: UiSnapshot,
}

impl TourController {
    #[must_use]
    pub fn new(
        catalog: Arc<TourCatalog>,
        clock: Clock,
        media: Arc<dyn MediaService>,
        assets: Arc<dyn AssetResolver>,
        cues: Arc<dyn SoundCue>,
    ) -> Self {
        let state = TourState::new();
        let snapshot = UiSnapshot::project(&state, &catalog, None);
        Self {
            catalog,
            state,
            clock,
            timers: TimerQueue::new(),
            media,
            assets,
            cues,
            playbacks: HashMap::new(),
            queue: VecDeque::new(),
            snapshot,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &UiSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn state(&self) -> &TourState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<TourCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn assets(&self) -> &Arc<dyn AssetResolver> {
        &self.assets
    }

    /// Mutable access to the clock, used by tests to move time forward.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// When the earliest pending timer is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.timers.next_deadline()
    }

    /// Time left until the earliest pending timer; negative once it is overdue.
    #[must_use]
    pub fn until_next_deadline(&self) -> Option<Duration> {
        self.next_deadline().map(|deadline| self.clock.until(deadline))
    }

    /// Apply `event` plus any follow-up events, then refresh the snapshot.
    ///
    /// The snapshot carries the last notice raised while processing, so a notice
    /// is shown once and cleared by the next dispatch.
    pub fn dispatch(&mut self, event: TourEvent) -> &UiSnapshot {
        self.queue.push_back(event);
        self.drain()
    }

    /// Fire every timer due according to the clock.
    pub fn advance(&mut self) -> &UiSnapshot {
        let due = self.timers.take_due(self.clock.now());
        if due.is_empty() {
            return &self.snapshot;
        }
        for timer in due {
            tracing::debug!(timer = %timer, "timer due");
            self.queue.push_back(TourEvent::TimerFired(timer));
        }
        self.drain()
    }

    /// Report that the playback behind `handle` finished on its own.
    pub fn media_completed(&mut self, handle: MediaHandle) -> &UiSnapshot {
        match self.take_playback(handle) {
            Some((playback, AssetKind::Video)) => {
                self.dispatch(TourEvent::VideoCompleted(playback))
            }
            Some((playback, _)) => self.dispatch(TourEvent::AudioCompleted(playback)),
            None => {
                tracing::debug!(handle = %handle, "completion for unknown media handle");
                &self.snapshot
            }
        }
    }

    /// Report that the backend could not play `handle` after accepting it.
    pub fn media_failed(&mut self, handle: MediaHandle, reason: &str) -> &UiSnapshot {
        match self.take_playback(handle) {
            Some((playback, kind)) => {
                let detail = format!("{} file failed: {reason}", kind.label());
                let asset = MissingAsset::new(kind, detail);
                self.dispatch(TourEvent::MediaFailed { playback, asset })
            }
            None => {
                tracing::debug!(handle = %handle, "failure for unknown media handle");
                &self.snapshot
            }
        }
    }

    fn drain(&mut self) -> &UiSnapshot {
        let mut notice = None;
        while let Some(event) = self.queue.pop_front() {
            if let Some(raised) = self.handle(event) {
                notice = Some(raised);
            }
        }
        self.snapshot = UiSnapshot::project(&self.state, &self.catalog, notice);
        &self.snapshot
    }

    fn take_playback(&mut self, handle: MediaHandle) -> Option<(PlaybackId, AssetKind)> {
        let playback = self
            .playbacks
            .iter()
            .find_map(|(id, active)| (active.handle == handle).then_some(*id))?;
        self.playbacks
            .remove(&playback)
            .map(|active| (playback, active.kind))
    }

    fn handle(&mut self, event: TourEvent) -> Option<Notice> {
        let name = event.name();
        tracing::debug!(event = name, mode = ?self.state.mode(), "dispatch");
        match self.state.apply(event, &self.catalog) {
            Ok(step) => {
                for effect in step.effects {
                    self.execute(effect);
                }
                if let Some(notice) = &step.notice {
                    tracing::warn!(title = notice.title(), message = %notice.message(), "notice");
                }
                step.notice
            }
            Err(err) if err.is_stale() => {
                tracing::debug!(error = %err, "stale event");
                None
            }
            Err(err) => {
                let notice = err.notice();
                if notice.is_some() {
                    tracing::info!(error = %err, "event rejected");
                } else {
                    tracing::warn!(error = %err, "illegal transition");
                }
                notice
            }
        }
    }

    fn execute(&mut self, effect: TourEffect) {
        match effect {
            TourEffect::PlayAudio { playback, landmark } => self.play_audio(playback, landmark),
            TourEffect::PlayVideo {
                playback, segment, ..
            } => {
                let Some(source) = self.assets.resolve_video() else {
                    self.missing(playback, AssetKind::Video, "Video file not found".to_string());
                    return;
                };
                match self.media.play_video_segment(&source, segment) {
                    Ok(handle) => self.track(playback, handle, AssetKind::Video),
                    Err(err) => self.missing(playback, AssetKind::Video, err.to_string()),
                }
            }
            TourEffect::StopAudio(playback) | TourEffect::StopVideo(playback) => {
                if let Some(active) = self.playbacks.remove(&playback) {
                    self.media.stop(active.handle);
                }
            }
            TourEffect::PauseVideo(playback) => {
                if let Some(active) = self.playbacks.get(&playback) {
                    self.media.pause(active.handle);
                }
            }
            TourEffect::ResumeVideo(playback) => {
                if let Some(active) = self.playbacks.get(&playback) {
                    self.media.resume(active.handle);
                }
            }
            TourEffect::ProbeGallery(landmark) => {
                let image_count = self
                    .catalog
                    .landmark(landmark)
                    .map_or(0, |found| self.assets.count_gallery_images(found));
                tracing::debug!(landmark = %landmark, image_count, "gallery probed");
                self.queue.push_back(TourEvent::GalleryProbed {
                    landmark,
                    image_count,
                });
            }
            TourEffect::ScheduleReturn { timer, delay } => {
                self.timers.schedule(timer, self.clock.now() + delay);
            }
            TourEffect::CancelTimer(timer) => {
                self.timers.cancel(timer);
            }
            TourEffect::PlayCue(outcome) => self.cues.play_outcome(outcome),
        }
    }

    fn play_audio(&mut self, playback: PlaybackId, landmark: LandmarkId) {
        let Some(found) = self.catalog.landmark(landmark) else {
            return;
        };
        let Some(track) = self.assets.resolve_audio(found) else {
            let detail = format!("Audio file not found: {}", audio_path(found).display());
            self.missing(playback, AssetKind::Audio, detail);
            return;
        };
        match self.media.play_audio(&track) {
            Ok(handle) => self.track(playback, handle, AssetKind::Audio),
            Err(err) => self.missing(playback, AssetKind::Audio, err.to_string()),
        }
    }

    fn track(&mut self, playback: PlaybackId, handle: MediaHandle, kind: AssetKind) {
        self.playbacks
            .insert(playback, ActivePlayback { handle, kind });
    }

    fn missing(&mut self, playback: PlaybackId, kind: AssetKind, detail: String) {
        tracing::warn!(kind = kind.label(), %detail, "media unavailable");
        self.queue.push_back(TourEvent::MediaFailed {
            playback,
            asset: MissingAsset::new(kind, detail),
        });
    }
}

impl std::fmt::Debug for TourController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourController")
            .field("state", &self.state)
            .field("clock", &self.clock)
            .field("timers", &self.timers)
            .field("playbacks", &self.playbacks.len())
            .finish_non_exhaustive()
    }
}


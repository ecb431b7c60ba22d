use serde::{Deserialize, Serialize};

use crate::model::{LandmarkId, PlaybackId, QuizChoice, QuizOutcome, TimerId, TourCatalog};
use crate::tour::effect::{Notice, Step, TourEffect};
use crate::tour::error::TourError;
use crate::tour::event::TourEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourMode {
    Map,
    LandmarkOverview,
    VideoPlaying,
    VideoPaused,
    Quiz,
    QuizAnswered,
    Gallery,
}

impl TourMode {
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::VideoPlaying | Self::VideoPaused)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GalleryCursor {
    index: usize,
    count: usize,
}

impl GalleryCursor {
    fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.count,
            ..self
        }
    }

    fn prev(self) -> Self {
        Self {
            index: (self.index + self.count - 1) % self.count,
            ..self
        }
    }
}

/// The single mutable tour session.
///
/// Invariants:
/// - `selected` is `None` iff `mode == Map`
/// - `gallery` is `Some` iff `mode == Gallery`, with `index < count`
/// - `video` is `Some` iff the mode is a video mode
/// - `pending_timer` is only set in `QuizAnswered`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourState {
    mode: TourMode,
    selected: Option<LandmarkId>,
    gallery: Option<GalleryCursor>,
    quiz_answer: Option<QuizChoice>,
    pending_timer: Option<TimerId>,
    audio: Option<PlaybackId>,
    video: Option<PlaybackId>,
    next_playback: u64,
    next_timer: u64,
}

impl Default for TourState {
    fn default() -> Self {
        Self::new()
    }
}

impl TourState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TourMode::Map,
            selected: None,
            gallery: None,
            quiz_answer: None,
            pending_timer: None,
            audio: None,
            video: None,
            next_playback: 1,
            next_timer: 1,
        }
    }

    #[must_use]
    pub fn mode(&self) -> TourMode {
        self.mode
    }

    #[must_use]
    pub fn selected_landmark(&self) -> Option<LandmarkId> {
        self.selected
    }

    #[must_use]
    pub fn gallery_index(&self) -> Option<usize> {
        self.gallery.map(|cursor| cursor.index)
    }

    #[must_use]
    pub fn gallery_count(&self) -> Option<usize> {
        self.gallery.map(|cursor| cursor.count)
    }

    #[must_use]
    pub fn quiz_answer(&self) -> Option<QuizChoice> {
        self.quiz_answer
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }

    #[must_use]
    pub fn audio_playback(&self) -> Option<PlaybackId> {
        self.audio
    }

    #[must_use]
    pub fn video_playback(&self) -> Option<PlaybackId> {
        self.video
    }

    #[must_use]
    pub fn is_audio_playing(&self) -> bool {
        self.audio.is_some()
    }

    /// Outcome of the submitted answer, if the current quiz has been answered.
    #[must_use]
    pub fn quiz_outcome(&self, catalog: &TourCatalog) -> Option<QuizOutcome> {
        let answer = self.quiz_answer?;
        let landmark = catalog.landmark(self.selected?)?;
        Some(landmark.quiz().grade(answer))
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// Returns `TourError` when the event is rejected; the state is left untouched.
    pub fn apply(&mut self, event: TourEvent, catalog: &TourCatalog) -> Result<Step, TourError> {
        let name = event.name();
        match event {
            TourEvent::SelectLandmark(id) => self.select(id, catalog),
            TourEvent::ToggleSelectLandmark(id) => {
                if self.selected == Some(id) {
                    Ok(self.reset())
                } else {
                    self.select(id, catalog)
                }
            }
            TourEvent::ToggleAudio => {
                let landmark = self.require(name, TourMode::LandmarkOverview)?;
                let effect = match self.audio.take() {
                    Some(playback) => TourEffect::StopAudio(playback),
                    None => {
                        let playback = self.allocate_playback();
                        self.audio = Some(playback);
                        TourEffect::PlayAudio { playback, landmark }
                    }
                };
                Ok(Step::with_effects(vec![effect]))
            }
            TourEvent::PlayVideo => {
                let landmark = self.require(name, TourMode::LandmarkOverview)?;
                let segment = catalog
                    .landmark(landmark)
                    .ok_or(TourError::UnknownLandmark(landmark))?
                    .segment();
                let mut effects = self.stop_audio();
                let playback = self.allocate_playback();
                self.video = Some(playback);
                self.mode = TourMode::VideoPlaying;
                effects.push(TourEffect::PlayVideo {
                    playback,
                    landmark,
                    segment,
                });
                Ok(Step::with_effects(effects))
            }
            TourEvent::ToggleVideoPause => match (self.mode, self.video) {
                (TourMode::VideoPlaying, Some(playback)) => {
                    self.mode = TourMode::VideoPaused;
                    Ok(Step::with_effects(vec![TourEffect::PauseVideo(playback)]))
                }
                (TourMode::VideoPaused, Some(playback)) => {
                    self.mode = TourMode::VideoPlaying;
                    Ok(Step::with_effects(vec![TourEffect::ResumeVideo(playback)]))
                }
                _ => Err(self.illegal(name)),
            },
            TourEvent::EndVideo => {
                if !self.mode.is_video() {
                    return Err(self.illegal(name));
                }
                let mut effects = self.cancel_timer();
                if let Some(playback) = self.video.take() {
                    effects.push(TourEffect::StopVideo(playback));
                }
                self.mode = TourMode::Quiz;
                Ok(Step::with_effects(effects))
            }
            TourEvent::VideoCompleted(playback) => {
                if !self.mode.is_video() || self.video != Some(playback) {
                    return Err(TourError::StaleEvent { event: name });
                }
                self.video = None;
                self.mode = TourMode::Quiz;
                Ok(Step::default())
            }
            TourEvent::OpenGallery => {
                let landmark = self.require(name, TourMode::LandmarkOverview)?;
                Ok(Step::with_effects(vec![TourEffect::ProbeGallery(landmark)]))
            }
            TourEvent::GalleryProbed {
                landmark,
                image_count,
            } => {
                if self.mode != TourMode::LandmarkOverview || self.selected != Some(landmark) {
                    return Err(TourError::StaleEvent { event: name });
                }
                if image_count == 0 {
                    return Err(TourError::GalleryEmpty);
                }
                self.gallery = Some(GalleryCursor {
                    index: 0,
                    count: image_count,
                });
                self.mode = TourMode::Gallery;
                Ok(Step::default())
            }
            TourEvent::CloseGallery => {
                self.require(name, TourMode::Gallery)?;
                self.gallery = None;
                self.mode = TourMode::LandmarkOverview;
                Ok(Step::default())
            }
            TourEvent::GalleryNext => self.step_gallery(name, GalleryCursor::next),
            TourEvent::GalleryPrev => self.step_gallery(name, GalleryCursor::prev),
            TourEvent::GoToQuiz => {
                self.require(name, TourMode::LandmarkOverview)?;
                let effects = self.stop_audio();
                self.mode = TourMode::Quiz;
                Ok(Step::with_effects(effects))
            }
            TourEvent::SubmitAnswer(choice) => {
                let landmark = self.require(name, TourMode::Quiz)?;
                let choice = choice.ok_or(TourError::NoSelection)?;
                let outcome = catalog
                    .landmark(landmark)
                    .ok_or(TourError::UnknownLandmark(landmark))?
                    .quiz()
                    .grade(choice);
                let timer = self.allocate_timer();
                self.quiz_answer = Some(choice);
                self.pending_timer = Some(timer);
                self.mode = TourMode::QuizAnswered;
                Ok(Step::with_effects(vec![
                    TourEffect::PlayCue(outcome),
                    TourEffect::ScheduleReturn {
                        timer,
                        delay: catalog.settings().return_delay(),
                    },
                ]))
            }
            TourEvent::Reset => Ok(self.reset()),
            TourEvent::AudioCompleted(playback) => {
                if self.audio != Some(playback) {
                    return Err(TourError::StaleEvent { event: name });
                }
                self.audio = None;
                Ok(Step::default())
            }
            TourEvent::MediaFailed { playback, asset } => {
                if self.mode.is_video() && self.video == Some(playback) {
                    // Fall back to the overview rather than skipping ahead to the quiz.
                    self.video = None;
                    self.mode = TourMode::LandmarkOverview;
                } else if self.audio == Some(playback) {
                    self.audio = None;
                } else {
                    return Err(TourError::StaleEvent { event: name });
                }
                Ok(Step::default().with_notice(Notice::MissingAsset(asset)))
            }
            TourEvent::TimerFired(timer) => {
                if self.pending_timer != Some(timer) {
                    return Err(TourError::StaleEvent { event: name });
                }
                self.pending_timer = None;
                Ok(self.reset())
            }
        }
    }

    fn select(&mut self, id: LandmarkId, catalog: &TourCatalog) -> Result<Step, TourError> {
        if catalog.landmark(id).is_none() {
            return Err(TourError::UnknownLandmark(id));
        }
        if self.selected == Some(id) {
            return Err(self.illegal("SelectLandmark"));
        }
        let effects = self.teardown();
        self.selected = Some(id);
        self.mode = TourMode::LandmarkOverview;
        Ok(Step::with_effects(effects))
    }

    fn step_gallery(
        &mut self,
        event: &'static str,
        step: fn(GalleryCursor) -> GalleryCursor,
    ) -> Result<Step, TourError> {
        self.require(event, TourMode::Gallery)?;
        self.gallery = self.gallery.map(step);
        Ok(Step::default())
    }

    fn reset(&mut self) -> Step {
        let effects = self.teardown();
        self.selected = None;
        self.mode = TourMode::Map;
        Step::with_effects(effects)
    }

    /// Cancel everything owned by the current landmark visit.
    fn teardown(&mut self) -> Vec<TourEffect> {
        let mut effects = self.cancel_timer();
        effects.extend(self.stop_audio());
        if let Some(playback) = self.video.take() {
            effects.push(TourEffect::StopVideo(playback));
        }
        self.gallery = None;
        self.quiz_answer = None;
        effects
    }

    fn cancel_timer(&mut self) -> Vec<TourEffect> {
        self.pending_timer
            .take()
            .map(TourEffect::CancelTimer)
            .into_iter()
            .collect()
    }

    fn stop_audio(&mut self) -> Vec<TourEffect> {
        self.audio
            .take()
            .map(TourEffect::StopAudio)
            .into_iter()
            .collect()
    }

    fn require(&self, event: &'static str, mode: TourMode) -> Result<LandmarkId, TourError> {
        match self.selected {
            Some(id) if self.mode == mode => Ok(id),
            _ => Err(self.illegal(event)),
        }
    }

    fn illegal(&self, event: &'static str) -> TourError {
        TourError::IllegalTransition {
            event,
            mode: self.mode,
        }
    }

    fn allocate_playback(&mut self) -> PlaybackId {
        let id = PlaybackId::new(self.next_playback);
        self.next_playback += 1;
        id
    }

    fn allocate_timer(&mut self) -> TimerId {
        let id = TimerId::new(self.next_timer);
        self.next_timer += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::tour::{AssetKind, MissingAsset};

    fn catalog() -> TourCatalog {
        TourCatalog::maseru()
    }

    fn id(index: usize) -> LandmarkId {
        LandmarkId::new(index)
    }

    fn assert_invariants(state: &TourState) {
        assert_eq!(state.selected.is_none(), state.mode == TourMode::Map);
        assert_eq!(state.gallery.is_some(), state.mode == TourMode::Gallery);
        if let Some(cursor) = state.gallery {
            assert!(cursor.index < cursor.count);
        }
        assert_eq!(state.video.is_some(), state.mode.is_video());
        if state.pending_timer.is_some() {
            assert_eq!(state.mode, TourMode::QuizAnswered);
        }
    }

    fn apply(state: &mut TourState, event: TourEvent) -> Result<Step, TourError> {
        let result = state.apply(event, &catalog());
        assert_invariants(state);
        result
    }

    fn in_overview(index: usize) -> TourState {
        let mut state = TourState::new();
        apply(&mut state, TourEvent::SelectLandmark(id(index))).unwrap();
        state
    }

    fn video_playback(step: &Step) -> PlaybackId {
        step.effects
            .iter()
            .find_map(|effect| match effect {
                TourEffect::PlayVideo { playback, .. } => Some(*playback),
                _ => None,
            })
            .expect("video requested")
    }

    fn in_gallery(count: usize) -> TourState {
        let mut state = in_overview(1);
        apply(&mut state, TourEvent::OpenGallery).unwrap();
        apply(
            &mut state,
            TourEvent::GalleryProbed {
                landmark: id(1),
                image_count: count,
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn select_from_map_enters_overview_for_every_landmark() {
        for (landmark, _) in catalog().iter() {
            let mut state = TourState::new();
            let step = apply(&mut state, TourEvent::SelectLandmark(landmark)).unwrap();
            assert_eq!(state.mode(), TourMode::LandmarkOverview);
            assert_eq!(state.selected_landmark(), Some(landmark));
            assert!(step.effects.is_empty());
        }
    }

    #[test]
    fn toggle_twice_returns_to_map() {
        let mut state = TourState::new();
        apply(&mut state, TourEvent::ToggleSelectLandmark(id(2))).unwrap();
        apply(&mut state, TourEvent::ToggleSelectLandmark(id(2))).unwrap();
        assert_eq!(state.mode(), TourMode::Map);
        assert_eq!(state.selected_landmark(), None);
    }

    #[test]
    fn selecting_the_same_landmark_directly_is_illegal() {
        let mut state = in_overview(0);
        let before = state.clone();
        let err = apply(&mut state, TourEvent::SelectLandmark(id(0))).unwrap_err();
        assert!(matches!(err, TourError::IllegalTransition { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn selecting_another_landmark_tears_down_media() {
        let mut state = in_overview(0);
        apply(&mut state, TourEvent::ToggleAudio).unwrap();
        let audio = state.audio_playback().unwrap();
        let step = apply(&mut state, TourEvent::SelectLandmark(id(3))).unwrap();
        assert_eq!(step.effects, vec![TourEffect::StopAudio(audio)]);
        assert_eq!(state.selected_landmark(), Some(id(3)));
        assert!(!state.is_audio_playing());
    }

    #[test]
    fn unknown_landmark_is_rejected() {
        let mut state = TourState::new();
        let err = apply(&mut state, TourEvent::SelectLandmark(id(42))).unwrap_err();
        assert_eq!(err, TourError::UnknownLandmark(id(42)));
        assert_eq!(state, TourState::new());
    }

    #[test]
    fn toggle_audio_starts_and_stops() {
        let mut state = in_overview(0);
        let step = apply(&mut state, TourEvent::ToggleAudio).unwrap();
        let playback = state.audio_playback().unwrap();
        assert_eq!(
            step.effects,
            vec![TourEffect::PlayAudio {
                playback,
                landmark: id(0)
            }]
        );
        let step = apply(&mut state, TourEvent::ToggleAudio).unwrap();
        assert_eq!(step.effects, vec![TourEffect::StopAudio(playback)]);
        assert_eq!(state.mode(), TourMode::LandmarkOverview);
    }

    #[test]
    fn audio_completion_clears_flag_once() {
        let mut state = in_overview(0);
        apply(&mut state, TourEvent::ToggleAudio).unwrap();
        let playback = state.audio_playback().unwrap();
        apply(&mut state, TourEvent::AudioCompleted(playback)).unwrap();
        assert!(!state.is_audio_playing());
        let err = apply(&mut state, TourEvent::AudioCompleted(playback)).unwrap_err();
        assert!(err.is_stale());
    }

    #[test]
    fn video_completion_and_end_video_both_reach_quiz() {
        let mut completed = in_overview(0);
        let step = apply(&mut completed, TourEvent::PlayVideo).unwrap();
        assert_eq!(completed.mode(), TourMode::VideoPlaying);
        let playback = video_playback(&step);
        apply(&mut completed, TourEvent::VideoCompleted(playback)).unwrap();
        assert_eq!(completed.mode(), TourMode::Quiz);

        let mut ended = in_overview(0);
        let step = apply(&mut ended, TourEvent::PlayVideo).unwrap();
        let playback = video_playback(&step);
        let step = apply(&mut ended, TourEvent::EndVideo).unwrap();
        assert_eq!(step.effects, vec![TourEffect::StopVideo(playback)]);
        assert_eq!(ended.mode(), TourMode::Quiz);
    }

    #[test]
    fn play_video_requests_landmark_segment_and_stops_audio() {
        let mut state = in_overview(2);
        apply(&mut state, TourEvent::ToggleAudio).unwrap();
        let audio = state.audio_playback().unwrap();
        let step = apply(&mut state, TourEvent::PlayVideo).unwrap();
        assert_eq!(step.effects[0], TourEffect::StopAudio(audio));
        assert!(matches!(
            step.effects[1],
            TourEffect::PlayVideo { landmark, segment, .. }
                if landmark == id(2) && segment.start_secs() == 367 && segment.end_secs() == 410
        ));
    }

    #[test]
    fn pause_toggle_is_its_own_inverse() {
        let mut state = in_overview(1);
        let step = apply(&mut state, TourEvent::PlayVideo).unwrap();
        let playback = video_playback(&step);

        let step = apply(&mut state, TourEvent::ToggleVideoPause).unwrap();
        assert_eq!(state.mode(), TourMode::VideoPaused);
        assert_eq!(step.effects, vec![TourEffect::PauseVideo(playback)]);

        let step = apply(&mut state, TourEvent::ToggleVideoPause).unwrap();
        assert_eq!(state.mode(), TourMode::VideoPlaying);
        assert_eq!(step.effects, vec![TourEffect::ResumeVideo(playback)]);
    }

    #[test]
    fn late_video_completion_is_ignored() {
        let mut state = in_overview(0);
        let step = apply(&mut state, TourEvent::PlayVideo).unwrap();
        let playback = video_playback(&step);
        apply(&mut state, TourEvent::EndVideo).unwrap();
        let before = state.clone();

        let err = apply(&mut state, TourEvent::VideoCompleted(playback)).unwrap_err();
        assert!(err.is_stale());
        assert_eq!(state, before);
        assert_eq!(state.mode(), TourMode::Quiz);
    }

    #[test]
    fn completion_for_an_older_playback_is_ignored() {
        let mut state = in_overview(0);
        let first = video_playback(&apply(&mut state, TourEvent::PlayVideo).unwrap());
        apply(&mut state, TourEvent::Reset).unwrap();
        apply(&mut state, TourEvent::SelectLandmark(id(0))).unwrap();
        apply(&mut state, TourEvent::PlayVideo).unwrap();

        let err = apply(&mut state, TourEvent::VideoCompleted(first)).unwrap_err();
        assert!(err.is_stale());
        assert_eq!(state.mode(), TourMode::VideoPlaying);
    }

    #[test]
    fn failed_video_falls_back_to_overview() {
        let mut state = in_overview(0);
        let playback = video_playback(&apply(&mut state, TourEvent::PlayVideo).unwrap());
        let asset = MissingAsset::new(AssetKind::Video, "Video file not found");
        let step = apply(
            &mut state,
            TourEvent::MediaFailed {
                playback,
                asset: asset.clone(),
            },
        )
        .unwrap();
        assert_eq!(state.mode(), TourMode::LandmarkOverview);
        assert_eq!(step.notice, Some(Notice::MissingAsset(asset)));
    }

    #[test]
    fn gallery_wraps_in_both_directions() {
        for count in 1..=5 {
            let mut state = in_gallery(count);
            assert_eq!(state.gallery_index(), Some(0));

            apply(&mut state, TourEvent::GalleryPrev).unwrap();
            assert_eq!(state.gallery_index(), Some(count - 1));

            apply(&mut state, TourEvent::GalleryNext).unwrap();
            assert_eq!(state.gallery_index(), Some(0));
        }
    }

    #[test]
    fn empty_gallery_stays_in_overview() {
        let mut state = in_overview(0);
        let step = apply(&mut state, TourEvent::OpenGallery).unwrap();
        assert_eq!(step.effects, vec![TourEffect::ProbeGallery(id(0))]);
        let err = apply(
            &mut state,
            TourEvent::GalleryProbed {
                landmark: id(0),
                image_count: 0,
            },
        )
        .unwrap_err();
        assert_eq!(err, TourError::GalleryEmpty);
        assert_eq!(err.notice(), Some(Notice::GalleryEmpty));
        assert_eq!(state.mode(), TourMode::LandmarkOverview);
    }

    #[test]
    fn probe_for_a_previous_landmark_is_stale() {
        let mut state = in_overview(0);
        apply(&mut state, TourEvent::OpenGallery).unwrap();
        apply(&mut state, TourEvent::SelectLandmark(id(1))).unwrap();
        let err = apply(
            &mut state,
            TourEvent::GalleryProbed {
                landmark: id(0),
                image_count: 3,
            },
        )
        .unwrap_err();
        assert!(err.is_stale());
        assert_eq!(state.mode(), TourMode::LandmarkOverview);
    }

    #[test]
    fn close_gallery_returns_to_overview() {
        let mut state = in_gallery(3);
        apply(&mut state, TourEvent::GalleryNext).unwrap();
        apply(&mut state, TourEvent::CloseGallery).unwrap();
        assert_eq!(state.mode(), TourMode::LandmarkOverview);
        assert_eq!(state.gallery_index(), None);
    }

    #[test]
    fn submit_correct_answer_schedules_return() {
        let mut state = in_overview(1);
        apply(&mut state, TourEvent::GoToQuiz).unwrap();
        let step = apply(&mut state, TourEvent::SubmitAnswer(Some(QuizChoice::SECOND))).unwrap();
        let timer = state.pending_timer().unwrap();
        assert_eq!(state.mode(), TourMode::QuizAnswered);
        assert_eq!(
            step.effects,
            vec![
                TourEffect::PlayCue(QuizOutcome::Correct),
                TourEffect::ScheduleReturn {
                    timer,
                    delay: Duration::seconds(5)
                },
            ]
        );
        assert_eq!(state.quiz_outcome(&catalog()), Some(QuizOutcome::Correct));
    }

    #[test]
    fn submit_wrong_answer_names_correct_option_and_second_submit_is_ignored() {
        let mut state = in_overview(1);
        apply(&mut state, TourEvent::GoToQuiz).unwrap();
        let step = apply(&mut state, TourEvent::SubmitAnswer(Some(QuizChoice::THIRD))).unwrap();
        assert_eq!(
            step.effects[0],
            TourEffect::PlayCue(QuizOutcome::Incorrect {
                correct: QuizChoice::SECOND
            })
        );
        let before = state.clone();
        let err = apply(&mut state, TourEvent::SubmitAnswer(Some(QuizChoice::SECOND))).unwrap_err();
        assert!(matches!(err, TourError::IllegalTransition { .. }));
        assert_eq!(state, before);
        assert_eq!(state.quiz_answer(), Some(QuizChoice::THIRD));
    }

    #[test]
    fn submit_without_selection_is_rejected() {
        let mut state = in_overview(0);
        apply(&mut state, TourEvent::GoToQuiz).unwrap();
        let err = apply(&mut state, TourEvent::SubmitAnswer(None)).unwrap_err();
        assert_eq!(err, TourError::NoSelection);
        assert_eq!(err.notice(), Some(Notice::NoSelection));
        assert_eq!(state.mode(), TourMode::Quiz);
    }

    #[test]
    fn timer_fires_reset_only_while_pending() {
        let mut state = in_overview(0);
        apply(&mut state, TourEvent::GoToQuiz).unwrap();
        apply(&mut state, TourEvent::SubmitAnswer(Some(QuizChoice::FIRST))).unwrap();
        let timer = state.pending_timer().unwrap();

        apply(&mut state, TourEvent::TimerFired(timer)).unwrap();
        assert_eq!(state.mode(), TourMode::Map);
        assert_eq!(state.quiz_answer(), None);

        apply(&mut state, TourEvent::SelectLandmark(id(2))).unwrap();
        let err = apply(&mut state, TourEvent::TimerFired(timer)).unwrap_err();
        assert!(err.is_stale());
        assert_eq!(state.selected_landmark(), Some(id(2)));
    }

    #[test]
    fn navigating_away_cancels_pending_timer() {
        let mut state = in_overview(0);
        apply(&mut state, TourEvent::GoToQuiz).unwrap();
        apply(&mut state, TourEvent::SubmitAnswer(Some(QuizChoice::FIRST))).unwrap();
        let timer = state.pending_timer().unwrap();

        let step = apply(&mut state, TourEvent::SelectLandmark(id(3))).unwrap();
        assert_eq!(step.effects, vec![TourEffect::CancelTimer(timer)]);
        assert_eq!(state.pending_timer(), None);
    }

    #[test]
    fn illegal_events_leave_state_untouched() {
        let mut state = TourState::new();
        for event in [
            TourEvent::ToggleAudio,
            TourEvent::PlayVideo,
            TourEvent::ToggleVideoPause,
            TourEvent::EndVideo,
            TourEvent::OpenGallery,
            TourEvent::GalleryNext,
            TourEvent::GoToQuiz,
            TourEvent::SubmitAnswer(Some(QuizChoice::FIRST)),
        ] {
            let err = apply(&mut state, event).unwrap_err();
            assert!(matches!(
                err,
                TourError::IllegalTransition {
                    mode: TourMode::Map,
                    ..
                }
            ));
            assert_eq!(state, TourState::new());
        }
    }

    #[test]
    fn reset_from_map_is_a_no_op() {
        let mut state = TourState::new();
        let step = apply(&mut state, TourEvent::Reset).unwrap();
        assert!(step.effects.is_empty());
        assert_eq!(state, TourState::new());
    }
}

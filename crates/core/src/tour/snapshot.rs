use crate::model::{LandmarkId, OPTION_COUNT, QuizChoice, QuizOutcome, TourCatalog};
use crate::tour::effect::Notice;
use crate::tour::state::{TourMode, TourState};

/// Which controls the presentation layer should offer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordances {
    pub back_to_map: bool,
    pub toggle_audio: bool,
    pub audio_playing: bool,
    pub view_images: bool,
    pub go_to_quiz: bool,
    pub play_video: bool,
    pub pause_video: bool,
    pub video_paused: bool,
    pub end_video: bool,
    pub submit_answer: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryView {
    pub index: usize,
    pub count: usize,
}

impl GalleryView {
    /// 1-based counter, e.g. `2/5`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub answer: Option<QuizChoice>,
    pub outcome: Option<QuizOutcome>,
    pub outcome_message: Option<String>,
}

/// Read-only projection of the tour state for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiSnapshot {
    pub mode: TourMode,
    pub selected: Option<LandmarkId>,
    pub title: String,
    pub window_title: String,
    pub show_landmark_image: bool,
    pub show_video: bool,
    pub affordances: Affordances,
    pub gallery: Option<GalleryView>,
    pub quiz: Option<QuizView>,
    pub notice: Option<Notice>,
}

impl UiSnapshot {
    #[must_use]
    pub fn project(state: &TourState, catalog: &TourCatalog, notice: Option<Notice>) -> Self {
        let settings = catalog.settings();
        let mode = state.mode();
        let landmark = state
            .selected_landmark()
            .and_then(|id| catalog.landmark(id));

        let (title, window_title) = match landmark {
            Some(landmark) => (
                landmark.name().to_uppercase(),
                settings.landmark_window_title(landmark.name()),
            ),
            None => (settings.map_title(), settings.window_title()),
        };

        let overview = mode == TourMode::LandmarkOverview;
        let affordances = Affordances {
            back_to_map: mode != TourMode::Map,
            toggle_audio: overview,
            audio_playing: state.is_audio_playing(),
            view_images: overview,
            go_to_quiz: overview,
            play_video: overview,
            pause_video: mode.is_video(),
            video_paused: mode == TourMode::VideoPaused,
            end_video: mode.is_video(),
            submit_answer: mode == TourMode::Quiz,
        };

        let gallery = state
            .gallery_index()
            .zip(state.gallery_count())
            .map(|(index, count)| GalleryView { index, count });

        let quiz = match (mode, landmark) {
            (TourMode::Quiz | TourMode::QuizAnswered, Some(landmark)) => {
                let question = landmark.quiz();
                let outcome = state.quiz_outcome(catalog);
                Some(QuizView {
                    prompt: question.prompt().to_string(),
                    options: question.options().clone(),
                    answer: state.quiz_answer(),
                    outcome,
                    outcome_message: outcome.map(|outcome| question.outcome_message(outcome)),
                })
            }
            _ => None,
        };

        Self {
            mode,
            selected: state.selected_landmark(),
            title,
            window_title,
            show_landmark_image: matches!(mode, TourMode::LandmarkOverview | TourMode::Gallery),
            show_video: mode.is_video(),
            affordances,
            gallery,
            quiz,
            notice,
        }
    }
}

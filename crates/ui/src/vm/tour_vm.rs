use tour_core::model::{LandmarkId, QuizChoice, TourCatalog};
use tour_core::tour::UiSnapshot;

/// Fill used for the hotspot of the selected landmark.
pub const SELECTED_HOTSPOT_COLOR: &str = "green";

/// Hotspot radius in map pixels.
const HOTSPOT_RADIUS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HotspotVm {
    pub id: LandmarkId,
    pub name: String,
    pub style: String,
    pub label_style: String,
    pub class: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub choice: QuizChoice,
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub answered: bool,
    pub outcome_message: Option<String>,
    pub outcome_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub title: &'static str,
    pub message: String,
}

/// Display strings and flags for one render of the tour screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourVm {
    pub title: String,
    pub window_title: String,
    pub hotspots: Vec<HotspotVm>,
    pub show_back: bool,
    pub show_landmark_image: bool,
    pub show_video: bool,
    /// `None` hides the button.
    pub audio_label: Option<&'static str>,
    pub video_pause_label: Option<&'static str>,
    pub show_view_images: bool,
    pub show_go_to_quiz: bool,
    pub show_play_video: bool,
    pub show_end_video: bool,
    pub quiz: Option<QuizVm>,
    pub gallery_label: Option<String>,
    pub notice: Option<NoticeVm>,
}

#[must_use]
pub fn map_tour(snapshot: &UiSnapshot, catalog: &TourCatalog) -> TourVm {
    let affordances = snapshot.affordances;

    let hotspots = catalog
        .iter()
        .map(|(id, landmark)| {
            let selected = snapshot.selected == Some(id);
            let hotspot = landmark.hotspot();
            let fill = if selected {
                SELECTED_HOTSPOT_COLOR
            } else {
                landmark.color().as_str()
            };
            HotspotVm {
                id,
                name: landmark.name().to_string(),
                style: format!(
                    "left: {}px; top: {}px; background: {fill};",
                    hotspot.x.saturating_sub(HOTSPOT_RADIUS),
                    hotspot.y.saturating_sub(HOTSPOT_RADIUS),
                ),
                label_style: format!(
                    "left: {}px; top: {}px;",
                    hotspot.x + 20,
                    hotspot.y.saturating_sub(10),
                ),
                class: if selected {
                    "hotspot hotspot--selected"
                } else {
                    "hotspot"
                },
                selected,
            }
        })
        .collect();

    let audio_label = affordances.toggle_audio.then_some(if affordances.audio_playing {
        "STOP AUDIO"
    } else {
        "PLAY AUDIO"
    });
    let video_pause_label = affordances.pause_video.then_some(if affordances.video_paused {
        "CONTINUE VIDEO"
    } else {
        "PAUSE VIDEO"
    });

    let quiz = snapshot.quiz.as_ref().map(|quiz| {
        let options = QuizChoice::ALL
            .into_iter()
            .map(|choice| QuizOptionVm {
                choice,
                label: quiz.options[choice.position()].clone(),
                checked: quiz.answer == Some(choice),
            })
            .collect();
        let outcome_class = match quiz.outcome {
            Some(outcome) if outcome.is_correct() => "quiz-result quiz-result--correct",
            Some(_) => "quiz-result quiz-result--incorrect",
            None => "quiz-result",
        };
        QuizVm {
            prompt: quiz.prompt.clone(),
            options,
            answered: quiz.outcome.is_some(),
            outcome_message: quiz.outcome_message.clone(),
            outcome_class,
        }
    });

    TourVm {
        title: snapshot.title.clone(),
        window_title: snapshot.window_title.clone(),
        hotspots,
        show_back: affordances.back_to_map,
        show_landmark_image: snapshot.show_landmark_image,
        show_video: snapshot.show_video,
        audio_label,
        video_pause_label,
        show_view_images: affordances.view_images,
        show_go_to_quiz: affordances.go_to_quiz,
        show_play_video: affordances.play_video,
        show_end_video: affordances.end_video,
        quiz,
        gallery_label: snapshot.gallery.map(|gallery| gallery.position_label()),
        notice: snapshot.notice.as_ref().map(|notice| NoticeVm {
            title: notice.title(),
            message: notice.message(),
        }),
    }
}

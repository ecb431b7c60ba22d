use tour_core::model::{LandmarkId, QuizChoice};
use tour_core::tour::TourEvent;

use super::test_harness::setup_tour_harness;

fn render(events: Vec<TourEvent>) -> String {
    let mut harness = setup_tour_harness(events);
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn map_view_renders_hotspots() {
    let html = render(Vec::new());
    assert!(html.contains("MASERU"), "missing title in {html}");
    for name in ["Mokorotlong", "Royal Palace", "Setsoto Stadium", "Parliament"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("file:///tour/images/map/maseru_map.jpg"));
    assert!(!html.contains("Back to Map"), "unexpected back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn overview_offers_landmark_controls() {
    let html = render(vec![TourEvent::SelectLandmark(LandmarkId::new(1))]);
    assert!(html.contains("ROYAL PALACE"), "missing title in {html}");
    for label in ["Back to Map", "PLAY AUDIO", "VIEW IMAGES", "GO TO QUIZ", "PLAY VIDEO"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("hotspot hotspot--selected"));
    assert!(html.contains("file:///tour/images/royal_palace/main.jpg"));
}

#[tokio::test(flavor = "current_thread")]
async fn missing_audio_shows_notice() {
    let html = render(vec![
        TourEvent::SelectLandmark(LandmarkId::new(0)),
        TourEvent::ToggleAudio,
    ]);
    assert!(html.contains("Audio Error"), "missing notice title in {html}");
    assert!(
        html.contains("Audio file not found: audios/mokorotlong.mp3"),
        "missing notice in {html}"
    );
    assert!(html.contains("PLAY AUDIO"));
}

#[tokio::test(flavor = "current_thread")]
async fn video_mode_shows_pause_and_end() {
    let html = render(vec![
        TourEvent::SelectLandmark(LandmarkId::new(2)),
        TourEvent::PlayVideo,
    ]);
    assert!(html.contains("PAUSE VIDEO"), "missing pause in {html}");
    assert!(html.contains("END VIDEO"), "missing end in {html}");
    assert!(!html.contains("GO TO QUIZ"));
}

#[tokio::test(flavor = "current_thread")]
async fn answered_quiz_shows_result() {
    let html = render(vec![
        TourEvent::SelectLandmark(LandmarkId::new(3)),
        TourEvent::GoToQuiz,
        TourEvent::SubmitAnswer(Some(QuizChoice::THIRD)),
    ]);
    assert!(html.contains("How many Parliament seats?"), "missing prompt in {html}");
    assert!(
        html.contains("Incorrect. Correct answer: 120"),
        "missing result in {html}"
    );
    assert!(!html.contains("SUBMIT ANSWER"));
}

#[tokio::test(flavor = "current_thread")]
async fn gallery_shows_counter() {
    let html = render(vec![
        TourEvent::SelectLandmark(LandmarkId::new(0)),
        TourEvent::OpenGallery,
        TourEvent::GalleryNext,
    ]);
    assert!(html.contains("2/2"), "missing counter in {html}");
    assert!(html.contains("file:///tour/images/mokorotlong/2.jpg"));
}

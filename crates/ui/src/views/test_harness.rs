use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AssetResolver, Clock};
use tour_core::model::{Landmark, TourCatalog};
use tour_core::time::manual_clock;
use tour_core::tour::TourEvent;

use crate::context::{UiApp, build_app_context};
use crate::views::TourView;
use crate::views::tour::TourTestScript;

/// Resolves every asset except audio tracks, with two gallery images per landmark.
#[derive(Clone, Copy, Debug, Default)]
pub struct TestAssets;

impl AssetResolver for TestAssets {
    fn resolve_image(&self, landmark: &Landmark, name: &str) -> Option<PathBuf> {
        matches!(name, "main.jpg" | "1.jpg" | "2.jpg")
            .then(|| PathBuf::from(format!("/tour/images/{}/{name}", landmark.slug())))
    }

    fn resolve_audio(&self, _landmark: &Landmark) -> Option<PathBuf> {
        None
    }

    fn resolve_video(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/tour/videos/maseru_video.mp4"))
    }

    fn resolve_map(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/tour/images/map/maseru_map.jpg"))
    }
}

struct TestApp {
    catalog: Arc<TourCatalog>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<TourCatalog> {
        Arc::clone(&self.catalog)
    }

    fn assets(&self) -> Arc<dyn AssetResolver> {
        Arc::new(TestAssets)
    }

    fn clock(&self) -> Clock {
        manual_clock()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    script: TourTestScript,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TourHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.script.clone());
    rsx! { TourView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `TourView` over the built-in catalog after applying `events`.
pub fn setup_tour_harness(events: Vec<TourEvent>) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: Arc::new(TourCatalog::maseru()),
    });
    let dom = VirtualDom::new_with_props(
        TourHarness,
        ViewHarnessProps {
            app,
            script: TourTestScript(events),
        },
    );
    ViewHarness { dom }
}

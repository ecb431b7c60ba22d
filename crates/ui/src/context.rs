use std::sync::Arc;

use services::{AppServices, AssetResolver, Clock, SoundCue, TourController};
use tour_core::model::TourCatalog;

use crate::bridge::MediaBridge;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<TourCatalog>;
    fn assets(&self) -> Arc<dyn AssetResolver>;
    fn clock(&self) -> Clock;
}

impl UiApp for AppServices {
    fn catalog(&self) -> Arc<TourCatalog> {
        AppServices::catalog(self)
    }

    fn assets(&self) -> Arc<dyn AssetResolver> {
        AppServices::assets(self)
    }

    fn clock(&self) -> Clock {
        AppServices::clock(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<TourCatalog>,
    assets: Arc<dyn AssetResolver>,
    clock: Clock,
    bridge: MediaBridge,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            assets: app.assets(),
            clock: app.clock(),
            bridge: MediaBridge::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<TourCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn assets(&self) -> Arc<dyn AssetResolver> {
        Arc::clone(&self.assets)
    }

    #[must_use]
    pub fn bridge(&self) -> &MediaBridge {
        &self.bridge
    }

    /// A fresh controller wired to the webview media bridge.
    #[must_use]
    pub fn controller(&self) -> TourController {
        let cues: Arc<dyn SoundCue> = self.bridge.cues();
        TourController::new(
            self.catalog(),
            self.clock,
            self.bridge.media(),
            self.assets(),
            cues,
        )
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

use std::path::PathBuf;
use std::sync::Arc;

use tour_core::model::TourCatalog;

use crate::assets::{AssetResolver, FsAssetResolver};
use crate::catalog::load_catalog;
use crate::controller::TourController;
use crate::cue::SoundCue;
use crate::error::AppServicesError;
use crate::media::MediaService;
use crate::Clock;

/// Default asset root, relative to the working directory.
pub const DEFAULT_ASSET_ROOT: &str = "assets";

/// Launch-time configuration resolved from arguments and environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub asset_root: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub return_delay_secs: Option<u32>,
    /// Shared tour video, relative to the asset root.
    pub video_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            catalog_path: None,
            return_delay_secs: None,
            video_path: None,
        }
    }
}

/// Assembles the catalog and asset resolver the tour runs against.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<TourCatalog>,
    assets: Arc<FsAssetResolver>,
    clock: Clock,
}

impl AppServices {
    /// Build services from `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the asset root is missing or the catalog file
    /// cannot be loaded.
    pub fn new(config: &AppConfig, clock: Clock) -> Result<Self, AppServicesError> {
        if !config.asset_root.is_dir() {
            return Err(AppServicesError::MissingAssetRoot(config.asset_root.clone()));
        }

        let mut catalog = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => TourCatalog::maseru(),
        };
        if let Some(secs) = config.return_delay_secs {
            let settings = catalog.settings().clone().with_return_delay_secs(secs);
            catalog = catalog.with_settings(settings);
        }

        let mut assets = FsAssetResolver::new(&config.asset_root);
        if let Some(video) = &config.video_path {
            assets = assets.with_video(video);
        }
        if assets.resolve_video().is_none() {
            tracing::warn!(root = %config.asset_root.display(), "tour video not found");
        }
        if assets.resolve_map().is_none() {
            tracing::warn!(root = %config.asset_root.display(), "map image not found");
        }
        tracing::info!(
            root = %config.asset_root.display(),
            landmarks = catalog.len(),
            city = catalog.settings().city(),
            "tour services ready"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            assets: Arc::new(assets),
            clock,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<TourCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn assets(&self) -> Arc<FsAssetResolver> {
        Arc::clone(&self.assets)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Wire a controller to the given media backend and cue player.
    #[must_use]
    pub fn controller(
        &self,
        media: Arc<dyn MediaService>,
        cues: Arc<dyn SoundCue>,
    ) -> TourController {
        let assets: Arc<dyn AssetResolver> = self.assets.clone();
        TourController::new(self.catalog(), self.clock, media, assets, cues)
    }
}

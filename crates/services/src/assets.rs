//! Convention-based lookup of tour images, audio and video on disk.

use std::path::{Path, PathBuf};

use tour_core::model::Landmark;

/// File name of the hero image shown in the landmark overview.
pub const MAIN_IMAGE: &str = "main.jpg";
/// Shared tour video, relative to the asset root.
pub const DEFAULT_VIDEO: &str = "videos/maseru_video.mp4";
/// Background map, relative to the asset root.
pub const DEFAULT_MAP: &str = "images/map/maseru_map.jpg";

/// `images/{slug}/{name}`
#[must_use]
pub fn image_path(landmark: &Landmark, name: &str) -> PathBuf {
    Path::new("images").join(landmark.slug()).join(name)
}

/// `audios/{slug}.mp3`
#[must_use]
pub fn audio_path(landmark: &Landmark) -> PathBuf {
    Path::new("audios").join(format!("{}.mp3", landmark.slug()))
}

/// Gallery images are numbered from `1.jpg`; `index` is zero-based.
#[must_use]
pub fn gallery_file_name(index: usize) -> String {
    format!("{}.jpg", index + 1)
}

/// Looks up tour assets. Absence is reported as `None`, never as an error.
pub trait AssetResolver: Send + Sync {
    fn resolve_image(&self, landmark: &Landmark, name: &str) -> Option<PathBuf>;
    fn resolve_audio(&self, landmark: &Landmark) -> Option<PathBuf>;
    fn resolve_video(&self) -> Option<PathBuf>;
    fn resolve_map(&self) -> Option<PathBuf>;

    fn main_image(&self, landmark: &Landmark) -> Option<PathBuf> {
        self.resolve_image(landmark, MAIN_IMAGE)
    }

    fn gallery_image(&self, landmark: &Landmark, index: usize) -> Option<PathBuf> {
        self.resolve_image(landmark, &gallery_file_name(index))
    }

    /// Probe `1.jpg`, `2.jpg`, ... until one is missing.
    fn count_gallery_images(&self, landmark: &Landmark) -> usize {
        (0..)
            .take_while(|index| self.gallery_image(landmark, *index).is_some())
            .count()
    }
}

/// Resolves assets under a root directory, checking that each file exists.
#[derive(Clone, Debug)]
pub struct FsAssetResolver {
    root: PathBuf,
    video: PathBuf,
    map: PathBuf,
}

impl FsAssetResolver {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            video: PathBuf::from(DEFAULT_VIDEO),
            map: PathBuf::from(DEFAULT_MAP),
        }
    }

    #[must_use]
    pub fn with_video(mut self, relative: impl Into<PathBuf>) -> Self {
        self.video = relative.into();
        self
    }

    fn existing(&self, relative: &Path) -> Option<PathBuf> {
        let path = self.root.join(relative);
        path.is_file().then_some(path)
    }
}

impl AssetResolver for FsAssetResolver {
    fn resolve_image(&self, landmark: &Landmark, name: &str) -> Option<PathBuf> {
        self.existing(&image_path(landmark, name))
    }

    fn resolve_audio(&self, landmark: &Landmark) -> Option<PathBuf> {
        self.existing(&audio_path(landmark))
    }

    fn resolve_video(&self) -> Option<PathBuf> {
        self.existing(&self.video)
    }

    fn resolve_map(&self) -> Option<PathBuf> {
        self.existing(&self.map)
    }
}

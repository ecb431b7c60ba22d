//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use tour_core::model::CatalogError;

/// Errors reported by a `MediaService` backend when a request cannot be started.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MediaError {
    #[error("media backend is not running")]
    Unavailable,
    #[error("could not open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },
}

/// Errors reported by a `ToneSink`. Never surfaced past `ToneCue`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CueError {
    #[error("sound output is not available")]
    Unavailable,
}

/// Errors emitted while loading a catalog file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("could not read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
    #[error("asset root {} is not a directory", .0.display())]
    MissingAssetRoot(PathBuf),
}

//! Loading tour content from JSON files.

use std::path::Path;

use tour_core::model::{TourCatalog, TourCatalogDraft};

use crate::error::CatalogLoadError;

/// Parse and validate a catalog from JSON text.
///
/// # Errors
///
/// Returns `CatalogLoadError::Parse` for malformed JSON and `CatalogLoadError::Invalid`
/// when the content fails validation.
pub fn parse_catalog(json: &str) -> Result<TourCatalog, CatalogLoadError> {
    let draft: TourCatalogDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

/// Read a catalog file from disk.
///
/// # Errors
///
/// Returns `CatalogLoadError::Io` if the file cannot be read, otherwise see `parse_catalog`.
pub fn load_catalog(path: &Path) -> Result<TourCatalog, CatalogLoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&json)?;
    tracing::info!(
        path = %path.display(),
        landmarks = catalog.len(),
        "loaded tour catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_survives_json() {
        let catalog = TourCatalog::maseru();
        let json = serde_json::to_string_pretty(&TourCatalogDraft::from(&catalog)).unwrap();
        assert_eq!(parse_catalog(&json).unwrap(), catalog);
    }

    #[test]
    fn settings_default_when_omitted() {
        let json = r##"{
            "landmarks": [{
                "name": "Thaba Bosiu",
                "hotspot": { "x": 100, "y": 200 },
                "color": "#8e44ad",
                "segment": [0, 30],
                "quiz": {
                    "prompt": "Who founded the Basotho nation at Thaba Bosiu?",
                    "options": ["Moshoeshoe I", "Letsie III", "Lerotholi"],
                    "correct": 1
                }
            }]
        }"##;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.settings().return_delay_secs(), 5);
        assert_eq!(catalog.settings().city(), "Maseru");
    }

    #[test]
    fn invalid_content_is_reported() {
        assert!(matches!(
            parse_catalog(r#"{ "landmarks": [] }"#),
            Err(CatalogLoadError::Invalid(_))
        ));
        assert!(matches!(
            parse_catalog("not json"),
            Err(CatalogLoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_catalog(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}

//! Loading a manifest for the consumer side.
//!
//! A [`ManifestSource`] hands back the raw document; [`load_manifest`] parses
//! and validates it. There is no partial result: the caller either gets a
//! manifest that satisfies every invariant or a [`LoadError`], and the view
//! layer turns the latter into an error state instead of rendering cards.
//! Nothing here retries.

use crate::gallery::Gallery;
use crate::manifest::{Manifest, ManifestError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("manifest unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid manifest: {0}")]
    Invalid(#[from] ManifestError),
}

/// Somewhere a manifest document can be fetched from.
pub trait ManifestSource {
    fn fetch(&self) -> Result<String, LoadError>;
}

/// A manifest file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|source| LoadError::Unavailable {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fetch, parse and validate.
pub fn load_manifest(source: &dyn ManifestSource) -> Result<Manifest, LoadError> {
    let raw = source.fetch()?;
    let manifest: Manifest = serde_json::from_str(&raw)?;
    manifest.validate()?;
    Ok(manifest)
}

/// Outcome of the initial load, as seen by the view.
#[derive(Debug)]
pub enum LoadState {
    Loaded(Gallery),
    Failed(LoadError),
}

impl LoadState {
    pub fn from_source(source: &dyn ManifestSource) -> Self {
        match load_manifest(source) {
            Ok(manifest) => LoadState::Loaded(Gallery::new(manifest)),
            Err(err) => {
                tracing::error!(error = %err, "failed to load gallery manifest");
                LoadState::Failed(err)
            }
        }
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            LoadState::Loaded(gallery) => Some(gallery),
            LoadState::Failed(_) => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        match self {
            LoadState::Loaded(gallery) => Some(gallery),
            LoadState::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_manifest;
    use std::io::{Error, ErrorKind};
    use tempfile::TempDir;

    /// Source that always fails, as a dropped connection would.
    struct Unreachable;

    impl ManifestSource for Unreachable {
        fn fetch(&self) -> Result<String, LoadError> {
            Err(LoadError::Unavailable {
                path: PathBuf::from("manifest.json"),
                source: Error::new(ErrorKind::ConnectionRefused, "network down"),
            })
        }
    }

    struct Inline(String);

    impl ManifestSource for Inline {
        fn fetch(&self) -> Result<String, LoadError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn loads_manifest_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("manifest.json");
        std::fs::write(&path, serde_json::to_string_pretty(&sample_manifest()).unwrap())
            .unwrap();

        let manifest = load_manifest(&FileSource::new(&path)).unwrap();
        assert_eq!(manifest, sample_manifest());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let source = FileSource::new(tmp.path().join("manifest.json"));
        let err = load_manifest(&source).unwrap_err();
        assert!(matches!(err, LoadError::Unavailable { .. }));
    }

    #[test]
    fn network_failure_gives_failed_state() {
        let state = LoadState::from_source(&Unreachable);
        assert!(matches!(state, LoadState::Failed(LoadError::Unavailable { .. })));
        assert!(state.gallery().is_none());
    }

    #[test]
    fn malformed_json_rejected() {
        let err = load_manifest(&Inline("{ \"version\": ".to_string())).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn wrong_shape_rejected() {
        let err = load_manifest(&Inline("[1, 2, 3]".to_string())).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn dangling_category_rejected() {
        let mut manifest = sample_manifest();
        manifest.categories.shift_remove("kids");
        let raw = serde_json::to_string(&manifest).unwrap();

        let err = load_manifest(&Inline(raw)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(ManifestError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn loaded_state_wraps_gallery() {
        let raw = serde_json::to_string(&sample_manifest()).unwrap();
        let mut state = LoadState::from_source(&Inline(raw));
        assert_eq!(state.gallery().unwrap().manifest().images.len(), 3);
        assert!(state.gallery_mut().is_some());
    }
}

//! Filesystem scanning and manifest generation.
//!
//! Walks one folder per configured category and turns the image files it
//! finds into [`ImageRecord`]s.
//!
//! ## Directory Structure
//!
//! ```text
//! images/gallery/                  # source_dir
//! ├── wedding/                     # folder name == category key
//! │   ├── gown-01.jpg              # → wedding-1, "Wedding Gown 01"
//! │   ├── gown-02.JPG              # → wedding-2, "Wedding Gown 02"
//! │   └── notes.txt                # skipped: not an allow-listed extension
//! ├── lehenga/
//! │   └── red.png                  # → lehenga-1, "Partywear Lehenga"
//! └── unrelated/                   # ignored: not a configured category
//! ```
//!
//! ## Ordering and Identity
//!
//! Categories are visited in configuration order. Inside a category the kept
//! filenames are sorted lexicographically and numbered from 1, so
//! `id = "{key}-{n}"` is stable as long as the folder contents are. Running
//! the scan twice over the same tree yields the same `images` sequence; only
//! `generatedAt` moves.
//!
//! ## Failure Modes
//!
//! - A configured category with no folder is logged and contributes nothing.
//! - A symlink pointing nowhere is logged and skipped.
//! - Anything else the filesystem refuses (unreadable folder, a category path
//!   that is a plain file, a failed write) aborts the run.

use crate::config::GalleryConfig;
use crate::manifest::{ImageRecord, Manifest};
use crate::naming;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Category path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Manifest plus per-category bookkeeping for progress output.
#[derive(Debug)]
pub struct ScanReport {
    pub manifest: Manifest,
    pub categories: Vec<CategoryScan>,
}

/// What the scan saw in one category folder.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScan {
    pub key: String,
    pub found: usize,
    /// The folder did not exist.
    pub missing: bool,
    /// Regular files left out by the extension filter, sorted.
    pub skipped: Vec<String>,
}

/// Scan `root` using the categories in `config`, stamped with the current time.
pub fn scan(root: &Path, config: &GalleryConfig) -> Result<ScanReport, ScanError> {
    scan_at(root, config, Utc::now())
}

/// [`scan`] with an explicit generation timestamp.
pub fn scan_at(
    root: &Path,
    config: &GalleryConfig,
    generated_at: DateTime<Utc>,
) -> Result<ScanReport, ScanError> {
    let mut images = Vec::new();
    let mut categories = Vec::with_capacity(config.categories.len());

    for category in &config.categories {
        let dir = root.join(&category.key);
        let Some(listing) = list_category(&dir)? else {
            tracing::warn!(category = %category.key, path = %dir.display(), "category folder not found");
            categories.push(CategoryScan {
                key: category.key.clone(),
                found: 0,
                missing: true,
                skipped: Vec::new(),
            });
            continue;
        };

        let (mut kept, skipped): (Vec<String>, Vec<String>) = listing
            .into_iter()
            .partition(|name| naming::is_image_filename(name));
        kept.sort();

        for name in &skipped {
            tracing::debug!(category = %category.key, file = %name, "skipping non-image file");
        }

        let prefix = config.path_prefix.trim_end_matches('/');
        let records = kept.iter().enumerate().map(|(idx, filename)| ImageRecord {
            id: format!("{}-{}", category.key, idx + 1),
            category: category.key.clone(),
            path: if prefix.is_empty() {
                format!("{}/{}", category.key, filename)
            } else {
                format!("{}/{}/{}", prefix, category.key, filename)
            },
            title: naming::image_title(filename, &category.name),
            description: category.description.clone(),
            available: true,
        });
        images.extend(records);

        categories.push(CategoryScan {
            key: category.key.clone(),
            found: kept.len(),
            missing: false,
            skipped,
        });
    }

    Ok(ScanReport {
        manifest: Manifest {
            version: config.manifest_version.clone(),
            generated_at,
            categories: config.category_map(),
            images,
        },
        categories,
    })
}

/// Names of the regular files directly inside `dir`, sorted.
///
/// Returns `Ok(None)` if `dir` does not exist.
fn list_category(dir: &Path) -> Result<Option<Vec<String>>, ScanError> {
    let meta = match fs::metadata(dir) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                tracing::warn!(path = ?err.path(), "skipping broken symlink");
                continue;
            }
            Err(source) => {
                return Err(ScanError::Walk {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };
        if entry.file_type().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(Some(names))
}

/// A symlink whose target is gone. Listed by name, so it is not a read failure.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let target_missing = err
        .io_error()
        .is_some_and(|e| e.kind() == ErrorKind::NotFound);
    target_missing
        && err
            .path()
            .and_then(|p| fs::symlink_metadata(p).ok())
            .is_some_and(|meta| meta.file_type().is_symlink())
}

/// Write `manifest` as pretty-printed JSON, replacing any previous file.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ScanError> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    Ok(())
}

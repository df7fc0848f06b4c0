//! Shared test utilities.
//!
//! Provides gallery tree builders, lookup helpers and a hand-built manifest
//! so scan, gallery and render tests describe their inputs the same way.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_gallery(tmp.path(), &[
//!     ("wedding", &["gown-01.jpg", "gown-02.jpg"]),
//!     ("kids", &[]),
//! ]);
//! let manifest = scan(tmp.path(), &config).unwrap().manifest;
//! assert_eq!(image_ids(&manifest), vec!["wedding-1", "wedding-2"]);
//! ```

use crate::manifest::{Category, ImageRecord, Manifest};
use chrono::{TimeZone, Utc};
use indexmap::IndexMap;
use std::path::Path;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create `root/<category>/<file>` for every entry. File contents are
/// placeholders; the scanner only looks at names.
pub fn write_gallery(root: &Path, layout: &[(&str, &[&str])]) {
    for (category, files) in layout {
        let dir = root.join(category);
        std::fs::create_dir_all(&dir).unwrap();
        for file in *files {
            std::fs::write(dir.join(file), "fake image").unwrap();
        }
    }
}

/// A small valid manifest: two categories, three images.
///
/// ```text
/// wedding-1  wedding  Wedding Gown 01
/// wedding-2  wedding  Wedding Gown 02   (unavailable)
/// kids-1     kids     Kids Birthday Frock 1
/// ```
pub fn sample_manifest() -> Manifest {
    let mut categories = IndexMap::new();
    categories.insert(
        "wedding".to_string(),
        Category {
            name: "Wedding Gown".to_string(),
            description: "Custom wedding gown".to_string(),
        },
    );
    categories.insert(
        "kids".to_string(),
        Category {
            name: "Kids Birthday Frock".to_string(),
            description: "Adorable custom birthday frock".to_string(),
        },
    );

    Manifest {
        version: "1.0.0".to_string(),
        generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        categories,
        images: vec![
            record("wedding-1", "wedding", "gown-01.jpg", "Wedding Gown 01", true),
            record("wedding-2", "wedding", "gown-02.jpg", "Wedding Gown 02", false),
            record("kids-1", "kids", "frock-1.png", "Kids Birthday Frock 1", true),
        ],
    }
}

fn record(id: &str, category: &str, file: &str, title: &str, available: bool) -> ImageRecord {
    let description = match category {
        "wedding" => "Custom wedding gown",
        _ => "Adorable custom birthday frock",
    };
    ImageRecord {
        id: id.to_string(),
        category: category.to_string(),
        path: format!("images/gallery/{category}/{file}"),
        title: title.to_string(),
        description: description.to_string(),
        available,
    }
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Find a record by id. Panics if not found.
pub fn find_record<'a>(manifest: &'a Manifest, id: &str) -> &'a ImageRecord {
    manifest.find(id).unwrap_or_else(|| {
        let ids = image_ids(manifest);
        panic!("image '{id}' not found. Available: {ids:?}")
    })
}

/// All image ids in manifest order.
pub fn image_ids(manifest: &Manifest) -> Vec<&str> {
    manifest.images.iter().map(|i| i.id.as_str()).collect()
}

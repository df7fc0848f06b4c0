//! Generator configuration.
//!
//! Handles loading and validating `gallery.toml`. Every key is optional; a
//! missing file means the stock defaults, which describe the six categories
//! the site ships with.
//!
//! ## Configuration Options
//!
//! ```toml
//! source_dir = "images/gallery"   # Directory holding one folder per category
//! output = "manifest.json"        # Where the manifest is written
//! path_prefix = "images/gallery"  # Prefix for image paths inside the manifest
//! manifest_version = "1.0.0"      # Value of the manifest's `version` field
//!
//! [[categories]]
//! key = "wedding"                 # Folder name and manifest key
//! name = "Wedding Gown"           # Display name, also the title stem
//! description = "Custom wedding gown"
//! ```
//!
//! ## Categories Replace, Not Merge
//!
//! A `[[categories]]` list in the user file replaces the stock list
//! wholesale. Order in the file is the order of the manifest: categories are
//! scanned, serialized and rendered in exactly this sequence.
//!
//! Unknown keys are rejected to catch typos early.

use crate::manifest::Category;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default value for both the scanned directory and the manifest path prefix.
pub const DEFAULT_GALLERY_DIR: &str = "images/gallery";

/// Generator configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory containing one sub-folder per category key.
    pub source_dir: String,
    /// Manifest output path.
    pub output: String,
    /// Prefix joined with `<category>/<filename>` to form each image `path`.
    pub path_prefix: String,
    /// Written verbatim into the manifest's `version` field.
    pub manifest_version: String,
    /// Categories in scan order.
    pub categories: Vec<CategoryConfig>,
}

/// One configured category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Folder name under `source_dir`; also the manifest key.
    pub key: String,
    /// Human-facing name.
    pub name: String,
    /// Copied into every image record of the category.
    pub description: String,
}

impl CategoryConfig {
    pub fn new(key: &str, name: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_GALLERY_DIR.to_string(),
            output: "manifest.json".to_string(),
            path_prefix: DEFAULT_GALLERY_DIR.to_string(),
            manifest_version: "1.0.0".to_string(),
            categories: stock_categories(),
        }
    }
}

fn stock_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("wedding", "Wedding Gown", "Custom wedding gown"),
        CategoryConfig::new(
            "lehenga",
            "Partywear Lehenga",
            "Elegant partywear lehenga",
        ),
        CategoryConfig::new(
            "blouse",
            "Bridal Ariwork Blouse",
            "Stunning bridal blouse with intricate handwork",
        ),
        CategoryConfig::new(
            "kids",
            "Kids Birthday Frock",
            "Adorable custom birthday frock",
        ),
        CategoryConfig::new(
            "dhavani",
            "Dhavani Design",
            "Traditional dhavani set with contemporary styling",
        ),
        CategoryConfig::new("new-arrivals", "New Arrivals", "Latest collection"),
    ]
}

impl GalleryConfig {
    /// Validate keys and required values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest_version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "manifest_version must not be empty".into(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for category in &self.categories {
            let key = category.key.as_str();
            if key.is_empty() {
                return Err(ConfigError::Validation(
                    "category key must not be empty".into(),
                ));
            }
            if key.contains('/') || key.contains('\\') || key.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "category key '{key}' must be a plain folder name"
                )));
            }
            if !seen.insert(key) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category key '{key}'"
                )));
            }
        }
        Ok(())
    }

    /// The category mapping as written into the manifest, in config order.
    pub fn category_map(&self) -> IndexMap<String, Category> {
        self.categories
            .iter()
            .map(|c| {
                (
                    c.key.clone(),
                    Category {
                        name: c.name.clone(),
                        description: c.description.clone(),
                    },
                )
            })
            .collect()
    }
}

/// Load config from the given `gallery.toml` path.
///
/// Returns stock defaults if the file does not exist. Unknown keys and
/// invalid values are errors.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using stock defaults");
        let config = GalleryConfig::default();
        config.validate()?;
        return Ok(config);
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate config from TOML text.
pub fn parse_config(content: &str) -> Result<GalleryConfig, ConfigError> {
    let config: GalleryConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gallery Manifest Configuration
# ==============================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory containing one folder per category key.
source_dir = "images/gallery"

# Where the manifest is written. The file is fully replaced on every run.
output = "manifest.json"

# Prefix for image paths recorded in the manifest:
#   <path_prefix>/<category>/<filename>
path_prefix = "images/gallery"

# Value of the manifest's "version" field.
manifest_version = "1.0.0"

# ---------------------------------------------------------------------------
# Categories
# ---------------------------------------------------------------------------
# Scanned in the order listed. A [[categories]] list replaces this whole set.
# Image titles are "<name> <first number in the filename>".

[[categories]]
key = "wedding"
name = "Wedding Gown"
description = "Custom wedding gown"

[[categories]]
key = "lehenga"
name = "Partywear Lehenga"
description = "Elegant partywear lehenga"

[[categories]]
key = "blouse"
name = "Bridal Ariwork Blouse"
description = "Stunning bridal blouse with intricate handwork"

[[categories]]
key = "kids"
name = "Kids Birthday Frock"
description = "Adorable custom birthday frock"

[[categories]]
key = "dhavani"
name = "Dhavani Design"
description = "Traditional dhavani set with contemporary styling"

[[categories]]
key = "new-arrivals"
name = "New Arrivals"
description = "Latest collection"
"##
}

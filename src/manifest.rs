//! The manifest schema shared by the generator and the consumer.
//!
//! This is the only interchange format between the two halves of the crate
//! and is treated as stable:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "generatedAt": "2024-05-01T09:30:00.000Z",
//!   "categories": {
//!     "wedding": { "name": "Wedding Gown", "description": "Custom wedding gown" }
//!   },
//!   "images": [
//!     {
//!       "id": "wedding-1",
//!       "category": "wedding",
//!       "path": "images/gallery/wedding/gown-01.jpg",
//!       "title": "Wedding Gown 01",
//!       "description": "Custom wedding gown",
//!       "available": true
//!     }
//!   ]
//! }
//! ```
//!
//! Field order is part of the contract: `categories` keeps configuration
//! order and record fields serialize in declaration order.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ManifestError {
    #[error("image '{id}' references unknown category '{category}'")]
    UnknownCategory { id: String, category: String },
    #[error("duplicate image id '{0}'")]
    DuplicateId(String),
}

/// Complete manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: String,
    #[serde(with = "iso_millis")]
    pub generated_at: DateTime<Utc>,
    pub categories: IndexMap<String, Category>,
    pub images: Vec<ImageRecord>,
}

/// Display metadata for a category key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
}

/// One gallery image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// `{category}-{n}` when generated, `{category}-{millis}` when added locally.
    pub id: String,
    pub category: String,
    /// Relative to the site root.
    pub path: String,
    pub title: String,
    pub description: String,
    pub available: bool,
}

impl Manifest {
    /// Check referential integrity and id uniqueness.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut ids = HashSet::with_capacity(self.images.len());
        for image in &self.images {
            if !self.categories.contains_key(&image.category) {
                return Err(ManifestError::UnknownCategory {
                    id: image.id.clone(),
                    category: image.category.clone(),
                });
            }
            if !ids.insert(image.id.as_str()) {
                return Err(ManifestError::DuplicateId(image.id.clone()));
            }
        }
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&ImageRecord> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Display name for a category key, falling back to the key itself.
    pub fn category_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.categories
            .get(key)
            .map(|c| c.name.as_str())
            .unwrap_or(key)
    }

    /// Number of images filed under `key`.
    pub fn count_in(&self, key: &str) -> usize {
        self.images.iter().filter(|i| i.category == key).count()
    }
}

/// `generatedAt` as ISO-8601 UTC with millisecond precision (`...T09:30:00.000Z`).
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

//! In-memory gallery state for the admin preview.
//!
//! A [`Gallery`] owns a private copy of a loaded manifest plus the view state
//! the page needs (active filter, last notice). Add, edit and delete change
//! only that copy. Nothing is written back to `manifest.json` or the image
//! folders; the generator stays the single source of truth. Every success
//! notice says so.
//!
//! Each operation either applies fully or leaves the gallery untouched.
//!
//! ```text
//! load ──► Gallery ──set_filter──► visible()
//!             │
//!             ├─ add(draft, file)      new id {category}-{millis}, placeholder path
//!             ├─ edit(id, draft)       keeps id and path
//!             └─ delete(id, confirm)   confirm sees the record first
//! ```

use crate::config::DEFAULT_GALLERY_DIR;
use crate::manifest::{ImageRecord, Manifest};
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Please select an image file")]
    NoFileSelected,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("No image with id '{0}'")]
    UnknownImage(String),
}

/// Appended to every success notice.
pub const NOT_SAVED_NOTE: &str =
    "Changes are local to this preview and are not saved to manifest.json. \
     Re-run the generator to publish gallery changes.";

/// Category filter for the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// `"all"` selects everything; any other value is a category key.
    pub fn parse(value: &str) -> Self {
        match value {
            "all" | "" => Filter::All,
            key => Filter::Category(key.to_string()),
        }
    }

    pub fn matches(&self, image: &ImageRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(key) => image.category == *key,
        }
    }

    /// Form value for the filter `<select>`.
    pub fn value(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(key) => key.as_str(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// User-editable fields of an image, as submitted by the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDraft {
    pub category: String,
    pub title: String,
    pub description: String,
    pub available: bool,
}

/// A locally chosen file. Only its presence matters; nothing is uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown to the user after an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: format!("{text} {NOT_SAVED_NOTE}"),
        }
    }

    fn error(err: &EditError) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: err.to_string(),
        }
    }
}

/// Counters for the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStats {
    pub total_images: usize,
    pub total_categories: usize,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    manifest: Manifest,
    filter: Filter,
    path_prefix: String,
    notice: Option<Notice>,
}

impl Gallery {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            filter: Filter::All,
            path_prefix: DEFAULT_GALLERY_DIR.to_string(),
            notice: None,
        }
    }

    /// Prefix used for placeholder paths of locally added images.
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Records matching the active filter, in manifest order.
    pub fn visible(&self) -> Vec<&ImageRecord> {
        self.manifest
            .images
            .iter()
            .filter(|i| self.filter.matches(i))
            .collect()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn stats(&self) -> GalleryStats {
        GalleryStats {
            total_images: self.manifest.images.len(),
            total_categories: self.manifest.categories.len(),
        }
    }

    /// `(key, display name)` pairs in mapping order.
    pub fn category_options(&self) -> Vec<(&str, &str)> {
        self.manifest
            .categories
            .iter()
            .map(|(key, c)| (key.as_str(), c.name.as_str()))
            .collect()
    }

    /// Append a new record stamped with the current time.
    pub fn add(
        &mut self,
        draft: ImageDraft,
        file: Option<&SelectedFile>,
    ) -> Result<&ImageRecord, EditError> {
        self.add_at(draft, file, Utc::now())
    }

    /// [`Gallery::add`] with an explicit clock.
    ///
    /// The id is `{category}-{millis}`. If that id is already taken the
    /// timestamp is advanced one millisecond at a time until it is free.
    pub fn add_at(
        &mut self,
        draft: ImageDraft,
        file: Option<&SelectedFile>,
        now: DateTime<Utc>,
    ) -> Result<&ImageRecord, EditError> {
        let Some(file) = file else {
            return Err(self.reject(EditError::NoFileSelected));
        };
        self.check_category(&draft.category)?;

        let mut stamp = now.timestamp_millis();
        while self.manifest.find(&format!("{}-{stamp}", draft.category)).is_some() {
            stamp += 1;
        }

        let path = format!(
            "{}/{}/new-{stamp}.jpg",
            self.path_prefix.trim_end_matches('/'),
            draft.category
        );
        tracing::debug!(file = %file.name, %path, "adding image to preview");
        let index = self.manifest.images.len();
        self.manifest.images.push(ImageRecord {
            id: format!("{}-{stamp}", draft.category),
            category: draft.category,
            path,
            title: draft.title,
            description: draft.description,
            available: draft.available,
        });
        self.notice = Some(Notice::success("Image added."));
        Ok(&self.manifest.images[index])
    }

    /// Replace the editable fields of `id`, keeping its id and path.
    pub fn edit(&mut self, id: &str, draft: ImageDraft) -> Result<&ImageRecord, EditError> {
        let Some(index) = self.position(id) else {
            return Err(self.reject(EditError::UnknownImage(id.to_string())));
        };
        self.check_category(&draft.category)?;

        let record = &mut self.manifest.images[index];
        record.category = draft.category;
        record.title = draft.title;
        record.description = draft.description;
        record.available = draft.available;

        self.notice = Some(Notice::success("Image updated."));
        Ok(&self.manifest.images[index])
    }

    /// Remove `id` if `confirm` approves it.
    ///
    /// Returns the removed record, or `None` if the user declined.
    pub fn delete<F>(&mut self, id: &str, confirm: F) -> Result<Option<ImageRecord>, EditError>
    where
        F: FnOnce(&ImageRecord) -> bool,
    {
        let Some(index) = self.position(id) else {
            return Err(self.reject(EditError::UnknownImage(id.to_string())));
        };
        if !confirm(&self.manifest.images[index]) {
            return Ok(None);
        }

        let removed = self.manifest.images.remove(index);
        self.notice = Some(Notice::success(&format!("Deleted \"{}\".", removed.title)));
        Ok(Some(removed))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.manifest.images.iter().position(|i| i.id == id)
    }

    fn check_category(&mut self, key: &str) -> Result<(), EditError> {
        if self.manifest.categories.contains_key(key) {
            Ok(())
        } else {
            Err(self.reject(EditError::UnknownCategory(key.to_string())))
        }
    }

    /// Record a validation failure as the current notice and hand it back.
    fn reject(&mut self, err: EditError) -> EditError {
        self.notice = Some(Notice::error(&err));
        err
    }
}

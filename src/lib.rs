//! # Gallery Manifest
//!
//! Builds and previews the gallery manifest of a small business website.
//! The filesystem is the data source: one folder per category, image files
//! inside. Everything the site knows about its gallery comes from a single
//! `manifest.json` produced from that tree.
//!
//! # Architecture: Two Halves, One Contract
//!
//! ```text
//! 1. Generate  images/gallery/<key>/*  →  manifest.json   (filesystem → JSON)
//! 2. Consume   manifest.json           →  Gallery          (JSON → view state → HTML)
//! ```
//!
//! Data flows one way. The consumer may add, edit and delete records for
//! preview purposes, but only in memory: nothing it does is written back to
//! the manifest or the image folders. To publish a change, change the folders
//! and re-run the generator.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `gallery.toml` loading and validation; the stock category set |
//! | [`manifest`] | The JSON schema shared by both halves, plus its invariants |
//! | [`naming`] | Image extension allow-list and title derivation from filenames |
//! | [`scan`] | Generator: walks category folders, produces and writes the manifest |
//! | [`load`] | Consumer: fetches, parses and validates a manifest |
//! | [`gallery`] | Consumer: in-memory state with filter, add, edit and delete |
//! | [`render`] | Consumer: admin preview HTML using Maud |
//! | [`rename`] | Batch renamer that normalizes filenames in a folder |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Categories Are Configured, Not Discovered
//!
//! The category list is a value passed into [`scan::scan`], in display order,
//! with a display name and description per key. A stray folder in the image
//! tree does not silently become a new category, and a configured category
//! whose folder is missing is a warning rather than a failed build.
//!
//! ## Deterministic Output
//!
//! Ids are `{category}-{n}` with `n` the position in sorted filename order.
//! The same tree always yields the same `images` list, so a manifest diff in
//! version control shows real content changes only.
//!
//! ## Explicit Consumer State
//!
//! The preview's filter, edit target and notices live in a [`gallery::Gallery`]
//! value, not in globals, so every operation is testable without a browser.

pub mod config;
pub mod gallery;
pub mod load;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod render;
pub mod rename;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;

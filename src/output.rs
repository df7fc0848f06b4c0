//! CLI output formatting.
//!
//! Each command has a `format_*` function that returns `Vec<String>` and a
//! `print_*` wrapper that writes the lines to stdout. Format functions are
//! pure, so the exact console text is unit-tested without capturing stdout.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Generating gallery manifest...
//!
//! Scanning wedding...
//!     Found 3 images
//! Scanning kids...
//!     Warning: category folder not found
//!
//! Manifest generated
//!     Total images: 3
//!     Saved to: manifest.json
//! ```
//!
//! ## Check
//!
//! ```text
//! Manifest 1.0.0 (generated 2024-05-01T09:30:00.000Z)
//! 001 Wedding Gown [wedding] (2 images)
//! 002 Kids Birthday Frock [kids] (0 images)
//! Total images: 2
//! manifest.json is valid
//! ```

use crate::manifest::Manifest;
use crate::rename::Rename;
use crate::scan::ScanReport;
use chrono::SecondsFormat;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Progress report for a generator run.
pub fn format_scan_output(report: &ScanReport, output_path: &Path) -> Vec<String> {
    let mut lines = vec!["Generating gallery manifest...".to_string(), String::new()];

    for category in &report.categories {
        lines.push(format!("Scanning {}...", category.key));
        if category.missing {
            lines.push("    Warning: category folder not found".to_string());
        } else {
            lines.push(format!("    Found {}", plural(category.found, "image", "images")));
        }
        if !category.skipped.is_empty() {
            lines.push(format!(
                "    Skipped {}: {}",
                plural(category.skipped.len(), "file", "files"),
                category.skipped.join(", ")
            ));
        }
    }

    lines.push(String::new());
    lines.push("Manifest generated".to_string());
    lines.push(format!(
        "    Total images: {}",
        report.manifest.images.len()
    ));
    lines.push(format!("    Saved to: {}", output_path.display()));
    lines
}

pub fn print_scan_output(report: &ScanReport, output_path: &Path) {
    for line in format_scan_output(report, output_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Per-category inventory of a loaded manifest.
pub fn format_check_output(manifest: &Manifest, manifest_path: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Manifest {} (generated {})",
        manifest.version,
        manifest
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    )];

    for (i, (key, category)) in manifest.categories.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}] ({})",
            format_index(i + 1),
            category.name,
            key,
            plural(manifest.count_in(key), "image", "images")
        ));
    }
    lines.push(format!("Total images: {}", manifest.images.len()));
    lines.push(format!("{} is valid", manifest_path.display()));
    lines
}

pub fn print_check_output(manifest: &Manifest, manifest_path: &Path) {
    for line in format_check_output(manifest, manifest_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Rename
// ============================================================================

pub fn format_rename_output(plan: &[Rename], dry_run: bool) -> Vec<String> {
    if plan.is_empty() {
        return vec!["Nothing to rename.".to_string()];
    }
    let verb = if dry_run { "Would rename" } else { "Renamed" };
    let mut lines: Vec<String> = plan
        .iter()
        .map(|r| format!("{verb}: {} → {}", r.from, r.to))
        .collect();
    if !dry_run {
        lines.push(format!("Done: {}", plural(plan.len(), "file", "files")));
    }
    lines
}

pub fn print_rename_output(plan: &[Rename], dry_run: bool) {
    for line in format_rename_output(plan, dry_run) {
        println!("{}", line);
    }
}

//! Filename conventions for gallery images.
//!
//! Two rules live here so the scanner and the tests agree on them:
//!
//! - **Which files are images**: extension in [`IMAGE_EXTENSIONS`],
//!   compared case-insensitively (`c.JPG` counts, `a.txt` and `b.bmp` do not).
//! - **How titles are built**: the category display name followed by the
//!   first run of digits in the file stem, e.g. `gown-07.jpg` in
//!   "Wedding Gown" → `"Wedding Gown 07"`. Stems without digits get the bare
//!   display name.

use std::path::Path;

/// Allow-listed image extensions, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Whether `filename` carries an allow-listed image extension.
pub fn is_image_filename(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// First run of ASCII digits in `stem`, leading zeros kept.
pub fn first_number(stem: &str) -> Option<&str> {
    let start = stem.find(|c: char| c.is_ascii_digit())?;
    let rest = &stem[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Build the display title for an image file of a category.
pub fn image_title(filename: &str, category_name: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let number = first_number(&stem).unwrap_or("");
    format!("{category_name} {number}").trim().to_string()
}

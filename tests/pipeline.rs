//! End-to-end: image folders → manifest.json → preview state → HTML.
//!
//! Exercises the library the way the two halves meet in production: the
//! generator writes a real file, the consumer loads it back from disk.

use gallery_manifest::config::{CategoryConfig, GalleryConfig};
use gallery_manifest::gallery::{EditError, Filter, ImageDraft, SelectedFile};
use gallery_manifest::load::{FileSource, LoadState, load_manifest};
use gallery_manifest::render::{LOAD_ERROR_TEXT, render_admin_page};
use gallery_manifest::scan::{scan, write_manifest};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config() -> GalleryConfig {
    GalleryConfig {
        categories: vec![
            CategoryConfig::new("wedding", "Wedding Gown", "Custom wedding gown"),
            CategoryConfig::new("lehenga", "Partywear Lehenga", "Elegant partywear lehenga"),
            CategoryConfig::new("new-arrivals", "New Arrivals", "Latest collection"),
        ],
        ..GalleryConfig::default()
    }
}

fn build_tree(root: &Path) {
    let wedding = root.join("wedding");
    fs::create_dir_all(&wedding).unwrap();
    for name in ["gown-02.jpg", "gown-01.JPEG", "README.txt"] {
        fs::write(wedding.join(name), "x").unwrap();
    }
    let arrivals = root.join("new-arrivals");
    fs::create_dir_all(&arrivals).unwrap();
    fs::write(arrivals.join("new-01.webp"), "x").unwrap();
    // lehenga folder intentionally missing
}

fn generate(tmp: &TempDir) -> std::path::PathBuf {
    let source = tmp.path().join("images/gallery");
    build_tree(&source);
    let out = tmp.path().join("manifest.json");
    let report = scan(&source, &config()).unwrap();
    write_manifest(&out, &report.manifest).unwrap();
    out
}

#[test]
fn generated_manifest_matches_schema() {
    let tmp = TempDir::new().unwrap();
    let out = generate(&tmp);

    let raw = fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], "1.0.0");
    assert!(json["generatedAt"].as_str().unwrap().ends_with('Z'));

    // Category mapping keeps configuration order in the written file
    let wedding = raw.find("\"wedding\": {").unwrap();
    let lehenga = raw.find("\"lehenga\": {").unwrap();
    let arrivals = raw.find("\"new-arrivals\": {").unwrap();
    assert!(wedding < lehenga && lehenga < arrivals);

    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 3);
    assert_eq!(images[0]["id"], "wedding-1");
    assert_eq!(images[0]["path"], "images/gallery/wedding/gown-01.JPEG");
    assert_eq!(images[0]["title"], "Wedding Gown 01");
    assert_eq!(images[1]["id"], "wedding-2");
    assert_eq!(images[2]["id"], "new-arrivals-1");
    assert_eq!(images[2]["title"], "New Arrivals 01");
    assert_eq!(images[2]["description"], "Latest collection");
    assert_eq!(images[2]["available"], true);
}

#[test]
fn regenerating_replaces_file_with_identical_images() {
    let tmp = TempDir::new().unwrap();
    let out = generate(&tmp);
    let first = load_manifest(&FileSource::new(&out)).unwrap();

    let report = scan(&tmp.path().join("images/gallery"), &config()).unwrap();
    write_manifest(&out, &report.manifest).unwrap();
    let second = load_manifest(&FileSource::new(&out)).unwrap();

    assert_eq!(first.images, second.images);
    assert_eq!(first.categories, second.categories);
}

#[test]
fn preview_edits_never_touch_the_file() {
    let tmp = TempDir::new().unwrap();
    let out = generate(&tmp);
    let on_disk = fs::read_to_string(&out).unwrap();

    let mut state = LoadState::from_source(&FileSource::new(&out));
    let gallery = state.gallery_mut().unwrap();

    let draft = ImageDraft {
        category: "lehenga".to_string(),
        title: "Sample".to_string(),
        description: "Preview".to_string(),
        available: false,
    };
    assert_eq!(
        gallery.add(draft.clone(), None).unwrap_err(),
        EditError::NoFileSelected
    );
    let new_id = gallery
        .add(draft.clone(), Some(&SelectedFile::new("photo.jpg")))
        .unwrap()
        .id
        .clone();
    gallery.edit("wedding-2", draft).unwrap();
    gallery.delete("wedding-1", |_| true).unwrap();

    assert_eq!(gallery.manifest().images.len(), 3);
    assert!(new_id.starts_with("lehenga-"));

    gallery.set_filter(Filter::parse("lehenga"));
    let html = render_admin_page(&state).into_string();
    assert_eq!(html.matches(r#"class="admin-gallery-item""#).count(), 2);
    assert!(html.contains("not saved"));

    assert_eq!(fs::read_to_string(&out).unwrap(), on_disk);
}

#[test]
fn missing_manifest_renders_error_state() {
    let tmp = TempDir::new().unwrap();
    let state = LoadState::from_source(&FileSource::new(tmp.path().join("manifest.json")));
    let html = render_admin_page(&state).into_string();

    assert!(html.contains(LOAD_ERROR_TEXT));
    assert_eq!(html.matches(r#"class="admin-gallery-item""#).count(), 0);
}

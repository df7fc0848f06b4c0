//! HTML rendering of the admin preview.
//!
//! Turns a [`LoadState`] into a self-contained page: stats, a category
//! filter, one card per visible image with edit/delete affordances, and a
//! standing notice that edits are preview-only. A failed load renders the
//! error state and no cards at all.
//!
//! ## Page Structure
//!
//! ```text
//! header.admin-header        title + stats
//! div.admin-notice           "not saved" reminder (always present)
//! div.admin-message          last operation notice (if any)
//! form.admin-toolbar         category filter <select>
//! div.admin-gallery-grid     cards | empty message | error state
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) like the rest of the site: markup is
//! checked at compile time and every interpolated value is escaped.

use crate::gallery::{Gallery, NoticeKind};
use crate::load::LoadState;
use crate::manifest::ImageRecord;
use maud::{DOCTYPE, Markup, html};

const CSS: &str = include_str!("../static/admin.css");

pub const LOAD_ERROR_TEXT: &str = "Error loading gallery. Please refresh the page.";
pub const EMPTY_TEXT: &str = "No images found in this category.";
pub const PREVIEW_NOTICE_TEXT: &str = "Preview only: adding, editing or deleting images here \
     changes this page alone. Nothing is saved to manifest.json or the image folders.";

/// Render the full admin preview document.
pub fn render_admin_page(state: &LoadState) -> Markup {
    let content = match state {
        LoadState::Loaded(gallery) => html! {
            (admin_header(Some(gallery)))
            (preview_notice())
            (message(gallery))
            (toolbar(gallery))
            (gallery_grid(gallery))
        },
        LoadState::Failed(err) => html! {
            (admin_header(None))
            (preview_notice())
            div.admin-gallery-grid {
                div.loading-message.error title=(err.to_string()) { (LOAD_ERROR_TEXT) }
            }
        },
    };
    base_document("Gallery Admin", content)
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body.admin {
                main.admin-panel {
                    (content)
                }
            }
        }
    }
}

fn admin_header(gallery: Option<&Gallery>) -> Markup {
    html! {
        header.admin-header {
            h1 { "Gallery Manager" }
            @if let Some(gallery) = gallery {
                @let stats = gallery.stats();
                dl.admin-stats {
                    dt { "Total images" }
                    dd #totalImages { (stats.total_images) }
                    dt { "Categories" }
                    dd #totalCategories { (stats.total_categories) }
                }
            }
        }
    }
}

fn preview_notice() -> Markup {
    html! {
        div.admin-notice role="note" { (PREVIEW_NOTICE_TEXT) }
    }
}

fn message(gallery: &Gallery) -> Markup {
    let Some(notice) = gallery.notice() else {
        return html! {};
    };
    let kind = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };
    html! {
        div class={ "admin-message " (kind) } role="status" { (notice.text) }
    }
}

/// Filter dropdown; "All Categories" first, then the mapping in order.
fn toolbar(gallery: &Gallery) -> Markup {
    let current = gallery.filter().value();
    html! {
        form.admin-toolbar method="get" {
            label for="categoryFilter" { "Category" }
            select #categoryFilter name="filter" {
                option value="all" selected[current == "all"] { "All Categories" }
                @for (key, name) in gallery.category_options() {
                    option value=(key) selected[current == key] { (name) }
                }
            }
            button.admin-btn-add type="button" { "Add Image" }
        }
    }
}

fn gallery_grid(gallery: &Gallery) -> Markup {
    let visible = gallery.visible();
    html! {
        div.admin-gallery-grid {
            @if visible.is_empty() {
                div.loading-message { (EMPTY_TEXT) }
            } @else {
                @for image in visible {
                    (gallery_card(image, gallery.manifest().category_name(&image.category)))
                }
            }
        }
    }
}

/// One card: image, category badge, title, description, actions.
pub fn gallery_card(image: &ImageRecord, category_name: &str) -> Markup {
    html! {
        div.admin-gallery-item data-image-id=(image.id) {
            div.admin-gallery-image {
                img src=(image.path) alt=(image.title) loading="lazy";
                span.admin-gallery-category { (category_name) }
                @if !image.available {
                    span.admin-gallery-unavailable { "Unavailable" }
                }
            }
            div.admin-gallery-info {
                h3 { (image.title) }
                p { (image.description) }
                div.admin-gallery-actions {
                    button.admin-btn-edit type="button" data-id=(image.id) { "Edit" }
                    button.admin-btn-delete type="button" data-id=(image.id) { "Delete" }
                }
            }
        }
    }
}

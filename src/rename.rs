//! Batch renaming of a category folder.
//!
//! Gives every file in a folder a uniform `<prefix>-NN<ext>` name, numbered
//! from 01 in the current filename order. This is the tidy-up step before a
//! generator run, so the scan's sort order and the title numbers line up:
//!
//! ```text
//! IMG_2231.jpg   →  new-01.jpg
//! IMG_2240.JPG   →  new-02.JPG
//! scan 3.png     →  new-03.png
//! ```
//!
//! Renames happen in two phases (sources to temporary names, then temporary
//! names to targets), so a plan whose targets overlap its sources cannot
//! overwrite a file halfway through.

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid prefix '{0}': must be non-empty and contain no path separators")]
    InvalidPrefix(String),
    #[error("Target '{0}' already exists and is not part of this rename")]
    Collision(String),
    #[error("Rename failed ({source}) and could not restore: {}", .files.join(", "))]
    Stranded {
        files: Vec<String>,
        #[source]
        source: std::io::Error,
    },
}

/// One planned rename inside the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

const STAGING_MARKER: &str = ".gallery-rename-";

/// Work out the new names for the regular, non-hidden files of `dir`.
///
/// Files that already carry their target name are left out of the plan.
pub fn plan_renames(dir: &Path, prefix: &str) -> Result<Vec<Rename>, RenameError> {
    if prefix.is_empty() || prefix.contains('/') || prefix.contains('\\') {
        return Err(RenameError::InvalidPrefix(prefix.to_string()));
    }

    let mut files: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.file_type()?.is_file() {
            continue;
        }
        files.push(name);
    }
    files.sort();

    let width = files.len().to_string().len().max(2);
    let plan = files
        .into_iter()
        .enumerate()
        .map(|(idx, from)| {
            let ext = Path::new(&from)
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();
            let to = format!("{prefix}-{:0width$}{ext}", idx + 1);
            Rename { from, to }
        })
        .filter(|r| r.from != r.to)
        .collect();
    Ok(plan)
}

/// Execute `plan` inside `dir`.
///
/// Refuses to start if any target exists and is not itself being renamed.
pub fn apply_renames(dir: &Path, plan: &[Rename]) -> Result<(), RenameError> {
    for rename in plan {
        let target = dir.join(&rename.to);
        let is_source = plan.iter().any(|r| r.from == rename.to);
        if target.exists() && !is_source {
            return Err(RenameError::Collision(rename.to.clone()));
        }
    }

    let staged: Vec<String> = (0..plan.len())
        .map(|i| format!("{STAGING_MARKER}{}-{i}", std::process::id()))
        .collect();

    let moves = plan
        .iter()
        .zip(&staged)
        .map(|(r, tmp)| (r.from.as_str(), tmp.as_str()))
        .chain(
            plan.iter()
                .zip(&staged)
                .map(|(r, tmp)| (tmp.as_str(), r.to.as_str())),
        );

    let mut done: Vec<(&str, &str)> = Vec::with_capacity(plan.len() * 2);
    for (from, to) in moves {
        if let Err(err) = fs::rename(dir.join(from), dir.join(to)) {
            return Err(roll_back(dir, &done, err));
        }
        done.push((from, to));
    }
    for rename in plan {
        tracing::debug!(from = %rename.from, to = %rename.to, "renamed");
    }
    Ok(())
}

/// Undo `done` newest first after `cause` stopped the run.
fn roll_back(dir: &Path, done: &[(&str, &str)], cause: std::io::Error) -> RenameError {
    let mut stranded = Vec::new();
    for &(from, to) in done.iter().rev() {
        if let Err(err) = fs::rename(dir.join(to), dir.join(from)) {
            tracing::warn!(file = to, error = %err, "could not restore");
            stranded.push(to.to_string());
        }
    }
    if stranded.is_empty() {
        RenameError::Io(cause)
    } else {
        RenameError::Stranded {
            files: stranded,
            source: cause,
        }
    }
}

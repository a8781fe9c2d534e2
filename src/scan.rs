//! Filesystem scanning: builds the manifest from an assets tree.
//!
//! The scanner walks the assets root exactly two levels deep. Immediate
//! subdirectories of the root are characters; immediate subdirectories of a
//! character are categories; files inside a category with a recognized image
//! extension become that category's (sorted) file list.
//!
//! ## Directory Structure
//!
//! ```text
//! assets/                          # Assets root
//! ├── female/                      # Character
//! │   ├── base/                    # Category
//! │   │   ├── base_01.png
//! │   │   └── base_02.png
//! │   ├── eyes/
//! │   │   └── eyes_blue.webp
//! │   └── readme.txt               # Stray file — ignored
//! ├── male-mature/
//! │   └── hair_front/
//! │       ├── hair_a.jpg
//! │       └── hair_b.jpg
//! └── notes.md                     # Stray file — ignored
//! ```
//!
//! ## Rules
//!
//! - Character and category names are directory names taken verbatim: no
//!   normalization, no case folding, hidden directories included.
//! - Non-directory entries at the character or category level are skipped
//!   silently.
//! - Extension matching is a case-insensitive ends-with test on the filename,
//!   so `IMAGE.PNG` qualifies and so does a file named exactly `.png`.
//! - Per-category file lists are sorted by ordinal string comparison
//!   (uppercase sorts before lowercase). Directory listing order is never
//!   relied on.
//! - An existing character or category directory always appears in the
//!   manifest, even when it holds no qualifying files.
//!
//! Any I/O failure during traversal aborts the scan with the offending path.
//! A manifest is either complete or not produced at all.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("assets root not found: {0}")]
    RootNotFound(PathBuf),
    #[error("assets root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-character mapping: category name → sorted image filenames.
pub type CharacterEntry = BTreeMap<String, Vec<String>>;

/// The complete asset index: character name → [`CharacterEntry`].
///
/// Serializes transparently as an object of objects of arrays:
///
/// ```json
/// {
///   "female": {
///     "base": ["base_01.png", "base_02.png"],
///     "eyes": ["eyes_blue.webp"]
///   }
/// }
/// ```
///
/// `BTreeMap` keeps character and category keys sorted, so output is
/// deterministic across runs and re-runs on an unchanged tree are
/// byte-identical.
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Manifest {
    pub characters: BTreeMap<String, CharacterEntry>,
}

impl Manifest {
    /// Number of category entries across all characters.
    pub fn category_count(&self) -> usize {
        self.characters.values().map(|c| c.len()).sum()
    }

    /// Number of indexed files across all categories.
    pub fn file_count(&self) -> usize {
        self.characters
            .values()
            .flat_map(|c| c.values())
            .map(|files| files.len())
            .sum()
    }
}

/// Scan the assets root into a [`Manifest`].
///
/// `extensions` are dotless lowercase suffixes (e.g. `["png", "webp"]`), as
/// produced by [`crate::config::ManifestConfig::validate`].
///
/// Fails fast on a missing or unreadable root and on any directory that
/// cannot be listed mid-traversal.
pub fn scan(root: &Path, extensions: &[String]) -> Result<Manifest, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    // Precompute ".ext" suffixes once for the whole scan.
    let suffixes: Vec<String> = extensions.iter().map(|e| format!(".{e}")).collect();

    let mut characters = BTreeMap::new();
    for character_dir in list_dir(root)? {
        if !character_dir.is_dir() {
            continue;
        }
        let name = entry_name(&character_dir);
        characters.insert(name, scan_character(&character_dir, &suffixes)?);
    }

    Ok(Manifest { characters })
}

fn scan_character(character_dir: &Path, suffixes: &[String]) -> Result<CharacterEntry, ScanError> {
    let mut categories = CharacterEntry::new();
    for category_dir in list_dir(character_dir)? {
        if !category_dir.is_dir() {
            continue;
        }
        let name = entry_name(&category_dir);
        categories.insert(name, scan_category(&category_dir, suffixes)?);
    }
    Ok(categories)
}

fn scan_category(category_dir: &Path, suffixes: &[String]) -> Result<Vec<String>, ScanError> {
    let mut files: Vec<String> = list_dir(category_dir)?
        .iter()
        .filter(|p| p.is_file())
        .map(|p| entry_name(p))
        .filter(|name| is_image_name(name, suffixes))
        .collect();

    // Ordinal ascending — "B.PNG" sorts before "a.png".
    files.sort();
    Ok(files)
}

/// List a directory's entries, wrapping failures with the offending path.
fn list_dir(path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let wrap = |source| ScanError::ReadDir {
        path: path.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(wrap)? {
        entries.push(entry.map_err(wrap)?.path());
    }
    Ok(entries)
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Case-insensitive ends-with match against the precomputed ".ext" suffixes.
fn is_image_name(name: &str, suffixes: &[String]) -> bool {
    let lower = name.to_ascii_lowercase();
    suffixes.iter().any(|s| lower.ends_with(s.as_str()))
}

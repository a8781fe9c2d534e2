//! Shared test utilities for the sprite-manifest test suite.
//!
//! Provides fixture-tree builders, manifest constructors, and lookup helpers
//! that panic with a clear message (listing the available keys) on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = make_tree(&[
//!     ("female/base", &["base_01.png", "base_02.png"]),
//!     ("female/eyes", &["eyes_blue.webp"]),
//! ]);
//! let manifest = scan(tmp.path(), &default_extensions()).unwrap();
//!
//! assert_eq!(category_files(&manifest, "female", "base"),
//!            vec!["base_01.png", "base_02.png"]);
//! ```

use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

use crate::scan::{CharacterEntry, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Build a temp assets tree from `(relative_dir, filenames)` pairs.
///
/// Each directory is created with all parents; each filename is written with
/// placeholder bytes (the scanner only looks at names, never content).
pub fn make_tree(layout: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (dir, filenames) in layout {
        let dir_path = tmp.path().join(dir);
        fs::create_dir_all(&dir_path).unwrap();
        for name in *filenames {
            fs::write(dir_path.join(name), b"fake image").unwrap();
        }
    }
    tmp
}

/// Build a [`Manifest`] directly from `(character, [(category, files)])`
/// entries, bypassing the filesystem.
pub fn manifest_fixture(layout: &[(&str, &[(&str, &[&str])])]) -> Manifest {
    let mut characters = BTreeMap::new();
    for (character, categories) in layout {
        let mut entry = CharacterEntry::new();
        for (category, filenames) in *categories {
            entry.insert(
                category.to_string(),
                filenames.iter().map(|f| f.to_string()).collect(),
            );
        }
        characters.insert(character.to_string(), entry);
    }
    Manifest { characters }
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a character's entry by name. Panics if not found.
pub fn find_character<'a>(manifest: &'a Manifest, name: &str) -> &'a CharacterEntry {
    manifest.characters.get(name).unwrap_or_else(|| {
        let names: Vec<&str> = manifest.characters.keys().map(|k| k.as_str()).collect();
        panic!("character '{name}' not found. Available: {names:?}")
    })
}

/// Files of a category within a character. Panics if either is missing.
pub fn category_files(manifest: &Manifest, character: &str, category: &str) -> Vec<String> {
    let entry = find_character(manifest, character);
    entry.get(category).cloned().unwrap_or_else(|| {
        let names: Vec<&str> = entry.keys().map(|k| k.as_str()).collect();
        panic!("category '{category}' not found in character '{character}'. Available: {names:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All character names in manifest (sorted) order.
pub fn character_names(manifest: &Manifest) -> Vec<&str> {
    manifest.characters.keys().map(|k| k.as_str()).collect()
}

/// Assert that the full manifest matches an expected shape.
///
/// Each entry is `(character, [(category, files)])`.
pub fn assert_manifest_shape(manifest: &Manifest, expected: &[(&str, &[(&str, &[&str])])]) {
    assert_eq!(
        manifest, &manifest_fixture(expected),
        "manifest shape mismatch"
    );
}

//! Manifest serialization and output file writing.
//!
//! Serializes a [`Manifest`] as pretty-printed JSON — two-space indentation,
//! UTF-8, non-ASCII characters emitted literally — with a trailing newline,
//! and writes it to the destination path, overwriting any existing file.
//!
//! The write is a plain `fs::write`; an interrupt mid-write can leave a torn
//! file, which the next run fully overwrites.

use crate::scan::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write manifest to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render the manifest as the exact bytes written to disk.
pub fn manifest_json(manifest: &Manifest) -> Result<String, WriteError> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    Ok(json)
}

/// Write the manifest to `output_path`, overwriting any existing file.
pub fn write_manifest(manifest: &Manifest, output_path: &Path) -> Result<(), WriteError> {
    let json = manifest_json(manifest)?;
    fs::write(output_path, json).map_err(|source| WriteError::Io {
        path: output_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn written_file_parses_back_to_same_structure() {
        let manifest = manifest_fixture(&[
            ("female", &[("base", &["base_01.png", "base_02.png"])]),
            ("male", &[("hair_front", &["hair_a.jpg"])]),
        ]);

        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("assets_manifest.json");
        write_manifest(&manifest, &out).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::to_value(&manifest).unwrap());
    }

    #[test]
    fn output_uses_two_space_indentation() {
        let manifest = manifest_fixture(&[("female", &[("base", &["a.png"])])]);
        let json = manifest_json(&manifest).unwrap();

        assert!(json.contains("  \"female\": {"));
        assert!(json.contains("    \"base\": ["));
        assert!(json.contains("      \"a.png\""));
    }

    #[test]
    fn output_ends_with_newline() {
        let manifest = manifest_fixture(&[("female", &[("base", &["a.png"])])]);
        let json = manifest_json(&manifest).unwrap();

        assert!(json.ends_with("]\n") || json.ends_with("}\n"));
        assert!(!json.ends_with("\n\n"));
    }

    #[test]
    fn non_ascii_emitted_literally() {
        let manifest = manifest_fixture(&[("chère", &[("café", &["bébé.png"])])]);
        let json = manifest_json(&manifest).unwrap();

        assert!(json.contains("chère"));
        assert!(json.contains("café"));
        assert!(json.contains("bébé.png"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn empty_manifest_serializes_as_empty_object() {
        let json = manifest_json(&Manifest::default()).unwrap();
        assert_eq!(json, "{}\n");
    }

    #[test]
    fn existing_file_is_overwritten() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("assets_manifest.json");
        std::fs::write(&out, "stale content").unwrap();

        let manifest = manifest_fixture(&[("female", &[("base", &["a.png"])])]);
        write_manifest(&manifest, &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("a.png"));
    }

    #[test]
    fn unwritable_destination_is_error_with_path() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("no-such-dir").join("assets_manifest.json");

        let manifest = manifest_fixture(&[("female", &[("base", &["a.png"])])]);
        let result = write_manifest(&manifest, &out);

        match result {
            Err(WriteError::Io { path, .. }) => assert_eq!(path, out),
            other => panic!("expected WriteError::Io, got {other:?}"),
        }
    }

    #[test]
    fn rewrite_of_same_manifest_is_byte_identical() {
        let manifest = manifest_fixture(&[
            ("female", &[("base", &["B.PNG", "a.png"]), ("eyes", &[])]),
            ("male", &[]),
        ]);

        let first = manifest_json(&manifest).unwrap();
        let second = manifest_json(&manifest).unwrap();
        assert_eq!(first, second);
    }
}

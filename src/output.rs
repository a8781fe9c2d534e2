//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each character leads
//! with its positional index and name plus aggregate counts; its categories
//! follow as indented context lines. A totals footer summarizes the whole
//! scan.
//!
//! ```text
//! Characters
//! 001 female (3 categories, 11 files)
//!     base (4 files)
//!     eyes (6 files)
//!     hair_front (1 file)
//! 002 male (1 category, 2 files)
//!     hair_front (2 files)
//!
//! Total: 2 characters, 4 categories, 13 files
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Pluralize a count: `1 file`, `2 files`, `3 categories`.
fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn files(count: usize) -> String {
    count_noun(count, "file", "files")
}

fn categories(count: usize) -> String {
    count_noun(count, "category", "categories")
}

/// Format the scanned inventory, one character per header line with its
/// categories as indented context.
pub fn format_inventory(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Characters".to_string());
    if manifest.characters.is_empty() {
        lines.push("    (none found)".to_string());
    }

    for (i, (name, entry)) in manifest.characters.iter().enumerate() {
        let file_count: usize = entry.values().map(|f| f.len()).sum();
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(i + 1),
            name,
            categories(entry.len()),
            files(file_count),
        ));
        for (category, filenames) in entry {
            lines.push(format!("    {} ({})", category, files(filenames.len())));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Total: {}, {}, {}",
        count_noun(manifest.characters.len(), "character", "characters"),
        categories(manifest.category_count()),
        files(manifest.file_count()),
    ));

    lines
}

/// Print the scan inventory to stdout.
pub fn print_inventory(manifest: &Manifest) {
    for line in format_inventory(manifest) {
        println!("{}", line);
    }
}

/// Format the final confirmation line naming the written manifest.
pub fn format_written_line(output_path: &Path) -> String {
    format!("==> Manifest written: {}", output_path.display())
}

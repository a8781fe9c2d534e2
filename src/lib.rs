//! # Sprite Manifest
//!
//! Asset manifest generator for layered character sprite trees. Your
//! filesystem is the data source: top-level directories are characters,
//! their subdirectories are layer categories, and the images inside become a
//! single JSON index that consumers (a dress-up renderer, an asset pipeline)
//! fetch instead of enumerating the filesystem themselves.
//!
//! # Pipeline
//!
//! One scan, one write:
//!
//! ```text
//! assets/  →  Manifest (in memory)  →  assets_manifest.json
//! ```
//!
//! The manifest maps character → category → sorted image filenames:
//!
//! ```json
//! {
//!   "female": {
//!     "base": ["base_01.png", "base_02.png"],
//!     "eyes": ["eyes_blue.webp"]
//!   },
//!   "male": {
//!     "hair_front": ["hair_a.jpg", "hair_b.jpg"]
//!   }
//! }
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the assets root two levels deep and builds the [`scan::Manifest`] |
//! | [`write`] | Serializes the manifest as pretty JSON and writes the output file |
//! | [`config`] | Optional `manifest.toml`: paths and the extension filter |
//! | [`output`] | CLI output formatting — information-first inventory of the scan |
//!
//! # Design Decisions
//!
//! ## Sorted, Deterministic Output
//!
//! Characters and categories live in `BTreeMap`s and per-category file lists
//! are explicitly sorted, so the JSON is fully deterministic: scanning an
//! unchanged tree twice produces byte-identical files. Consumers can diff
//! manifests, and CI can assert the checked-in index is current.
//!
//! ## All-or-Nothing Scans
//!
//! Any I/O failure during traversal (including a permission error on a
//! subdirectory) aborts the run with the offending path. A partially
//! indexed assets tree would silently drop layers from the consumer's UI,
//! which is strictly worse than a loud failure.
//!
//! ## Names Are Taken Verbatim
//!
//! Directory names become manifest keys exactly as the filesystem reports
//! them — no case folding, no slug normalization, hidden entries included.
//! The consumer references layers by these keys, so any rewriting here
//! would break lookups.
//!
//! ## Extension Filter, Not Content Sniffing
//!
//! A file counts as an image when its name ends with a configured extension
//! (case-insensitive). The tool never opens image files; corrupt assets are
//! the renderer's problem to surface, not the indexer's.

pub mod config;
pub mod output;
pub mod scan;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;

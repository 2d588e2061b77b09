// SPDX-License-Identifier: MPL-2.0
//! TOML gallery manifest parsing.
//!
//! A manifest names the gallery and its images in display order, plus an
//! optional before/after comparison pair:
//!
//! ```toml
//! title = "Riverside Wedding"
//!
//! [[image]]
//! source = "ceremony/arch.jpg"
//! caption = "The ceremony arch"
//!
//! [[image]]
//! source = "reception/tables.jpg"
//!
//! [comparison]
//! before = "venue/empty-hall.jpg"
//! after = "venue/decorated-hall.jpg"
//! ```
//!
//! Relative sources resolve against the manifest's directory. Image ids are
//! display keys only; when absent they fall back to the file stem.

use crate::error::{Error, Result};
use crate::gallery::{GallerySequence, ImageDescriptor};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed gallery manifest, before path resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub title: Option<String>,
    #[serde(default, rename = "image")]
    pub images: Vec<ImageEntry>,
    pub comparison: Option<ComparisonEntry>,
}

/// One `[[image]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    pub source: PathBuf,
    pub id: Option<String>,
    pub caption: Option<String>,
    pub alt_text: Option<String>,
}

/// The `[comparison]` table holding a before/after pair.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonEntry {
    pub before: PathBuf,
    pub after: PathBuf,
    pub before_caption: Option<String>,
    pub after_caption: Option<String>,
}

/// Default captions for the comparison pair, supplied by the caller so the
/// domain layer stays free of localization concerns.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonCaptions<'a> {
    pub before: &'a str,
    pub after: &'a str,
}

impl Default for ComparisonCaptions<'_> {
    fn default() -> Self {
        Self {
            before: "Before",
            after: "After",
        }
    }
}

/// Reads and parses a manifest file.
pub fn load(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))
}

impl Manifest {
    /// Resolves the manifest into a display-ordered sequence. The comparison
    /// pair, when present, is appended after the primary images.
    pub fn into_sequence(
        self,
        base_dir: &Path,
        captions: ComparisonCaptions<'_>,
    ) -> GallerySequence {
        let primary = self
            .images
            .into_iter()
            .map(|entry| entry.into_descriptor(base_dir))
            .collect();

        let comparison = self.comparison.map(|pair| {
            let before = ImageDescriptor::new("before", resolve(base_dir, &pair.before))
                .with_caption(pair.before_caption.unwrap_or_else(|| captions.before.to_string()));
            let after = ImageDescriptor::new("after", resolve(base_dir, &pair.after))
                .with_caption(pair.after_caption.unwrap_or_else(|| captions.after.to_string()));
            (before, after)
        });

        GallerySequence::from_parts(primary, comparison)
    }
}

impl ImageEntry {
    fn into_descriptor(self, base_dir: &Path) -> ImageDescriptor {
        let id = self.id.unwrap_or_else(|| file_stem(&self.source));
        let mut descriptor = ImageDescriptor::new(id, resolve(base_dir, &self.source));
        if let Some(caption) = self.caption {
            descriptor = descriptor.with_caption(caption);
        }
        if let Some(alt_text) = self.alt_text {
            descriptor = descriptor.with_alt_text(alt_text);
        }
        descriptor
    }
}

fn resolve(base_dir: &Path, source: &Path) -> PathBuf {
    if source.is_absolute() {
        source.to_path_buf()
    } else {
        base_dir.join(source)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

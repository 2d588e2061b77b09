// SPDX-License-Identifier: MPL-2.0
//! Gallery data model: image descriptors and the ordered viewing sequence.
//!
//! A `GallerySequence` is assembled once per viewing session, either from a
//! TOML manifest or by scanning a directory, and stays immutable while the
//! lightbox is open. Concatenation order is significant: an optional
//! before/after comparison pair is always appended after the primary set.

pub mod manifest;
pub mod scanner;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A single image in a gallery. Immutable once constructed; `id` is only
/// used for rendering-list stability, never for business logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub id: String,
    pub source: PathBuf,
    pub caption: Option<String>,
    pub alt_text: Option<String>,
}

impl ImageDescriptor {
    /// Creates a descriptor without caption or alt text.
    pub fn new(id: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            caption: None,
            alt_text: None,
        }
    }

    /// Sets the caption shown under the image in the lightbox.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the descriptive text used for thumbnail tooltips.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Text describing this image at the given zero-based position:
    /// alt text, then caption, then a positional fallback.
    pub fn label(&self, position: usize) -> String {
        self.alt_text
            .clone()
            .or_else(|| self.caption.clone())
            .unwrap_or_else(|| format!("Image {}", position + 1))
    }
}

/// The fixed, ordered list of images for one viewing session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GallerySequence {
    images: Vec<ImageDescriptor>,
}

impl GallerySequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from descriptors already in display order.
    pub fn from_images(images: Vec<ImageDescriptor>) -> Self {
        Self { images }
    }

    /// Builds a sequence from a primary set plus an optional comparison
    /// pair. The pair is appended after the primary images, before first,
    /// then after.
    pub fn from_parts(
        primary: Vec<ImageDescriptor>,
        comparison: Option<(ImageDescriptor, ImageDescriptor)>,
    ) -> Self {
        let mut images = primary;
        if let Some((before, after)) = comparison {
            images.push(before);
            images.push(after);
        }
        Self { images }
    }

    /// Number of images in the sequence.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks whether the sequence holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the descriptor at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    /// Iterates over the descriptors in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ImageDescriptor> {
        self.images.iter()
    }
}

impl<'a> IntoIterator for &'a GallerySequence {
    type Item = &'a ImageDescriptor;
    type IntoIter = std::slice::Iter<'a, ImageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Loads a gallery from a path supplied on the command line.
///
/// A `.toml` file is read as a gallery manifest; a directory is scanned for
/// supported images; any other file is treated as an image inside its parent
/// directory.
pub fn load(path: &Path, comparison_captions: manifest::ComparisonCaptions<'_>) -> Result<Loaded> {
    if path.is_dir() {
        let images = scanner::scan_directory(path)?;
        return Ok(Loaded {
            title: None,
            sequence: GallerySequence::from_images(images),
        });
    }

    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        let parsed = manifest::load(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        return Ok(Loaded {
            title: parsed.title.clone(),
            sequence: parsed.into_sequence(base_dir, comparison_captions),
        });
    }

    if path.is_file() {
        let parent = path
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;
        let images = scanner::scan_directory(parent)?;
        return Ok(Loaded {
            title: None,
            sequence: GallerySequence::from_images(images),
        });
    }

    Err(Error::Io(format!("No such file or directory: {}", path.display())))
}

/// Result of loading a gallery from disk.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// Gallery title from the manifest, if one was given.
    pub title: Option<String>,
    pub sequence: GallerySequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str) -> ImageDescriptor {
        ImageDescriptor::new(id, format!("/gallery/{id}.jpg"))
    }

    #[test]
    fn empty_sequence_has_no_images() {
        let seq = GallerySequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn from_images_preserves_supplied_order() {
        let seq = GallerySequence::from_images(vec![
            descriptor("c"),
            descriptor("a"),
            descriptor("b"),
        ]);
        let ids: Vec<&str> = seq.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn from_parts_appends_comparison_pair_last() {
        let seq = GallerySequence::from_parts(
            vec![descriptor("one"), descriptor("two")],
            Some((
                descriptor("before").with_caption("Before"),
                descriptor("after").with_caption("After"),
            )),
        );
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.get(2).unwrap().id, "before");
        assert_eq!(seq.get(3).unwrap().id, "after");
    }

    #[test]
    fn from_parts_without_comparison_keeps_primary_only() {
        let seq = GallerySequence::from_parts(vec![descriptor("one")], None);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn label_prefers_alt_text_then_caption() {
        let full = descriptor("a")
            .with_caption("Stage setup")
            .with_alt_text("Wide shot of the stage");
        assert_eq!(full.label(0), "Wide shot of the stage");

        let captioned = descriptor("b").with_caption("Stage setup");
        assert_eq!(captioned.label(0), "Stage setup");

        let bare = descriptor("c");
        assert_eq!(bare.label(4), "Image 5");
    }
}

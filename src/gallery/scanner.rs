// SPDX-License-Identifier: MPL-2.0
//! Directory scanner fallback for galleries without a manifest.
//!
//! Collects supported image files from a single directory, sorted by file
//! name, and synthesizes descriptors from them. Unsupported files are
//! ignored rather than reported.

use crate::error::Result;
use crate::gallery::ImageDescriptor;
use std::path::{Path, PathBuf};

/// Extensions recognized as displayable images.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff"];

/// Checks whether the path points at a supported image format.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Scans `directory` for supported images and returns descriptors sorted by
/// file name. The id of each descriptor is the file stem.
pub fn scan_directory(directory: &Path) -> Result<Vec<ImageDescriptor>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let id = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            ImageDescriptor::new(id, path)
        })
        .collect())
}

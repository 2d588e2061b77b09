// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags for the application.

use crate::lightbox::{self, swipe};

/// Values collected from the command line before the UI starts.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Gallery to open: a manifest, a directory, or an image file.
    pub path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A thumbnail on the host grid was pressed.
    ThumbnailPressed(usize),
    /// Lightbox chrome or keyboard navigation.
    Lightbox(lightbox::Message),
    /// Pointer activity routed to the swipe tracker.
    Swipe(swipe::Message),
}

// SPDX-License-Identifier: MPL-2.0
//! Navigation controller: the single owner of lightbox viewer state.
//!
//! All index mutation goes through `open`, `close`, `next`, `previous` and
//! `goto`. Navigation wraps around (the gallery reads as a cycle). Degenerate
//! input is a silent no-op: empty sequence, out-of-range index, or any
//! operation while closed.

use crate::gallery::{GallerySequence, ImageDescriptor};
use crate::lightbox::scroll::{ScrollGuard, ScrollLock};

/// Modal lightbox state. While open, `current` is always a valid index into
/// a non-empty sequence; while closed it is meaningless and never exposed.
#[derive(Debug)]
pub struct Lightbox {
    sequence: GallerySequence,
    current: usize,
    open: bool,
    lock: ScrollLock,
    scroll_guard: Option<ScrollGuard>,
}

impl Lightbox {
    /// Creates a closed lightbox sharing the given scroll-suppression flag
    /// with the host page.
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            sequence: GallerySequence::new(),
            current: 0,
            open: false,
            lock,
            scroll_guard: None,
        }
    }

    /// Opens the viewer on `sequence` at `start_index`, clamped into range.
    /// Opening an empty sequence is a no-op and the viewer stays closed.
    /// Acquires the shared scroll lock for the duration of the session.
    pub fn open(&mut self, sequence: GallerySequence, start_index: usize) {
        if sequence.is_empty() {
            return;
        }

        self.current = start_index.min(sequence.len() - 1);
        self.sequence = sequence;
        self.open = true;
        self.scroll_guard = Some(self.lock.acquire());
    }

    /// Closes the viewer and releases the scroll lock. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
        self.scroll_guard = None;
    }

    /// Advances to the next image, wrapping past the end. Defined for a
    /// single-image sequence (stays put). No-op while closed.
    pub fn next(&mut self) {
        if !self.open {
            return;
        }
        self.current = (self.current + 1) % self.sequence.len();
    }

    /// Steps back to the previous image, wrapping past the start. The
    /// add-length-before-mod form keeps the arithmetic in unsigned range.
    pub fn previous(&mut self) {
        if !self.open {
            return;
        }
        let n = self.sequence.len();
        self.current = (self.current + n - 1) % n;
    }

    /// Jumps directly to `index` (thumbnail selection), bypassing sequential
    /// navigation. No-op while closed or when `index` is out of range.
    pub fn goto(&mut self, index: usize) {
        if !self.open || index >= self.sequence.len() {
            return;
        }
        self.current = index;
    }

    /// Whether the viewer is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current position, only meaningful (and only `Some`) while open.
    pub fn current_index(&self) -> Option<usize> {
        self.open.then_some(self.current)
    }

    /// Descriptor of the image being displayed, while open.
    pub fn current_image(&self) -> Option<&ImageDescriptor> {
        if !self.open {
            return None;
        }
        self.sequence.get(self.current)
    }

    /// Length of the open session's sequence, 0 while closed. A previous
    /// session's sequence is retained internally but never reported.
    pub fn len(&self) -> usize {
        if self.open {
            self.sequence.len()
        } else {
            0
        }
    }

    /// Whether the viewer currently shows any images. Always true while
    /// closed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

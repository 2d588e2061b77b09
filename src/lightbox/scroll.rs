// SPDX-License-Identifier: MPL-2.0
//! Process-wide scroll suppression flag for the modal lightbox.
//!
//! The host page must not scroll while the lightbox is open. The flag is a
//! shared boolean acquired by the navigation controller on open and released
//! through an RAII guard, so every exit path (explicit close, controller
//! teardown mid-session) restores scrolling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handle to the scroll-suppression flag. Clones observe the same
/// underlying flag.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    flag: Arc<AtomicBool>,
}

impl ScrollLock {
    /// Creates an unlocked flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether background scrolling is currently suppressed.
    pub fn is_locked(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Raises the flag and returns a guard that lowers it again on drop.
    #[must_use]
    pub fn acquire(&self) -> ScrollGuard {
        self.flag.store(true, Ordering::Relaxed);
        ScrollGuard {
            flag: Arc::clone(&self.flag),
        }
    }
}

/// Guard holding the scroll-suppression flag raised.
#[derive(Debug)]
pub struct ScrollGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Keyboard adapter for the modal lightbox.
//!
//! Pure translation of key presses into controller actions. The viewer is
//! modal, so the mapping is global (not focus-scoped); the application only
//! consults it while the lightbox is open, and the event subscription that
//! feeds it is torn down the instant the lightbox closes.

use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// Controller action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Close the viewer (Escape).
    Close,
    /// Step to the previous image (ArrowLeft).
    Previous,
    /// Step to the next image (ArrowRight).
    Next,
}

/// Maps a pressed key to a lightbox action. Keys outside the navigation set
/// are ignored.
pub fn action_for_key(key: &Key) -> Option<Action> {
    match key {
        Key::Named(Named::Escape) => Some(Action::Close),
        Key::Named(Named::ArrowLeft) => Some(Action::Previous),
        Key::Named(Named::ArrowRight) => Some(Action::Next),
        _ => None,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a modal gallery viewer (lightbox) for event-portfolio
//! image sets, built with the Iced GUI framework.
//!
//! The host page shows a thumbnail grid for a gallery loaded from disk; the
//! lightbox displays one image at a time with wraparound keyboard and swipe
//! navigation, and suppresses background scrolling while it is open.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod widgets;

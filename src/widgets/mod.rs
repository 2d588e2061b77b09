// SPDX-License-Identifier: MPL-2.0
//! Custom widgets for the host page.

pub mod scroll_freeze;

pub use scroll_freeze::scroll_freeze;

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the host grid and the
//! modal lightbox.
//!
//! The `App` struct wires together the gallery sequence, the lightbox
//! controller and its input adapters, localization, and user preferences.
//! Policy decisions (window sizing, swipe-distance clamping, gallery
//! loading) stay close to the boot path so user-facing behavior is easy to
//! audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::{self, manifest::ComparisonCaptions, GallerySequence};
use crate::i18n::fluent::I18n;
use crate::lightbox::{swipe, Lightbox, ScrollLock};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging the thumbnail grid, the lightbox,
/// localization, and preferences.
pub struct App {
    pub i18n: I18n,
    /// Gallery title from the manifest, shown in the window title.
    pub(crate) gallery_title: Option<String>,
    pub(crate) sequence: GallerySequence,
    pub(crate) lightbox: Lightbox,
    pub(crate) swipe: swipe::State,
    pub(crate) scroll_lock: ScrollLock,
    pub(crate) thumbnail_size: f32,
    /// Details of a gallery load failure, surfaced in the empty state.
    pub(crate) load_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.sequence.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Ensures configured swipe distances stay inside a usable range so a
/// persisted config cannot make navigation impossible or hair-trigger.
fn clamp_swipe_distance(value: f32) -> f32 {
    value.clamp(8.0, 400.0)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: loads preferences, resolves the
    /// locale, and reads the gallery named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let swipe_min = clamp_swipe_distance(
            config
                .swipe_min_distance
                .unwrap_or(swipe::MIN_SWIPE_DISTANCE),
        );
        let thumbnail_size = config
            .thumbnail_size
            .unwrap_or(config::DEFAULT_THUMBNAIL_SIZE)
            .max(64.0);

        let scroll_lock = ScrollLock::new();
        let mut app = App {
            gallery_title: None,
            sequence: GallerySequence::new(),
            lightbox: Lightbox::new(scroll_lock.clone()),
            swipe: swipe::State::new().with_min_distance(swipe_min),
            scroll_lock,
            thumbnail_size,
            load_error: None,
            i18n,
        };

        if let Some(path) = flags.path {
            let before = app.i18n.tr("comparison-before");
            let after = app.i18n.tr("comparison-after");
            let captions = ComparisonCaptions {
                before: &before,
                after: &after,
            };

            match gallery::load(&PathBuf::from(&path), captions) {
                Ok(loaded) => {
                    app.gallery_title = loaded.title;
                    app.sequence = loaded.sequence;
                }
                Err(e) => {
                    app.load_error = Some(e.to_string());
                }
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.gallery_title {
            Some(title) => format!("{} - {}", title, self.i18n.tr("window-title")),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

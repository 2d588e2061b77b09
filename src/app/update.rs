// SPDX-License-Identifier: MPL-2.0
//! Update logic: applies messages to the lightbox through its public
//! operations. The adapters never touch viewer state directly; their
//! effects are resolved here.

use super::{App, Message};
use crate::lightbox::{self, swipe};
use iced::Task;

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ThumbnailPressed(index) => {
            if app.lightbox.is_open() {
                app.lightbox.goto(index);
            } else {
                app.swipe.reset();
                app.lightbox.open(app.sequence.clone(), index);
            }
        }
        Message::Lightbox(msg) => match msg {
            lightbox::Message::CloseRequested => app.lightbox.close(),
            lightbox::Message::PreviousPressed => app.lightbox.previous(),
            lightbox::Message::NextPressed => app.lightbox.next(),
        },
        Message::Swipe(msg) => match app.swipe.handle(msg) {
            swipe::Effect::Previous => app.lightbox.previous(),
            swipe::Effect::Next => app.lightbox.next(),
            swipe::Effect::None => {}
        },
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::gallery::{GallerySequence, ImageDescriptor};

    fn app_with_images(n: usize) -> App {
        let (mut app, _task) = App::new(Flags::default());
        app.sequence = GallerySequence::from_images(
            (0..n)
                .map(|i| ImageDescriptor::new(format!("img-{i}"), format!("/g/{i}.jpg")))
                .collect(),
        );
        app
    }

    #[test]
    fn thumbnail_press_opens_lightbox_at_index() {
        let mut app = app_with_images(4);
        handle(&mut app, Message::ThumbnailPressed(2));

        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.current_index(), Some(2));
        assert!(app.scroll_lock.is_locked());
    }

    #[test]
    fn thumbnail_press_while_open_jumps_directly() {
        let mut app = app_with_images(4);
        handle(&mut app, Message::ThumbnailPressed(0));
        handle(&mut app, Message::ThumbnailPressed(3));

        assert_eq!(app.lightbox.current_index(), Some(3));
    }

    #[test]
    fn thumbnail_press_on_empty_gallery_stays_closed() {
        let mut app = app_with_images(0);
        handle(&mut app, Message::ThumbnailPressed(0));

        assert!(!app.lightbox.is_open());
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn close_releases_scroll_lock() {
        let mut app = app_with_images(2);
        handle(&mut app, Message::ThumbnailPressed(0));
        handle(&mut app, Message::Lightbox(lightbox::Message::CloseRequested));

        assert!(!app.lightbox.is_open());
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn swipe_effect_drives_navigation() {
        let mut app = app_with_images(3);
        handle(&mut app, Message::ThumbnailPressed(0));

        handle(&mut app, Message::Swipe(swipe::Message::Started(300.0)));
        handle(&mut app, Message::Swipe(swipe::Message::Moved(180.0)));
        handle(&mut app, Message::Swipe(swipe::Message::Ended));

        assert_eq!(app.lightbox.current_index(), Some(1));
    }

    #[test]
    fn short_swipe_changes_nothing() {
        let mut app = app_with_images(3);
        handle(&mut app, Message::ThumbnailPressed(1));

        handle(&mut app, Message::Swipe(swipe::Message::Started(100.0)));
        handle(&mut app, Message::Swipe(swipe::Message::Moved(130.0)));
        handle(&mut app, Message::Swipe(swipe::Message::Ended));

        assert_eq!(app.lightbox.current_index(), Some(1));
    }
}

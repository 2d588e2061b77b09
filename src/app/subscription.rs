// SPDX-License-Identifier: MPL-2.0
//! Event subscription for the modal lightbox.
//!
//! The keyboard and touch listeners are scoped to the open lifetime of the
//! viewer: the subscription exists only while the lightbox is open and is
//! torn down by the runtime the instant it closes, so no handler outlives a
//! viewer session and none leaks across open/close cycles.

use super::{App, Message};
use crate::lightbox::{self, keyboard, swipe};
use iced::{event, keyboard as kb, mouse, touch, window, Event, Subscription};

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    if app.lightbox.is_open() {
        event::listen_with(on_event)
    } else {
        Subscription::none()
    }
}

/// Routes native events to the lightbox while it is open. Keyboard goes
/// through the keyboard adapter; touch and mouse drags feed the swipe
/// tracker.
fn on_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(kb::Event::KeyPressed { key, .. }) => keyboard::action_for_key(&key)
            .map(|action| {
                Message::Lightbox(match action {
                    keyboard::Action::Close => lightbox::Message::CloseRequested,
                    keyboard::Action::Previous => lightbox::Message::PreviousPressed,
                    keyboard::Action::Next => lightbox::Message::NextPressed,
                })
            }),
        Event::Touch(touch_event) => Some(Message::Swipe(match touch_event {
            touch::Event::FingerPressed { position, .. } => swipe::Message::Started(position.x),
            touch::Event::FingerMoved { position, .. } => swipe::Message::Moved(position.x),
            touch::Event::FingerLifted { .. } => swipe::Message::Ended,
            touch::Event::FingerLost { .. } => swipe::Message::Cancelled,
        })),
        Event::Mouse(mouse_event) => match mouse_event {
            mouse::Event::CursorMoved { position } => {
                Some(Message::Swipe(swipe::Message::Moved(position.x)))
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                Some(Message::Swipe(swipe::Message::Pressed))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                Some(Message::Swipe(swipe::Message::Ended))
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Location, Modifiers};
    use iced::Point;

    fn key_press(key: Key) -> Event {
        Event::Keyboard(kb::Event::KeyPressed {
            key: key.clone(),
            modified_key: key.clone(),
            physical_key: kb::key::Physical::Unidentified(kb::key::NativeCode::Unidentified),
            location: Location::Standard,
            modifiers: Modifiers::empty(),
            text: None,
            repeat: false,
        })
    }

    fn route(event: Event) -> Option<Message> {
        on_event(event, event::Status::Ignored, window::Id::unique())
    }

    #[test]
    fn escape_routes_to_close() {
        let message = route(key_press(Key::Named(Named::Escape)));
        assert_eq!(
            message,
            Some(Message::Lightbox(lightbox::Message::CloseRequested))
        );
    }

    #[test]
    fn arrow_keys_route_to_navigation() {
        assert_eq!(
            route(key_press(Key::Named(Named::ArrowRight))),
            Some(Message::Lightbox(lightbox::Message::NextPressed))
        );
        assert_eq!(
            route(key_press(Key::Named(Named::ArrowLeft))),
            Some(Message::Lightbox(lightbox::Message::PreviousPressed))
        );
    }

    #[test]
    fn other_keys_are_dropped() {
        assert_eq!(route(key_press(Key::Named(Named::Enter))), None);
    }

    #[test]
    fn touch_events_feed_the_swipe_tracker() {
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(120.0, 40.0),
        });
        assert_eq!(
            route(pressed),
            Some(Message::Swipe(swipe::Message::Started(120.0)))
        );

        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(1),
            position: Point::new(120.0, 40.0),
        });
        assert_eq!(route(lost), Some(Message::Swipe(swipe::Message::Cancelled)));
    }

    #[test]
    fn right_mouse_button_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(route(event), None);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox: presentation surface and its sub-components.
//!
//! The controller owns the viewer state, the keyboard and swipe adapters
//! translate input into controller operations, and `view` renders the open
//! viewer as a modal overlay with one image at a time, its caption, a
//! 1-based position counter, and navigation chrome. Only clicks on the
//! dimmed backdrop itself close the viewer.

pub mod controller;
pub mod keyboard;
pub mod scroll;
pub mod swipe;

pub use controller::Lightbox;
pub use scroll::ScrollLock;

use crate::i18n::fluent::I18n;
use fluent_bundle::FluentArgs;
use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, text, tooltip, Stack};
use iced::{alignment, Border, Color, ContentFit, Element, Length, Theme};

/// Messages emitted by the lightbox chrome (buttons and backdrop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button, Escape, or a click on the backdrop.
    CloseRequested,
    PreviousPressed,
    NextPressed,
}

/// Context required to render the lightbox overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: &'a Lightbox,
}

/// Renders the modal overlay, or `None` while the viewer is closed.
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    let current = ctx.lightbox.current_image()?;
    let position = ctx.lightbox.current_index()?;
    let total = ctx.lightbox.len();

    // Exactly one image at a time, caption underneath when present.
    let mut content = column![image(image::Handle::from_path(&current.source))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)]
    .align_x(alignment::Horizontal::Center)
    .spacing(8);

    if let Some(caption) = &current.caption {
        content = content.push(
            container(text(caption.as_str()).size(16))
                .style(pill_style)
                .padding([6, 14]),
        );
    }

    // The content area consumes its own clicks; only presses that fall
    // through to the backdrop close the viewer.
    let backdrop = mouse_area(
        center(opaque(content))
            .padding(48)
            .style(backdrop_style),
    )
    .on_press(Message::CloseRequested);

    let mut layers = Stack::new().push(backdrop).push(
        container(chrome_button(
            "\u{2715}",
            26,
            Message::CloseRequested,
            ctx.i18n.tr("btn-close"),
        ))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(12),
    );

    if shows_navigation_chrome(total) {
        layers = layers.push(
            container(
                row![
                    chrome_button(
                        "\u{2039}",
                        48,
                        Message::PreviousPressed,
                        ctx.i18n.tr("btn-previous"),
                    ),
                    iced::widget::space::horizontal(),
                    chrome_button("\u{203A}", 48, Message::NextPressed, ctx.i18n.tr("btn-next")),
                ]
                .align_y(alignment::Vertical::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .padding(12),
        );

        let mut args = FluentArgs::new();
        args.set("current", (position + 1) as i64);
        args.set("total", total as i64);
        layers = layers.push(
            container(
                container(text(ctx.i18n.tr_with("position-counter", &args)).size(15))
                    .style(pill_style)
                    .padding([4, 12]),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(16),
        );
    }

    Some(opaque(layers))
}

/// Whether the arrows and the position counter are rendered. There is
/// nothing to navigate to with a single image, so the chrome only appears
/// for larger sequences.
fn shows_navigation_chrome(total: usize) -> bool {
    total > 1
}

fn chrome_button(
    glyph: &str,
    size: u32,
    message: Message,
    tip: String,
) -> Element<'_, Message> {
    tooltip(
        button(text(glyph).size(size))
            .style(chrome_button_style)
            .on_press(message),
        container(text(tip).size(13)).style(pill_style).padding([4, 8]),
        tooltip::Position::Bottom,
    )
    .into()
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.9, ..Color::BLACK }.into()),
        ..container::Style::default()
    }
}

fn pill_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.5, ..Color::BLACK }.into()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn chrome_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        _ => Color {
            a: 0.8,
            ..Color::WHITE
        },
    };
    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{GallerySequence, ImageDescriptor};

    fn sequence(n: usize) -> GallerySequence {
        GallerySequence::from_images(
            (0..n)
                .map(|i| ImageDescriptor::new(format!("img-{i}"), format!("/g/{i}.jpg")))
                .collect(),
        )
    }

    #[test]
    fn navigation_chrome_is_hidden_for_single_image() {
        assert!(!shows_navigation_chrome(0));
        assert!(!shows_navigation_chrome(1));
    }

    #[test]
    fn navigation_chrome_is_shown_for_multiple_images() {
        assert!(shows_navigation_chrome(2));
        assert!(shows_navigation_chrome(12));
    }

    #[test]
    fn view_renders_nothing_while_closed() {
        let i18n = I18n::default();
        let lightbox = Lightbox::new(ScrollLock::new());

        let overlay = view(ViewContext {
            i18n: &i18n,
            lightbox: &lightbox,
        });
        assert!(overlay.is_none());
    }

    #[test]
    fn view_renders_the_overlay_while_open() {
        let i18n = I18n::default();
        let mut lightbox = Lightbox::new(ScrollLock::new());
        lightbox.open(sequence(3), 0);

        let overlay = view(ViewContext {
            i18n: &i18n,
            lightbox: &lightbox,
        });
        assert!(overlay.is_some());
    }
}

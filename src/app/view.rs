// SPDX-License-Identifier: MPL-2.0
//! View rendering: the thumbnail grid host page with the lightbox stacked
//! on top while open.

use super::{App, Message};
use crate::gallery::ImageDescriptor;
use crate::lightbox;
use crate::widgets::scroll_freeze;
use iced::widget::{
    button, center, column, container, image, scrollable, text, tooltip, Column, Row, Stack,
};
use iced::{alignment, ContentFit, Element, Length};

const GRID_COLUMNS: usize = 4;
const GRID_SPACING: f32 = 8.0;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let base: Element<'_, Message> = if app.sequence.is_empty() {
        empty_state(app)
    } else {
        grid(app)
    };

    let mut layers = Stack::new().push(base);

    if let Some(overlay) = lightbox::view(lightbox::ViewContext {
        i18n: &app.i18n,
        lightbox: &app.lightbox,
    }) {
        layers = layers.push(overlay.map(Message::Lightbox));
    }

    layers.into()
}

fn grid(app: &App) -> Element<'_, Message> {
    let mut rows = Column::new().spacing(GRID_SPACING).padding(16);

    let entries: Vec<(usize, &ImageDescriptor)> = app.sequence.iter().enumerate().collect();
    for chunk in entries.chunks(GRID_COLUMNS) {
        let mut grid_row = Row::new().spacing(GRID_SPACING);
        for (index, descriptor) in chunk {
            grid_row = grid_row.push(thumbnail(app, *index, descriptor));
        }
        rows = rows.push(grid_row);
    }

    let content = scrollable(rows).width(Length::Fill).height(Length::Fill);

    // Background scrolling is suppressed for as long as the lightbox holds
    // the scroll lock.
    scroll_freeze(content, app.scroll_lock.is_locked()).into()
}

fn thumbnail<'a>(
    app: &'a App,
    index: usize,
    descriptor: &'a ImageDescriptor,
) -> Element<'a, Message> {
    let size = app.thumbnail_size;
    let thumb = button(
        image(image::Handle::from_path(&descriptor.source))
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size)),
    )
    .padding(0)
    .on_press(Message::ThumbnailPressed(index));

    tooltip(
        thumb,
        container(text(descriptor.label(index)).size(13))
            .style(container::rounded_box)
            .padding([4, 8]),
        tooltip::Position::Bottom,
    )
    .into()
}

fn empty_state(app: &App) -> Element<'_, Message> {
    let headline = if app.load_error.is_some() {
        app.i18n.tr("gallery-load-error")
    } else {
        app.i18n.tr("empty-gallery")
    };

    let mut content = column![text(headline).size(18)]
        .spacing(8)
        .align_x(alignment::Horizontal::Center);

    if let Some(detail) = &app.load_error {
        content = content.push(text(detail.as_str()).size(13));
    }

    center(content).into()
}

// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid shown behind the lightbox.
//!
//! Every cell is a button emitting [`ClickTarget::Thumbnail`] with the
//! gallery position of the image, so the index always matches the gallery.

use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::lightbox::ClickTarget;
use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};
use std::path::Path;

/// Load status of a single grid cell.
#[derive(Debug, Clone, Default)]
pub enum ThumbnailState {
    #[default]
    Loading,
    Ready(ImageData),
    Failed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery_dir: &'a Path,
}

pub struct ViewModel<'a> {
    pub gallery: &'a Gallery,
    pub thumbnails: &'a [ThumbnailState],
    pub thumbnail_size: u32,
    pub columns: u32,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, ClickTarget> {
    if model.gallery.is_empty() {
        return empty_state(&ctx);
    }

    let columns = model.columns.max(1) as usize;
    let cell_size = model.thumbnail_size as f32;

    let mut grid = Column::new().spacing(spacing::SM).padding(spacing::MD);
    let mut row = Row::new().spacing(spacing::SM);
    let mut in_row = 0;

    for entry in model.gallery.iter() {
        let state = model
            .thumbnails
            .get(entry.position())
            .unwrap_or(&ThumbnailState::Loading);
        row = row.push(cell(ctx.i18n, state, entry.position(), cell_size));
        in_row += 1;
        if in_row == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::SM);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    let centered = Container::new(grid)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Scrollable::new(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn cell<'a>(
    i18n: &I18n,
    state: &ThumbnailState,
    index: usize,
    size: f32,
) -> Element<'a, ClickTarget> {
    let content: Element<'a, ClickTarget> = match state {
        ThumbnailState::Ready(data) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ThumbnailState::Loading => placeholder(i18n.tr("thumbnail-loading")),
        ThumbnailState::Failed => placeholder(i18n.tr("thumbnail-unavailable")),
    };

    button(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .padding(spacing::XXS)
    .style(styles::button::thumbnail)
    .on_press(ClickTarget::Thumbnail(index))
    .into()
}

fn placeholder<'a>(label: String) -> Element<'a, ClickTarget> {
    Text::new(label).size(typography::CAPTION).into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, ClickTarget> {
    let directory = ctx.gallery_dir.display().to_string();
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-empty-heading")).size(typography::TITLE_MD))
        .push(Space::new().height(spacing::XS))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("gallery-empty-body", &[("directory", directory.as_str())]),
            )
            .size(typography::BODY),
        );

    Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

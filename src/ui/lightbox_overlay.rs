// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay drawn above the grid.
//!
//! Layers, bottom to top: the dimmed backdrop, the image, the two arrow
//! zones, the close button and the position indicator. The backdrop only
//! sees presses that no layer above it captured, so clicks on the image or
//! on an arrow never dismiss the overlay.

use crate::gallery::GalleryImage;
use crate::i18n::fluent::I18n;
use crate::lightbox::ClickTarget;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel<'a> {
    /// Image at the controller's current index.
    pub image: &'a GalleryImage,
    pub total_count: usize,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, ClickTarget> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(ClickTarget::Background);

    let picture = mouse_area(
        image(image::Handle::from_path(model.image.source()))
            .content_fit(ContentFit::Contain)
            .width(Length::Shrink)
            .height(Length::Shrink),
    )
    .on_press(ClickTarget::Image);

    // Leave room for the arrows and the indicator around the image.
    let picture_layer = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XL * 2.0, spacing::XL * 3.0])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut stack = Stack::new()
        .push(backdrop)
        .push(picture_layer)
        .push(arrow_zone(
            "◀",
            ctx.i18n.tr("lightbox-previous"),
            ClickTarget::PreviousArrow,
            Horizontal::Left,
        ))
        .push(arrow_zone(
            "▶",
            ctx.i18n.tr("lightbox-next"),
            ClickTarget::NextArrow,
            Horizontal::Right,
        ));

    let close = button(Text::new("✕").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_PRESSED,
        ))
        .on_press(ClickTarget::CloseControl);
    stack = stack.push(
        Container::new(close)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    stack = stack.push(position_indicator(&ctx, &model));

    opaque(stack)
}

fn arrow_zone<'a>(
    glyph: &'a str,
    label: String,
    target: ClickTarget,
    side: Horizontal,
) -> Element<'a, ClickTarget> {
    let arrow = button(
        Column::new()
            .align_x(Horizontal::Center)
            .push(Text::new(glyph).size(typography::TITLE_LG))
            .push(Text::new(label).size(typography::CAPTION)),
    )
    .padding(spacing::SM)
    .style(styles::button::overlay(
        WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_PRESSED,
    ))
    .on_press(target);

    let zone = Container::new(arrow)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center);

    // Presses next to the button still count as an arrow click.
    Container::new(mouse_area(zone).on_press(target))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .into()
}

fn position_indicator<'a>(
    ctx: &ViewContext<'a>,
    model: &ViewModel<'a>,
) -> Element<'a, ClickTarget> {
    let current = (model.image.position() + 1).to_string();
    let total = model.total_count.to_string();
    let position = ctx.i18n.tr_with_args(
        "lightbox-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    );
    let label = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(Text::new(position).size(typography::BODY))
        .push(Text::new(model.image.file_name()).size(typography::CAPTION));

    let pill = Container::new(label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::indicator(radius::FULL));

    Container::new(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Button styles for the gallery grid and the lightbox controls.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Translucent button drawn over the backdrop (arrows, close control).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Grid cell wrapping a thumbnail. Hover draws a brand-colored frame.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let cell = if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_900
    };
    let (border_color, border_width, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, 2.0, shadow::MD),
        button::Status::Pressed => (palette::PRIMARY_500, 2.0, shadow::NONE),
        _ => (palette::GRAY_400, 1.0, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(cell)),
        text_color: if is_light { BLACK } else { WHITE },
        border: Border {
            color: border_color,
            width: border_width,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

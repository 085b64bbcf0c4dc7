// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action (submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, edge) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => return disabled(theme, status),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Grayed out, non-interactive button.
pub fn disabled(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Language chip; the active locale is highlighted.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            primary(theme, button::Status::Active)
        } else {
            button::secondary(theme, status)
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Style for a login field. Invalid fields keep a red border in every state.
pub fn field(invalid: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let palette = theme.extended_palette();

        let (background, border_color, value) = match status {
            Status::Active | Status::Hovered => (
                palette.background.base.color,
                palette.background.strong.color,
                palette.background.base.text,
            ),
            Status::Focused { .. } => (
                palette.background.base.color,
                palette.primary.strong.color,
                palette.background.base.text,
            ),
            Status::Disabled => (
                palette.background.weak.color,
                palette.background.strong.color,
                palette.background.strong.text,
            ),
        };

        let focused = matches!(status, Status::Focused { .. });
        let (border_color, border_width) = if invalid {
            (palette::ERROR_500, border::WIDTH_MD)
        } else if focused {
            (border_color, border::WIDTH_MD)
        } else {
            (border_color, border::WIDTH_SM)
        };

        Style {
            background: background.into(),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::SM.into(),
            },
            icon: palette.background.weak.text,
            placeholder: palette.background.strong.text,
            value,
            selection: palette.primary.weak.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_has_error_border() {
        let style = field(true)(&Theme::Light, Status::Active);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn valid_field_uses_thin_theme_border_at_rest() {
        let style = field(false)(&Theme::Dark, Status::Active);
        assert_ne!(style.border.color, palette::ERROR_500);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }
}

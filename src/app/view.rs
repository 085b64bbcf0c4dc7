// SPDX-License-Identifier: MPL-2.0
//! View rendering for the login screen.

use super::{Message, Status};
use crate::form::LoginForm;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::language_bar;
use crate::ui::login_fields::LoginFields;
use crate::ui::styles::button as button_styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Border, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a LoginForm,
    pub status: Option<&'a Status>,
    pub can_submit: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text(ctx.i18n.tr("login-title")).size(typography::TITLE_MD);

    let fields = LoginFields::new(ctx.form, ctx.i18n).view().map(Message::Form);

    let submit_label = text(ctx.i18n.tr("login-submit")).size(typography::BODY);
    let submit = if ctx.can_submit {
        button(submit_label)
            .on_press(Message::Submit)
            .style(button_styles::primary)
    } else {
        button(submit_label).style(button_styles::disabled)
    }
    .padding(spacing::XS)
    .height(sizing::BUTTON_HEIGHT)
    .width(Length::Fill);

    let reset = button(text(ctx.i18n.tr("login-reset")).size(typography::CAPTION))
        .on_press(Message::Reset)
        .style(button::text);

    let actions = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(submit)
        .push(reset);

    let mut card = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(title)
        .push(fields)
        .push(actions);

    if let Some(status) = ctx.status {
        card = card.push(status_line(ctx.i18n, status));
    }

    let card = Container::new(card)
        .padding(spacing::LG)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: radius::LG.into(),
                },
                ..Default::default()
            }
        });

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(language_bar::view(ctx.i18n, Message::LanguageSelected));

    let body = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Column::new()
        .padding(spacing::MD)
        .spacing(spacing::MD)
        .push(header)
        .push(body)
        .into()
}

fn status_line<'a>(i18n: &I18n, status: &Status) -> Element<'a, Message> {
    let (content, color) = match status {
        Status::Ready { user_id } => (
            i18n.tr_with_args(
                "login-status-ready",
                &[("user", FluentValue::from(user_id.as_str()))],
            ),
            palette::SUCCESS_500,
        ),
        Status::Invalid { count } => (
            i18n.tr_with_args("login-status-invalid", &[("count", FluentValue::from(*count))]),
            palette::ERROR_500,
        ),
        Status::Warning(key) => (i18n.tr(key), palette::GRAY_400),
    };

    text(content)
        .size(typography::CAPTION)
        .color(color)
        .into()
}

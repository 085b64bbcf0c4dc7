// SPDX-License-Identifier: MPL-2.0
//! Row of buttons for switching the display language.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Row};
use iced::{alignment::Vertical, Element};
use unic_langid::LanguageIdentifier;

/// Label for a locale: its translated name followed by the raw tag, or the
/// raw tag alone when no translation exists.
pub fn locale_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let tag = locale.to_string();
    let translated = i18n.tr(&format!("language-name-{}", tag));
    if translated.starts_with("MISSING:") {
        tag
    } else {
        format!("{} ({})", translated, tag)
    }
}

pub fn view<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    on_select: impl Fn(LanguageIdentifier) -> Message,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(i18n.tr("language-label")).size(typography::CAPTION));

    for locale in i18n.available_locales() {
        let selected = i18n.current_locale() == locale;
        let chip = button(text(locale_label(i18n, locale)).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(button_styles::chip(selected))
            .on_press(on_select(locale.clone()));
        row = row.push(chip);
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn locale_label_combines_name_and_tag() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let ko: LanguageIdentifier = "ko".parse().unwrap();
        assert_eq!(locale_label(&i18n, &ko), "Korean (ko)");
    }

    #[test]
    fn locale_label_falls_back_to_tag() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let de: LanguageIdentifier = "de".parse().unwrap();
        assert_eq!(locale_label(&i18n, &de), "de");
    }

    #[test]
    fn view_returns_element() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let _element: Element<'_, LanguageIdentifier> = view(&i18n, |locale| locale);
    }
}

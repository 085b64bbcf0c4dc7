// SPDX-License-Identifier: MPL-2.0
//! Identifier and password fields of the login screen.
//!
//! The component is a stateless mapping from a borrowed [`FormHandle`] to a
//! widget tree. Each render pass reads the handle's bindings and error map;
//! input is forwarded as [`FormEvent`]s through the bindings and never
//! applied here.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::login_fields::LoginFields;
//!
//! LoginFields::new(&self.form, &self.i18n)
//!     .view()
//!     .map(Message::Form)
//! ```
//!
//! [`LoginFields::fields`] exposes the same pass as plain data, which is what
//! the view is built from.

use crate::form::{Binding, FieldKey, FormEvent, FormHandle};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::text_input as text_input_styles;
use iced::widget::{text, text_input, Column, Id};
use iced::{Element, Length};

/// Character shown in place of each character of an obscured value.
pub const MASK_CHAR: char = '\u{2022}';

/// Inline error attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorView<'a> {
    /// Identifier of the error element.
    pub id: &'static str,
    /// Identifier of the control the error describes.
    pub describes: &'static str,
    pub message: &'a str,
}

/// One field of a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub key: FieldKey,
    /// Identifier of the control.
    pub id: &'static str,
    pub label: String,
    pub placeholder: String,
    /// Whether the value is obscured on screen.
    pub secure: bool,
    /// `None` when the handle did not provide a binding for this field.
    pub binding: Option<Binding<'a>>,
    pub error: Option<FieldErrorView<'a>>,
}

impl<'a> FieldView<'a> {
    /// Raw value from the binding, or empty when unbound.
    pub fn value(&self) -> &'a str {
        self.binding.map(|binding| binding.value()).unwrap_or_default()
    }

    /// Value as it appears on screen.
    pub fn display_value(&self) -> String {
        if self.secure {
            std::iter::repeat(MASK_CHAR)
                .take(self.value().chars().count())
                .collect()
        } else {
            self.value().to_string()
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

/// Renders the login fields of a caller-owned form.
pub struct LoginFields<'a, H: FormHandle + ?Sized> {
    handle: &'a H,
    i18n: &'a I18n,
}

impl<'a, H: FormHandle + ?Sized> LoginFields<'a, H> {
    pub fn new(handle: &'a H, i18n: &'a I18n) -> Self {
        Self { handle, i18n }
    }

    /// Builds the field descriptions for this render pass, in render order.
    pub fn fields(&self) -> Vec<FieldView<'a>> {
        let handle: &'a H = self.handle;
        let errors = handle.errors();

        FieldKey::all()
            .iter()
            .map(|&key| FieldView {
                key,
                id: key.accessibility_id(),
                label: self.i18n.tr(label_key(key)),
                placeholder: self.i18n.tr(placeholder_key(key)),
                secure: key == FieldKey::Password,
                binding: handle.register(key),
                error: errors.get(key).map(|message| FieldErrorView {
                    id: key.error_id(),
                    describes: key.accessibility_id(),
                    message,
                }),
            })
            .collect()
    }

    pub fn view(self) -> Element<'a, FormEvent> {
        let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);
        for field in self.fields() {
            column = column.push(field_view(field));
        }
        column.into()
    }
}

fn label_key(key: FieldKey) -> &'static str {
    match key {
        FieldKey::UserId => "login-user-id-label",
        FieldKey::Password => "login-password-label",
    }
}

fn placeholder_key(key: FieldKey) -> &'static str {
    match key {
        FieldKey::UserId => "login-user-id-placeholder",
        FieldKey::Password => "login-password-placeholder",
    }
}

fn field_view(field: FieldView<'_>) -> Element<'_, FormEvent> {
    let mut col = Column::new().spacing(spacing::XXS).width(Length::Fill);

    col = col.push(text(field.label.clone()).size(typography::BODY));

    let mut input = text_input(&field.placeholder, field.value())
        .id(Id::new(field.id))
        .secure(field.secure)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(text_input_styles::field(field.error.is_some()));

    // Without on_input the control renders disabled.
    if let Some(binding) = field.binding {
        input = input
            .on_input(move |value| binding.on_change(value))
            .on_submit(binding.on_submit());
    }
    col = col.push(input);

    if let Some(error) = field.error {
        col = col.push(
            text(error.message.to_string())
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    col.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::form::FieldErrors;

    struct StubHandle {
        user_id: String,
        password: String,
        errors: FieldErrors,
        known: Vec<FieldKey>,
    }

    impl StubHandle {
        fn new() -> Self {
            Self {
                user_id: "me@example.com".into(),
                password: "hunter22".into(),
                errors: FieldErrors::new(),
                known: FieldKey::all().to_vec(),
            }
        }
    }

    impl FormHandle for StubHandle {
        fn register(&self, key: FieldKey) -> Option<Binding<'_>> {
            if !self.known.contains(&key) {
                return None;
            }
            let value = match key {
                FieldKey::UserId => &self.user_id,
                FieldKey::Password => &self.password,
            };
            Some(Binding::new(key, value))
        }

        fn errors(&self) -> &FieldErrors {
            &self.errors
        }
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn fields_are_rendered_in_order_with_fixed_ids() {
        let handle = StubHandle::new();
        let i18n = english();
        let fields = LoginFields::new(&handle, &i18n).fields();

        let ids: Vec<&str> = fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["email", "password"]);
        assert_eq!(fields[0].label, "Email");
        assert_eq!(fields[0].placeholder, "you@example.com");
        assert_eq!(fields[1].label, "Password");
    }

    #[test]
    fn only_password_is_secure() {
        let handle = StubHandle::new();
        let i18n = english();
        let fields = LoginFields::new(&handle, &i18n).fields();

        assert!(!fields[0].secure);
        assert_eq!(fields[0].display_value(), "me@example.com");
        assert!(fields[1].secure);
        assert_eq!(fields[1].display_value(), "\u{2022}".repeat(8));
    }

    #[test]
    fn error_is_attached_to_its_control() {
        let mut handle = StubHandle::new();
        handle.errors.insert(FieldKey::Password, "Too short");
        let i18n = english();
        let fields = LoginFields::new(&handle, &i18n).fields();

        assert!(fields[0].error.is_none());
        let error = fields[1].error.as_ref().expect("password error");
        assert_eq!(error.message, "Too short");
        assert_eq!(error.id, "password-error");
        assert_eq!(error.describes, "password");
    }

    #[test]
    fn missing_binding_renders_unbound_empty_control() {
        let mut handle = StubHandle::new();
        handle.known = vec![FieldKey::Password];
        let i18n = english();
        let fields = LoginFields::new(&handle, &i18n).fields();

        assert_eq!(fields.len(), 2);
        assert!(!fields[0].is_bound());
        assert_eq!(fields[0].value(), "");
        assert!(fields[1].is_bound());
    }

    #[test]
    fn bindings_forward_input_as_events() {
        let handle = StubHandle::new();
        let i18n = english();
        let fields = LoginFields::new(&handle, &i18n).fields();
        let binding = fields[0].binding.expect("user id binding");

        assert_eq!(
            binding.on_change("you@example.com".into()),
            FormEvent::Changed(FieldKey::UserId, "you@example.com".into())
        );
        // Rendering leaves the handle untouched.
        assert_eq!(handle.user_id, "me@example.com");
    }

    #[test]
    fn view_returns_element() {
        let mut handle = StubHandle::new();
        handle.errors.insert(FieldKey::UserId, "Required");
        let i18n = english();
        let _element: Element<'_, FormEvent> = LoginFields::new(&handle, &i18n).view();
    }
}

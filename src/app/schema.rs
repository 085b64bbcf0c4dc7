// SPDX-License-Identifier: MPL-2.0
//! Validation rules of the login screen.

use crate::form::{FieldErrors, FieldKey, LoginValues, Resolver};
use crate::i18n::fluent::I18n;
use fluent_bundle::FluentValue;

/// Resolves login values into localized field errors.
pub struct LoginSchema<'a> {
    i18n: &'a I18n,
    password_min_length: usize,
}

impl<'a> LoginSchema<'a> {
    pub fn new(i18n: &'a I18n, password_min_length: usize) -> Self {
        Self {
            i18n,
            password_min_length,
        }
    }
}

impl Resolver for LoginSchema<'_> {
    fn resolve(&self, values: &LoginValues) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let user_id = values.user_id.trim();
        if user_id.is_empty() {
            errors.insert(
                FieldKey::UserId,
                self.i18n.tr("login-error-user-id-required"),
            );
        } else if !looks_like_email(user_id) {
            errors.insert(FieldKey::UserId, self.i18n.tr("login-error-user-id-format"));
        }

        let password_len = values.password.chars().count();
        if password_len == 0 {
            errors.insert(
                FieldKey::Password,
                self.i18n.tr("login-error-password-required"),
            );
        } else if password_len < self.password_min_length {
            errors.insert(
                FieldKey::Password,
                self.i18n.tr_with_args(
                    "login-error-password-too-short",
                    &[("min", FluentValue::from(self.password_min_length))],
                ),
            );
        }

        errors
    }
}

/// `local@domain.tld` with no whitespace and a dot inside the domain.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn values(user_id: &str, password: &str) -> LoginValues {
        LoginValues {
            user_id: user_id.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("me@example.com"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("me@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("me@.com"));
        assert!(!looks_like_email("me@example."));
        assert!(!looks_like_email("me@@example.com"));
        assert!(!looks_like_email("me @example.com"));
    }

    #[test]
    fn valid_values_produce_no_errors() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let schema = LoginSchema::new(&i18n, 8);
        assert!(schema.resolve(&values("me@example.com", "hunter22")).is_empty());
    }

    #[test]
    fn empty_values_are_required() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let errors = LoginSchema::new(&i18n, 8).resolve(&values("  ", ""));

        assert_eq!(errors.get(FieldKey::UserId), Some("Please enter your email."));
        assert_eq!(
            errors.get(FieldKey::Password),
            Some("Please enter your password.")
        );
    }

    #[test]
    fn korean_messages_follow_locale() {
        let i18n = I18n::new(Some("ko".to_string()), &Config::default());
        let errors = LoginSchema::new(&i18n, 8).resolve(&values("not-an-email", "short"));

        assert_eq!(
            errors.get(FieldKey::UserId),
            Some("이메일 형식이 올바르지 않습니다.")
        );
        assert_eq!(
            errors.get(FieldKey::Password),
            Some("비밀번호는 최소 8자 이상이어야 합니다.")
        );
    }

    #[test]
    fn password_length_counts_characters() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let schema = LoginSchema::new(&i18n, 4);
        // Four characters, more than four bytes.
        assert!(schema.resolve(&values("me@example.com", "абвг")).is_empty());
        assert!(schema
            .resolve(&values("me@example.com", "abc"))
            .contains(FieldKey::Password));
    }
}

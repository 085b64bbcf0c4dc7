// SPDX-License-Identifier: MPL-2.0
//! Login form state owned by the screen that shows it.
//!
//! [`LoginForm`] stores values, commit/edit tracking and the current error
//! map. It has no validation rules of its own: every operation that
//! validates takes a [`Resolver`] supplied by the owner.

use super::{Binding, FieldErrors, FieldKey, FormEvent, FormHandle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// When errors are recomputed while the user edits a field.
///
/// Once the form has been submitted, every change re-validates its field
/// regardless of the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Only on submit.
    #[default]
    OnSubmit,
    /// On every change.
    OnChange,
    /// When a field is committed, then on every change of that field.
    OnTouched,
}

/// Values of the two login fields.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginValues {
    pub user_id: String,
    pub password: String,
}

impl LoginValues {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::UserId => &self.user_id,
            FieldKey::Password => &self.password,
        }
    }

    fn get_mut(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::UserId => &mut self.user_id,
            FieldKey::Password => &mut self.password,
        }
    }
}

impl fmt::Debug for LoginValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginValues")
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Computes the full error map for a set of values.
pub trait Resolver {
    fn resolve(&self, values: &LoginValues) -> FieldErrors;
}

impl<F> Resolver for F
where
    F: Fn(&LoginValues) -> FieldErrors,
{
    fn resolve(&self, values: &LoginValues) -> FieldErrors {
        self(values)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    values: LoginValues,
    errors: FieldErrors,
    touched: BTreeSet<FieldKey>,
    dirty: BTreeSet<FieldKey>,
    mode: ValidationMode,
    submit_count: u32,
}

impl LoginForm {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    pub fn values(&self) -> &LoginValues {
        &self.values
    }

    pub fn is_touched(&self, key: FieldKey) -> bool {
        self.touched.contains(&key)
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Applies an event emitted by a field binding.
    pub fn apply(&mut self, event: FormEvent, resolver: &impl Resolver) {
        match event {
            FormEvent::Changed(key, value) => {
                self.set_value(key, value);
                if self.revalidates_on_change(key) {
                    self.revalidate(key, resolver);
                }
            }
            FormEvent::Submitted(key) => {
                self.touched.insert(key);
                if self.mode != ValidationMode::OnSubmit || self.submit_count > 0 {
                    self.revalidate(key, resolver);
                }
            }
        }
    }

    /// Replaces a field value without validating.
    pub fn set_value(&mut self, key: FieldKey, value: String) {
        *self.values.get_mut(key) = value;
        self.dirty.insert(key);
    }

    /// Records an error produced outside the resolver, e.g. by the server.
    pub fn set_error(&mut self, key: FieldKey, message: impl Into<String>) {
        self.errors.insert(key, message);
    }

    pub fn clear_error(&mut self, key: FieldKey) {
        self.errors.remove(key);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Validates every field now. Returns `true` when no field has an error.
    pub fn trigger(&mut self, resolver: &impl Resolver) -> bool {
        self.errors = resolver.resolve(&self.values);
        tracing::debug!(errors = self.errors.len(), "login form validated");
        self.errors.is_empty()
    }

    /// Marks every field as committed, validates, and hands back the values
    /// when they pass.
    pub fn handle_submit(&mut self, resolver: &impl Resolver) -> Result<LoginValues, FieldErrors> {
        self.submit_count = self.submit_count.saturating_add(1);
        self.touched.extend(FieldKey::all().iter().copied());

        if self.trigger(resolver) {
            tracing::info!(attempt = self.submit_count, "login form submitted");
            Ok(self.values.clone())
        } else {
            tracing::info!(
                attempt = self.submit_count,
                errors = self.errors.len(),
                "login form rejected"
            );
            Err(self.errors.clone())
        }
    }

    /// Returns the form to its initial state, keeping the validation mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    fn revalidates_on_change(&self, key: FieldKey) -> bool {
        self.submit_count > 0
            || match self.mode {
                ValidationMode::OnSubmit => false,
                ValidationMode::OnChange => true,
                ValidationMode::OnTouched => self.touched.contains(&key),
            }
    }

    fn revalidate(&mut self, key: FieldKey, resolver: &impl Resolver) {
        let resolved = resolver.resolve(&self.values);
        match resolved.get(key) {
            Some(message) => {
                self.errors.insert(key, message);
            }
            None => {
                self.errors.remove(key);
            }
        }
    }
}

impl FormHandle for LoginForm {
    fn register(&self, key: FieldKey) -> Option<Binding<'_>> {
        Some(Binding::new(key, self.values.get(key)))
    }

    fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(values: &LoginValues) -> FieldErrors {
        FieldKey::all()
            .iter()
            .filter(|key| values.get(**key).is_empty())
            .map(|key| (*key, format!("{} is required", key.name())))
            .collect()
    }

    #[test]
    fn on_submit_mode_does_not_validate_before_first_submit() {
        let mut form = LoginForm::new(ValidationMode::OnSubmit);
        form.apply(FormEvent::Changed(FieldKey::UserId, String::new()), &required);
        form.apply(FormEvent::Submitted(FieldKey::UserId), &required);

        assert!(form.errors().is_empty());
        assert!(form.is_touched(FieldKey::UserId));
    }

    #[test]
    fn on_change_mode_validates_each_edit() {
        let mut form = LoginForm::new(ValidationMode::OnChange);
        form.apply(FormEvent::Changed(FieldKey::UserId, String::new()), &required);

        assert_eq!(form.errors().get(FieldKey::UserId), Some("userId is required"));
        // Untouched fields stay clean even though the resolver reports them.
        assert_eq!(form.errors().get(FieldKey::Password), None);
    }

    #[test]
    fn on_touched_mode_waits_for_commit() {
        let mut form = LoginForm::new(ValidationMode::OnTouched);
        form.apply(FormEvent::Changed(FieldKey::Password, String::new()), &required);
        assert!(form.errors().is_empty());

        form.apply(FormEvent::Submitted(FieldKey::Password), &required);
        assert!(form.errors().contains(FieldKey::Password));

        form.apply(FormEvent::Changed(FieldKey::Password, "hunter22".into()), &required);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn handle_submit_reports_errors_then_revalidates_on_change() {
        let mut form = LoginForm::new(ValidationMode::OnSubmit);

        let rejected = form.handle_submit(&required).unwrap_err();
        assert_eq!(rejected.len(), 2);
        assert_eq!(form.submit_count(), 1);

        form.apply(
            FormEvent::Changed(FieldKey::UserId, "me@example.com".into()),
            &required,
        );
        assert_eq!(form.errors().get(FieldKey::UserId), None);
        assert!(form.errors().contains(FieldKey::Password));
    }

    #[test]
    fn handle_submit_returns_values_when_valid() {
        let mut form = LoginForm::new(ValidationMode::OnSubmit);
        form.set_value(FieldKey::UserId, "me@example.com".into());
        form.set_value(FieldKey::Password, "hunter22".into());

        let values = form.handle_submit(&required).expect("values should pass");
        assert_eq!(values.user_id, "me@example.com");
        assert_eq!(values.password, "hunter22");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn external_errors_are_kept_until_cleared() {
        let mut form = LoginForm::default();
        form.set_error(FieldKey::Password, "Wrong password");
        assert_eq!(form.errors().get(FieldKey::Password), Some("Wrong password"));

        form.clear_error(FieldKey::Password);
        assert!(form.errors().is_empty());

        form.set_error(FieldKey::UserId, "Unknown account");
        form.clear_errors();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn reset_keeps_mode_and_drops_everything_else() {
        let mut form = LoginForm::new(ValidationMode::OnChange);
        form.set_value(FieldKey::UserId, "me@example.com".into());
        let _ = form.handle_submit(&required);

        form.reset();
        assert_eq!(form.mode(), ValidationMode::OnChange);
        assert_eq!(form.values(), &LoginValues::default());
        assert_eq!(form.submit_count(), 0);
        assert!(!form.is_dirty());
        assert!(!form.is_touched(FieldKey::UserId));
    }

    #[test]
    fn register_exposes_current_value() {
        let mut form = LoginForm::default();
        form.set_value(FieldKey::UserId, "me@example.com".into());

        let binding = form.register(FieldKey::UserId).expect("field is known");
        assert_eq!(binding.value(), "me@example.com");
        assert!(form.is_dirty());
    }

    #[test]
    fn debug_output_redacts_password() {
        let values = LoginValues {
            user_id: "me@example.com".into(),
            password: "hunter22".into(),
        };
        let rendered = format!("{:?}", values);
        assert!(rendered.contains("me@example.com"));
        assert!(!rendered.contains("hunter22"));
    }
}

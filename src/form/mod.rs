// SPDX-License-Identifier: MPL-2.0
//! Contract between a login screen and the components that render its fields.
//!
//! The screen owns the form state and hands renderers a borrow of it through
//! the [`FormHandle`] trait. Renderers read values and errors from the handle
//! and emit [`FormEvent`]s through the [`Binding`] of each field; only the
//! owner applies those events.

pub mod state;

pub use state::{LoginForm, LoginValues, Resolver, ValidationMode};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifies one field of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    UserId,
    Password,
}

impl FieldKey {
    /// Returns all fields in render order.
    pub const fn all() -> &'static [FieldKey] {
        &[FieldKey::UserId, FieldKey::Password]
    }

    /// Name of the field in the form shape and in error maps.
    pub const fn name(self) -> &'static str {
        match self {
            FieldKey::UserId => "userId",
            FieldKey::Password => "password",
        }
    }

    /// Identifier associating the control with its label and error text.
    pub const fn accessibility_id(self) -> &'static str {
        match self {
            FieldKey::UserId => "email",
            FieldKey::Password => "password",
        }
    }

    /// Identifier of the inline error element rendered under the control.
    pub const fn error_id(self) -> &'static str {
        match self {
            FieldKey::UserId => "email-error",
            FieldKey::Password => "password-error",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Validation messages keyed by field.
///
/// Empty messages are stored but never reported: a field only has an error
/// when its message has content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldKey, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message for `key`, if it is present and non-empty.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0
            .get(&key)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.get(key).is_some()
    }

    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) -> Option<String> {
        self.0.insert(key, message.into())
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<String> {
        self.0.remove(&key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of fields carrying a non-empty message.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates fields with a non-empty message, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(key, message)| (*key, message.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(FieldKey, S)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (FieldKey, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, message)| (key, message.into()))
                .collect(),
        )
    }
}

/// Events emitted by field controls and applied by the form owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited the value of a field.
    Changed(FieldKey, String),
    /// The user committed a field (pressed Enter in it).
    Submitted(FieldKey),
}

/// What a form handle returns when a control registers against a field:
/// the current value and the notification hooks for that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    key: FieldKey,
    value: &'a str,
}

impl<'a> Binding<'a> {
    pub fn new(key: FieldKey, value: &'a str) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> FieldKey {
        self.key
    }

    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Event to emit when the control's content changes.
    pub fn on_change(&self, value: String) -> FormEvent {
        FormEvent::Changed(self.key, value)
    }

    /// Event to emit when the control is committed.
    pub fn on_submit(&self) -> FormEvent {
        FormEvent::Submitted(self.key)
    }
}

/// Caller-owned form state as seen by field renderers.
///
/// Renderers hold the borrow for one render pass and never mutate through it.
pub trait FormHandle {
    /// Returns the binding for `key`, or `None` when the form does not know
    /// the field.
    fn register(&self, key: FieldKey) -> Option<Binding<'_>>;

    /// Current validation messages.
    fn errors(&self) -> &FieldErrors;
}

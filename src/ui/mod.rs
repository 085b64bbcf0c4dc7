// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: they
//! borrow state owned by the application and emit messages that the
//! application applies in its update step.
//!
//! - [`login_fields`] - Identifier and password fields bound to a form handle
//! - [`language_bar`] - Display language switcher
//! - [`styles`] - Centralized styling (buttons, text inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod language_bar;
pub mod login_fields;
pub mod styles;
pub mod theming;

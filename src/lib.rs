// SPDX-License-Identifier: MPL-2.0
//! `iced_login` is a login screen built with the Iced GUI framework.
//!
//! The screen owns its form state; the field renderer in
//! [`ui::login_fields`] only borrows it through the [`form::FormHandle`]
//! trait. Labels and validation messages are localized with Fluent and user
//! preferences are kept in a `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/iced_login/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod ui;

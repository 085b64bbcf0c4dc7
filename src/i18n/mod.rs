// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Translation files embedded at compile time from `assets/i18n/*.ftl`
//! - Runtime language switching
//! - Fallback to the default locale when a translation is missing

pub mod fluent;

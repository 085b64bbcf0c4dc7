// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Fallback language
//! - **Password**: Minimum length bounds used by the login screen schema
//! - **Window**: Default and minimum window sizes

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config file nor the OS yield a
/// supported language.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Password Defaults
// ==========================================================================

/// Default minimum password length enforced by the login screen schema.
pub const DEFAULT_PASSWORD_MIN_LENGTH: u32 = 8;

/// Smallest accepted value for `password_min_length`.
pub const MIN_PASSWORD_MIN_LENGTH: u32 = 1;

/// Largest accepted value for `password_min_length`.
pub const MAX_PASSWORD_MIN_LENGTH: u32 = 128;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 560.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PASSWORD_MIN_LENGTH > 0);
    assert!(MAX_PASSWORD_MIN_LENGTH >= MIN_PASSWORD_MIN_LENGTH);
    assert!(DEFAULT_PASSWORD_MIN_LENGTH >= MIN_PASSWORD_MIN_LENGTH);
    assert!(DEFAULT_PASSWORD_MIN_LENGTH <= MAX_PASSWORD_MIN_LENGTH);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_defaults_are_valid() {
        assert_eq!(DEFAULT_PASSWORD_MIN_LENGTH, 8);
        assert!(DEFAULT_PASSWORD_MIN_LENGTH >= MIN_PASSWORD_MIN_LENGTH);
        assert!(DEFAULT_PASSWORD_MIN_LENGTH <= MAX_PASSWORD_MIN_LENGTH);
    }

    #[test]
    fn default_locale_parses() {
        let parsed = DEFAULT_LOCALE.parse::<unic_langid::LanguageIdentifier>();
        assert!(parsed.is_ok());
    }
}

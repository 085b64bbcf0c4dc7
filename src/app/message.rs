// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::form::FormEvent;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Event forwarded by a login field binding.
    Form(FormEvent),
    /// The submit button was pressed.
    Submit,
    /// Clear every value and error.
    Reset,
    LanguageSelected(LanguageIdentifier),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LOGIN_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

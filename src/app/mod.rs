// SPDX-License-Identifier: MPL-2.0
//! Application root: the login screen that owns the form.
//!
//! `App` owns the [`LoginForm`], localization and persisted preferences.
//! Field rendering is delegated to [`crate::ui::login_fields`], which only
//! borrows the form; every [`FormEvent`] it emits comes back here and is
//! applied against the screen's [`schema::LoginSchema`].

mod message;
pub mod paths;
pub mod schema;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::form::{FieldKey, FormEvent, FormHandle, LoginForm, Resolver};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use schema::LoginSchema;
use std::fmt;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Outcome shown under the submit button. Kept as data so it follows
/// language switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The last submit passed validation.
    Ready { user_id: String },
    /// The last submit was rejected with this many invalid fields.
    Invalid { count: usize },
    /// A notification identified by its i18n key.
    Warning(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    form: LoginForm,
    config: Config,
    /// Explicit config directory; `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    status: Option<Status>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("form", &self.form)
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads preferences and localization, then builds the screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_config(i18n, config, None);
        app.status = config_warning.map(Status::Warning);

        tracing::info!(locale = %app.i18n.current_locale(), "login screen ready");
        (app, Task::none())
    }

    /// Builds the screen from already loaded parts. Preference changes are
    /// saved under `config_dir` when given.
    pub fn with_config(i18n: I18n, config: Config, config_dir: Option<PathBuf>) -> Self {
        Self {
            i18n,
            form: LoginForm::new(config.form.validation_mode),
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            status: None,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// The submit button is enabled once both fields have a value.
    pub fn can_submit(&self) -> bool {
        FieldKey::all()
            .iter()
            .all(|key| !self.form.values().get(*key).is_empty())
    }

    fn schema(&self) -> LoginSchema<'_> {
        LoginSchema::new(&self.i18n, self.config.form.password_min_length())
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(event) => self.handle_form_event(event),
            Message::Submit => self.submit(),
            Message::Reset => {
                self.form.reset();
                self.status = None;
            }
            Message::LanguageSelected(locale) => self.select_language(locale),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            status: self.status.as_ref(),
            can_submit: self.can_submit(),
        })
    }

    fn handle_form_event(&mut self, event: FormEvent) {
        // Enter in the password field submits the whole form.
        let submits = event == FormEvent::Submitted(FieldKey::Password);

        let schema = LoginSchema::new(&self.i18n, self.config.form.password_min_length());
        self.form.apply(event, &schema);

        if submits && self.can_submit() {
            self.submit();
        }
    }

    fn submit(&mut self) {
        let schema = LoginSchema::new(&self.i18n, self.config.form.password_min_length());
        self.status = Some(match self.form.handle_submit(&schema) {
            Ok(values) => Status::Ready {
                user_id: values.user_id.trim().to_string(),
            },
            Err(errors) => Status::Invalid {
                count: errors.len(),
            },
        });
    }

    fn select_language(&mut self, locale: LanguageIdentifier) {
        if !self.i18n.set_locale(locale.clone()) {
            tracing::warn!(locale = %locale, "no translations for selected locale");
            return;
        }

        self.relocalize_errors();

        self.config.general.language = Some(locale.to_string());
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::error!(error = %err, "failed to save language preference");
            self.status = Some(Status::Warning(
                "notification-config-save-error".to_string(),
            ));
        }
    }

    /// Re-resolves the messages currently shown so they follow the new
    /// locale, without surfacing errors on fields that had none.
    fn relocalize_errors(&mut self) {
        let shown: Vec<FieldKey> = self.form.errors().iter().map(|(key, _)| key).collect();
        if shown.is_empty() {
            return;
        }

        let fresh = self.schema().resolve(self.form.values());
        for key in shown {
            match fresh.get(key) {
                Some(message) => self.form.set_error(key, message),
                None => self.form.clear_error(key),
            }
        }
    }
}

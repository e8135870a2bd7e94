//! Theme management module for the application.
//!
//! The active theme lives in [`crate::layout::global_context::AppGlobalContext`];
//! this module only knows how to name, persist and apply themes.

use web_sys::window;

pub mod theme_select;

pub use theme_select::ThemeSelect;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS hooks and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Parse theme from string; unknown values fall back to the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

pub const THEME_STORAGE_KEY: &str = "app-theme";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a value from localStorage.
pub fn load_setting(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Write a value to localStorage; failures are logged and ignored.
pub fn save_setting(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist {key}");
        }
    }
}

/// Apply theme through the `data-theme` attribute on `<body>`.
pub fn apply_theme(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
}

use crate::shared::theme::{apply_theme, load_setting, save_setting, Theme, THEME_STORAGE_KEY};
use leptos::prelude::*;

pub const SIDEBAR_STORAGE_KEY: &str = "app-sidebar";

fn sidebar_setting(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Process-wide UI state, provided once at the root of the app.
///
/// Lifecycle is explicit: [`AppGlobalContext::mount`] restores persisted
/// settings and applies them to the document; [`AppGlobalContext::unmount`]
/// writes them back. Theme and sidebar changes are also saved as they happen,
/// since a CSR root is normally never unmounted.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub theme: RwSignal<Theme>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn mount(&self) {
        let theme = load_setting(THEME_STORAGE_KEY)
            .map(|s| Theme::parse(&s))
            .unwrap_or_default();
        let sidebar_open = load_setting(SIDEBAR_STORAGE_KEY)
            .map(|s| s != "closed")
            .unwrap_or(true);

        self.theme.set(theme);
        self.sidebar_open.set(sidebar_open);
        apply_theme(theme);
        log::debug!("global context mounted: theme={}", theme.as_str());
    }

    pub fn unmount(&self) {
        save_setting(THEME_STORAGE_KEY, self.theme.get_untracked().as_str());
        save_setting(
            SIDEBAR_STORAGE_KEY,
            sidebar_setting(self.sidebar_open.get_untracked()),
        );
        log::debug!("global context unmounted");
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_setting(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }

    /// Flips the sidebar and persists the new state immediately
    pub fn toggle_sidebar(&self) {
        self.toggle_sidebar_with(save_setting);
    }

    fn toggle_sidebar_with(&self, save: impl FnOnce(&str, &str)) {
        let open = !self.sidebar_open.get_untracked();
        self.sidebar_open.set(open);
        save(SIDEBAR_STORAGE_KEY, sidebar_setting(open));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sidebar_persists_each_change() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();
        let mut written = Vec::new();

        ctx.toggle_sidebar_with(|k, v| written.push((k.to_string(), v.to_string())));
        assert!(!ctx.sidebar_open.get_untracked());
        ctx.toggle_sidebar_with(|k, v| written.push((k.to_string(), v.to_string())));
        assert!(ctx.sidebar_open.get_untracked());

        assert_eq!(
            written,
            vec![
                (SIDEBAR_STORAGE_KEY.to_string(), "closed".to_string()),
                (SIDEBAR_STORAGE_KEY.to_string(), "open".to_string()),
            ]
        );
    }
}

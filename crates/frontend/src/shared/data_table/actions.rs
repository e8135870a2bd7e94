//! Row actions that need a user decision before they run.

/// Asks for confirmation and, only when granted, hands the id to `on_delete`.
///
/// `confirm` receives the prompt text and must block until the user answers
/// (the browser's `window.confirm` in the app). Returns whether the delete was
/// requested.
pub fn confirm_delete(
    id: &str,
    label: &str,
    confirm: impl FnOnce(&str) -> bool,
    on_delete: impl FnOnce(String),
) -> bool {
    let prompt = format!("Delete \"{}\"? This cannot be undone.", label);
    if !confirm(&prompt) {
        log::debug!("delete of {id} cancelled by user");
        return false;
    }
    on_delete(id.to_string());
    true
}

/// Blocking browser confirmation dialog; `false` when no window is available
pub fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

//! Blocking Browser Dialogs
//!
//! Thin wrappers over `window.alert` / `window.prompt`, the portal's
//! error and naming surface.

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Returns `None` when the user cancels or leaves the field empty.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    let win = web_sys::window()?;
    win.prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
        .filter(|answer| !answer.trim().is_empty())
}

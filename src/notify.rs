//! User Notifications
//!
//! Blocking alerts plus console logging for failures.

/// Blocking modal message
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Log under `[scope]` and tell the user
pub fn report_error(scope: &str, message: &str) {
    web_sys::console::error_1(&format!("[{}] {}", scope, message).into());
    alert(message);
}

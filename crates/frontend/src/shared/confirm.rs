/// Native browser confirmation. Returns `false` when the window is not
/// available, so a missing answer never counts as consent.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

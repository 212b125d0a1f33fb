/// Ask the user to confirm a destructive action.
///
/// Only the browser has a dialog to ask with; elsewhere this always declines.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("No dialog available, declining: {message}");
        false
    }
}

pub mod storage;
pub mod style;

// blocking notification for provider errors, per the error surfacing
// contract; a missing window only happens outside a browser
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

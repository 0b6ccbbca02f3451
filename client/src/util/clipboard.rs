//! Clipboard write for the copy buttons.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Copy `text` to the system clipboard. Returns `false` when the browser
/// has no clipboard or refuses the write; callers ask the user to copy by hand.
pub async fn write_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(_) => {
                log::warn!("clipboard write refused");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

use api::Confirm;

/// Confirmation through the browser's `window.confirm`. Native builds have no
/// blocking dialog, so the action goes ahead and is logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    #[cfg(target_arch = "wasm32")]
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn confirm(&self, prompt: &str) -> bool {
        tracing::info!("Auto-confirming: {}", prompt);
        true
    }
}

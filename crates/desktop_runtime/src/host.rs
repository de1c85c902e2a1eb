//! Browser environment queries used by the window registry.

use crate::model::Viewport;

/// Reads the current browser viewport size.
///
/// Returns `None` off the browser or when the window dimensions are unavailable.
pub fn browser_viewport() -> Option<Viewport> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok().and_then(|value| value.as_f64())?;
        let height = window.inner_height().ok().and_then(|value| value.as_f64())?;
        return Some(Viewport { width, height });
    }

    #[allow(unreachable_code)]
    None
}

/// Current viewport, or the default when the host cannot report one.
pub fn viewport_or_default() -> Viewport {
    browser_viewport().unwrap_or_default()
}

//! Shared window-manager transition helpers used by the window reducer.

use crate::model::{Viewport, WindowConfig, WindowRect, WindowRegistryState};

/// Hands out the next stacking value and advances the counter.
///
/// Creation and raising share this counter, so every value handed out in a session is unique
/// and above everything handed out (or restored) before it.
pub fn take_stack_slot(state: &mut WindowRegistryState) -> u32 {
    let slot = state.stack_counter;
    state.stack_counter = state.stack_counter.saturating_add(1);
    slot
}

/// Moves `rect` to `(x, y)` while keeping it inside the viewport.
///
/// A window larger than the viewport on an axis is pinned to `0` on that axis.
pub fn clamp_position(rect: WindowRect, x: f64, y: f64, viewport: Viewport) -> WindowRect {
    let max_x = (viewport.width - rect.width).max(0.0);
    let max_y = (viewport.height - rect.height).max(0.0);
    WindowRect {
        x: x.min(max_x).max(0.0),
        y: y.min(max_y).max(0.0),
        ..rect
    }
}

/// Resizes `rect` within `[min, viewport]` per axis, then re-clamps its position.
///
/// The configured minimum wins over a viewport that is smaller than it.
pub fn clamp_resize(
    rect: WindowRect,
    width: f64,
    height: f64,
    config: &WindowConfig,
    viewport: Viewport,
) -> WindowRect {
    let sized = WindowRect {
        width: width.min(viewport.width),
        height: height.min(viewport.height),
        ..rect
    }
    .clamped_min(config.min_width, config.min_height);
    clamp_position(sized, sized.x, sized.y, viewport)
}

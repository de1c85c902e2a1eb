//! Static widget window catalog generated from each widget app's `app.manifest.toml`.

use crate::model::{WidgetKind, WindowConfig, WindowRect};

include!(concat!(env!("OUT_DIR"), "/widget_catalog_generated.rs"));

/// Returns the static window configuration for `kind`.
pub fn window_config(kind: WidgetKind) -> WindowConfig {
    generated_window_config(kind)
}

//! Widget desktop runtime: window registry, layout persistence, and widget store wiring.

pub mod catalog;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod window_manager;

pub use host::{browser_viewport, viewport_or_default};
pub use model::*;
pub use persistence::{load_window_records, persist_windows, WINDOWS_KEY};
pub use reducer::{reduce_windows, ReducerError, RuntimeEffect, WindowAction};
pub use registry::WindowRegistry;
pub use runtime_context::DesktopRuntime;

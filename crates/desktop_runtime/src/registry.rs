//! Persisted window registry: one draggable, resizable window per widget.
//!
//! [`WindowRegistry`] owns the reducer state and executes its effects. Every successful
//! mutation writes the full snapshot to `lifetool-windows` before returning.

use platform_storage::SharedPrefsStore;

use crate::host::browser_viewport;
use crate::model::{Viewport, WidgetKind, WindowConfig, WindowRecord, WindowRegistryState};
use crate::persistence::{load_window_records, persist_windows};
use crate::reducer::{reduce_windows, ReducerError, RuntimeEffect, WindowAction};

/// Window records for every widget plus the viewport used to clamp geometry.
pub struct WindowRegistry {
    state: WindowRegistryState,
    viewport: Viewport,
    store: SharedPrefsStore,
}

impl WindowRegistry {
    /// Restores the registry from `store`. Does not write.
    pub fn load(store: SharedPrefsStore) -> Self {
        let mut state = WindowRegistryState::default();
        let records = load_window_records(store.as_ref());
        // hydration never emits effects or errors
        let _ = reduce_windows(&mut state, WindowAction::Hydrate { records });
        Self {
            state,
            viewport: Viewport::default(),
            store,
        }
    }

    /// Builder-style viewport override.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Replaces the viewport used by later move and resize clamps when no browser viewport
    /// can be read.
    ///
    /// Existing windows are not re-clamped.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The browser's size at call time; the stored viewport off the browser.
    fn current_viewport(&self) -> Viewport {
        browser_viewport().unwrap_or(self.viewport)
    }

    pub fn state(&self) -> &WindowRegistryState {
        &self.state
    }

    pub fn get(&self, kind: WidgetKind) -> Option<&WindowRecord> {
        self.state.get(kind)
    }

    /// Creates the widget's window from `config` if it does not exist yet.
    pub fn initialize(&mut self, kind: WidgetKind, config: WindowConfig) {
        // initialize never targets a missing window
        let _ = self.dispatch(WindowAction::Initialize { kind, config });
    }

    /// Initializes `kind` from its catalog configuration and returns its record.
    pub fn ensure(&mut self, kind: WidgetKind) -> Option<&WindowRecord> {
        self.initialize(kind, kind.window_config());
        self.get(kind)
    }

    pub fn toggle_visibility(&mut self, kind: WidgetKind) -> Result<(), ReducerError> {
        self.dispatch(WindowAction::ToggleVisibility { kind })
    }

    pub fn close(&mut self, kind: WidgetKind) -> Result<(), ReducerError> {
        self.dispatch(WindowAction::Close { kind })
    }

    pub fn bring_to_front(&mut self, kind: WidgetKind) -> Result<(), ReducerError> {
        self.dispatch(WindowAction::BringToFront { kind })
    }

    /// Moves the window to `(x, y)`, clamped to the live viewport.
    pub fn move_to(&mut self, kind: WidgetKind, x: f64, y: f64) -> Result<(), ReducerError> {
        let viewport = self.current_viewport();
        self.dispatch(WindowAction::Move {
            kind,
            x,
            y,
            viewport,
        })
    }

    /// Resizes the window within `config`'s minimum size and the live viewport.
    pub fn resize(
        &mut self,
        kind: WidgetKind,
        width: f64,
        height: f64,
        config: WindowConfig,
    ) -> Result<(), ReducerError> {
        let viewport = self.current_viewport();
        self.dispatch(WindowAction::Resize {
            kind,
            width,
            height,
            config,
            viewport,
        })
    }

    /// Visible windows ordered back to front.
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        self.state.visible_windows()
    }

    /// Removes every window and persists the empty layout.
    pub fn reset(&mut self) {
        let _ = self.dispatch(WindowAction::Reset);
    }

    /// Runs `action` through the reducer and executes the resulting effects.
    pub fn dispatch(&mut self, action: WindowAction) -> Result<(), ReducerError> {
        let effects = reduce_windows(&mut self.state, action)?;
        for effect in effects {
            match effect {
                RuntimeEffect::PersistLayout => {
                    persist_windows(self.store.as_ref(), &self.state);
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for WindowRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowRegistry")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

//! Reducer actions, side-effect intents, and transition logic for the window registry.

use platform_host::generate_unique_id;
use thiserror::Error;

use crate::model::{Viewport, WidgetKind, WindowConfig, WindowRecord, WindowRegistryState};
use crate::window_manager::{clamp_position, clamp_resize, take_stack_slot};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`] to mutate [`WindowRegistryState`].
pub enum WindowAction {
    /// Create the widget's window from `config` unless it already exists.
    Initialize {
        /// Widget whose window should exist.
        kind: WidgetKind,
        /// Default title and geometry for a newly created window.
        config: WindowConfig,
    },
    /// Show a hidden window (raising it) or hide a visible one.
    ToggleVisibility {
        /// Window to toggle.
        kind: WidgetKind,
    },
    /// Hide a window without touching its stacking value.
    Close {
        /// Window to hide.
        kind: WidgetKind,
    },
    /// Raise a window above every other window.
    BringToFront {
        /// Window to raise.
        kind: WidgetKind,
    },
    /// Move a window, keeping it inside the viewport.
    Move {
        /// Window being dragged.
        kind: WidgetKind,
        /// Requested left edge.
        x: f64,
        /// Requested top edge.
        y: f64,
        /// Viewport the window must stay within.
        viewport: Viewport,
    },
    /// Resize a window within its minimum size and the viewport.
    Resize {
        /// Window being resized.
        kind: WidgetKind,
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
        /// Minimum-size source for the widget.
        config: WindowConfig,
        /// Viewport the window must stay within.
        viewport: Viewport,
    },
    /// Replace the registry with restored records.
    Hydrate {
        /// Records read back from storage.
        records: Vec<WindowRecord>,
    },
    /// Drop every window and restart stacking from the baseline.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_windows`] for the registry to execute.
pub enum RuntimeEffect {
    /// Persist the full registry snapshot.
    PersistLayout,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The widget has no window yet; it must be initialized first.
    #[error("no window initialized for widget `{0}`")]
    WindowNotFound(&'static str),
}

/// Applies a [`WindowAction`] to the registry state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action targets a widget whose window has
/// not been initialized. State is left untouched in that case.
pub fn reduce_windows(
    state: &mut WindowRegistryState,
    action: WindowAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        WindowAction::Initialize { kind, config } => {
            if state.windows[kind].is_none() {
                let stack_order = take_stack_slot(state);
                state.windows[kind] = Some(WindowRecord {
                    id: generate_unique_id(),
                    kind,
                    title: config.title.to_string(),
                    rect: config.default_rect,
                    visible: false,
                    stack_order,
                });
                effects.push(RuntimeEffect::PersistLayout);
            }
        }
        WindowAction::ToggleVisibility { kind } => {
            if find_window(state, kind)?.visible {
                find_window_mut(state, kind)?.visible = false;
            } else {
                let stack_order = take_stack_slot(state);
                let window = find_window_mut(state, kind)?;
                window.visible = true;
                window.stack_order = stack_order;
            }
            effects.push(RuntimeEffect::PersistLayout);
        }
        WindowAction::Close { kind } => {
            find_window_mut(state, kind)?.visible = false;
            effects.push(RuntimeEffect::PersistLayout);
        }
        WindowAction::BringToFront { kind } => {
            find_window(state, kind)?;
            let stack_order = take_stack_slot(state);
            find_window_mut(state, kind)?.stack_order = stack_order;
            effects.push(RuntimeEffect::PersistLayout);
        }
        WindowAction::Move {
            kind,
            x,
            y,
            viewport,
        } => {
            let window = find_window_mut(state, kind)?;
            window.rect = clamp_position(window.rect, x, y, viewport);
            effects.push(RuntimeEffect::PersistLayout);
        }
        WindowAction::Resize {
            kind,
            width,
            height,
            config,
            viewport,
        } => {
            let window = find_window_mut(state, kind)?;
            window.rect = clamp_resize(window.rect, width, height, &config, viewport);
            effects.push(RuntimeEffect::PersistLayout);
        }
        WindowAction::Hydrate { records } => {
            *state = WindowRegistryState::from_records(records);
        }
        WindowAction::Reset => {
            *state = WindowRegistryState::default();
            effects.push(RuntimeEffect::PersistLayout);
        }
    }
    Ok(effects)
}

fn find_window(state: &WindowRegistryState, kind: WidgetKind) -> Result<&WindowRecord, ReducerError> {
    state
        .get(kind)
        .ok_or(ReducerError::WindowNotFound(kind.as_str()))
}

fn find_window_mut(
    state: &mut WindowRegistryState,
    kind: WidgetKind,
) -> Result<&mut WindowRecord, ReducerError> {
    state.windows[kind]
        .as_mut()
        .ok_or(ReducerError::WindowNotFound(kind.as_str()))
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::WindowRect;

    fn arb_kind() -> impl Strategy<Value = WidgetKind> {
        prop::sample::select(WidgetKind::ALL.to_vec())
    }

    fn arb_viewport() -> impl Strategy<Value = Viewport> {
        (100.0f64..2_000.0, 100.0f64..1_500.0)
            .prop_map(|(width, height)| Viewport { width, height })
    }

    fn arb_action() -> impl Strategy<Value = WindowAction> {
        let far = -100_000.0f64..100_000.0;
        prop_oneof![
            2 => arb_kind().prop_map(|kind| WindowAction::Initialize {
                kind,
                config: kind.window_config(),
            }),
            3 => arb_kind().prop_map(|kind| WindowAction::ToggleVisibility { kind }),
            1 => arb_kind().prop_map(|kind| WindowAction::Close { kind }),
            2 => arb_kind().prop_map(|kind| WindowAction::BringToFront { kind }),
            3 => (arb_kind(), far.clone(), far, arb_viewport()).prop_map(|(kind, x, y, viewport)| {
                WindowAction::Move { kind, x, y, viewport }
            }),
            2 => (arb_kind(), 0.0f64..5_000.0, 0.0f64..5_000.0, arb_viewport()).prop_map(
                |(kind, width, height, viewport)| WindowAction::Resize {
                    kind,
                    width,
                    height,
                    config: kind.window_config(),
                    viewport,
                }
            ),
        ]
    }

    fn inside(rect: WindowRect, viewport: Viewport) -> bool {
        rect.x >= 0.0
            && rect.x <= (viewport.width - rect.width).max(0.0)
            && rect.y >= 0.0
            && rect.y <= (viewport.height - rect.height).max(0.0)
    }

    proptest! {
        /// Raised windows end up strictly on top, moved and resized windows stay inside the
        /// viewport, stacking values never repeat, and rejected actions change nothing.
        #[test]
        fn window_invariants_hold_after_any_sequence(
            actions in prop::collection::vec(arb_action(), 0..60)
        ) {
            let mut state = WindowRegistryState::default();

            for action in actions {
                let before = state.clone();
                if reduce_windows(&mut state, action.clone()).is_err() {
                    prop_assert_eq!(&state, &before);
                    continue;
                }

                match &action {
                    WindowAction::ToggleVisibility { kind } | WindowAction::BringToFront { kind } => {
                        let window = state.get(*kind).expect("window");
                        let raised = matches!(action, WindowAction::BringToFront { .. })
                            || window.visible;
                        if raised {
                            prop_assert!(
                                state
                                    .records()
                                    .filter(|other| other.kind != *kind)
                                    .all(|other| other.stack_order < window.stack_order),
                                "{:?} not on top after {:?}",
                                kind,
                                action
                            );
                        }
                    }
                    WindowAction::Move { kind, viewport, .. } => {
                        let rect = state.get(*kind).expect("window").rect;
                        prop_assert!(inside(rect, *viewport), "{:?} escapes {:?}", rect, viewport);
                    }
                    WindowAction::Resize { kind, config, viewport, .. } => {
                        let rect = state.get(*kind).expect("window").rect;
                        prop_assert!(rect.width >= config.min_width);
                        prop_assert!(rect.height >= config.min_height);
                        prop_assert!(inside(rect, *viewport), "{:?} escapes {:?}", rect, viewport);
                    }
                    _ => {}
                }

                let mut orders = state.records().map(|w| w.stack_order).collect::<Vec<_>>();
                let count = orders.len();
                orders.sort_unstable();
                orders.dedup();
                prop_assert_eq!(orders.len(), count);
                prop_assert!(state.records().all(|w| w.stack_order < state.stack_counter));
            }
        }
    }
}

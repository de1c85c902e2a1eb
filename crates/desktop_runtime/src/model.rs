use std::collections::BTreeMap;

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

/// Stacking value handed to the first window created in a fresh session.
pub const STACK_ORDER_BASELINE: u32 = 200;
/// Viewport assumed until the host reports the real one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
/// Viewport assumed until the host reports the real one.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Pomodoro,
    Todo,
    Video,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 3] = [Self::Pomodoro, Self::Todo, Self::Video];

    /// Storage key segment used for this widget in the persisted window map.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pomodoro => "pomodoro",
            Self::Todo => "todo",
            Self::Video => "video",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    /// Static window configuration from the widget manifest catalog.
    pub fn window_config(self) -> WindowConfig {
        crate::catalog::window_config(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowRect {
    pub fn clamped_min(self, min_width: f64, min_height: f64) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Per-widget static window settings. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub default_rect: WindowRect,
    pub min_width: f64,
    pub min_height: f64,
}

/// Persisted window state for one widget.
///
/// Field names on the wire match the `lifetool-windows` storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub title: String,
    #[serde(flatten)]
    pub rect: WindowRect,
    #[serde(rename = "isVisible")]
    pub visible: bool,
    #[serde(rename = "zIndex")]
    pub stack_order: u32,
}

/// Persisted shape of the registry: widget key to record.
pub type WindowSnapshot = BTreeMap<String, WindowRecord>;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRegistryState {
    pub windows: EnumMap<WidgetKind, Option<WindowRecord>>,
    /// Next stacking value to hand out. See [`crate::window_manager::take_stack_slot`].
    pub stack_counter: u32,
}

impl Default for WindowRegistryState {
    fn default() -> Self {
        Self {
            windows: EnumMap::default(),
            stack_counter: STACK_ORDER_BASELINE,
        }
    }
}

impl WindowRegistryState {
    pub fn get(&self, kind: WidgetKind) -> Option<&WindowRecord> {
        self.windows[kind].as_ref()
    }

    pub fn records(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values().flatten()
    }

    /// Visible windows ordered back to front.
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        let mut visible = self.records().filter(|w| w.visible).collect::<Vec<_>>();
        visible.sort_by_key(|w| w.stack_order);
        visible
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        self.windows
            .iter()
            .filter_map(|(kind, record)| {
                record
                    .as_ref()
                    .map(|record| (kind.as_str().to_string(), record.clone()))
            })
            .collect()
    }

    /// Rebuilds registry state from restored records.
    ///
    /// The stacking counter resumes at one past the highest restored value (never below the
    /// baseline), so windows created later in the session never collide with restored ones.
    pub fn from_records(records: impl IntoIterator<Item = WindowRecord>) -> Self {
        let mut state = Self::default();
        for record in records {
            state.stack_counter = state
                .stack_counter
                .max(record.stack_order.saturating_add(1));
            let kind = record.kind;
            state.windows[kind] = Some(record);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn record(kind: WidgetKind, stack_order: u32) -> WindowRecord {
        WindowRecord {
            id: format!("id-{}", kind.as_str()),
            kind,
            title: kind.as_str().to_string(),
            rect: WindowRect {
                x: 10.0,
                y: 20.0,
                width: 300.0,
                height: 200.0,
            },
            visible: true,
            stack_order,
        }
    }

    #[test]
    fn window_record_uses_storage_field_names() {
        let value = serde_json::to_value(record(WidgetKind::Todo, 201)).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "id-todo",
                "type": "todo",
                "title": "todo",
                "x": 10.0,
                "y": 20.0,
                "width": 300.0,
                "height": 200.0,
                "isVisible": true,
                "zIndex": 201
            })
        );
    }

    #[test]
    fn widget_keys_round_trip() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_key(kind.as_str()), Some(kind));
        }
        assert_eq!(WidgetKind::from_key("calculator"), None);
    }

    #[test]
    fn from_records_resumes_counter_above_restored_values() {
        let state = WindowRegistryState::from_records([
            record(WidgetKind::Todo, 240),
            record(WidgetKind::Video, 205),
        ]);
        assert_eq!(state.stack_counter, 241);
        assert!(state.get(WidgetKind::Pomodoro).is_none());

        let low = WindowRegistryState::from_records([record(WidgetKind::Todo, 3)]);
        assert_eq!(low.stack_counter, STACK_ORDER_BASELINE);
    }

    #[test]
    fn visible_windows_are_ordered_back_to_front() {
        let mut hidden = record(WidgetKind::Pomodoro, 300);
        hidden.visible = false;
        let state = WindowRegistryState::from_records([
            record(WidgetKind::Todo, 250),
            record(WidgetKind::Video, 210),
            hidden,
        ]);

        let order = state
            .visible_windows()
            .into_iter()
            .map(|w| w.kind)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![WidgetKind::Video, WidgetKind::Todo]);
    }

    #[test]
    fn snapshot_is_keyed_by_widget() {
        let state = WindowRegistryState::from_records([record(WidgetKind::Video, 201)]);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.keys().collect::<Vec<_>>(), vec!["video"]);
    }
}

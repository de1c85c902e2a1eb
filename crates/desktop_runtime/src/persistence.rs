//! Window layout persistence for boot hydration and per-action saves.

use leptos::logging;
use platform_storage::{generate_unique_id, load_or, save_logged, PrefsStore};
use serde_json::{Map, Value};

use crate::model::{WidgetKind, WindowRecord, WindowRegistryState};

/// Storage key holding the window map.
pub const WINDOWS_KEY: &str = "lifetool-windows";

/// Loads persisted window records.
///
/// Entries under unknown widget keys or with an unreadable shape are skipped. A record whose
/// `id` is missing or not a string gets a freshly generated one. The widget kind always comes
/// from the map key, and sizes below the widget's configured minimum are raised to it.
pub fn load_window_records<S: PrefsStore + ?Sized>(store: &S) -> Vec<WindowRecord> {
    let raw = load_or(store, WINDOWS_KEY, Map::<String, Value>::new);
    raw.into_iter()
        .filter_map(|(key, value)| restore_record(&key, value))
        .collect()
}

fn restore_record(key: &str, value: Value) -> Option<WindowRecord> {
    let Some(kind) = WidgetKind::from_key(key) else {
        logging::warn!("skipping persisted window with unknown widget `{key}`");
        return None;
    };
    let Value::Object(mut fields) = value else {
        logging::warn!("skipping persisted window `{key}`: not an object");
        return None;
    };
    if !matches!(fields.get("id"), Some(Value::String(_))) {
        fields.insert("id".to_string(), Value::String(generate_unique_id()));
    }
    fields.insert("type".to_string(), Value::String(kind.as_str().to_string()));

    match serde_json::from_value::<WindowRecord>(Value::Object(fields)) {
        Ok(mut record) => {
            let config = kind.window_config();
            record.rect = record.rect.clamped_min(config.min_width, config.min_height);
            Some(record)
        }
        Err(err) => {
            logging::warn!("skipping persisted window `{key}`: {err}");
            None
        }
    }
}

/// Saves the full registry snapshot. Returns whether the write went through.
pub fn persist_windows<S: PrefsStore + ?Sized>(store: &S, state: &WindowRegistryState) -> bool {
    save_logged(store, WINDOWS_KEY, &state.snapshot())
}

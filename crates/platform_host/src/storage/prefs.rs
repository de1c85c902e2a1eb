//! Lightweight preference storage contracts and adapters.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for preference values stored as text per key.
///
/// Calls are synchronous: the browser backing (`localStorage`) is synchronous and widget stores
/// persist before returning from each mutation.
pub trait PrefsStore {
    /// Loads the raw string stored under `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw string under `key`.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String>;

    /// Deletes a preference key.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

/// Shared handle to the preference store used by every widget store in a session.
pub type SharedPrefsStore = Rc<dyn PrefsStore>;

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a store handed to a widget can be inspected (or
/// reopened by a second widget instance) from the outside.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryPrefsStore {
    /// Makes every subsequent save/delete fail, mimicking a full or disabled browser store.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Returns the raw value stored under `key` without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Writes a raw value directly, bypassing simulated write failures.
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        self.inner.borrow_mut().insert(key.into(), raw.into());
    }

    fn check_writable(&self) -> Result<(), String> {
        if self.fail_writes.get() {
            Err("storage quota exceeded".to_string())
        } else {
            Ok(())
        }
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        self.check_writable()?;
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.check_writable()?;
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct PrefThing {
        volume: f64,
    }

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.delete_pref("pref.key").expect("delete");
        assert_eq!(store_obj.load_pref("pref.key").expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        store.save_pref("shared", "1").expect("save");
        assert_eq!(other.raw("shared"), Some("1".to_string()));
    }

    #[test]
    fn failing_writes_leave_previous_value_untouched() {
        let store = MemoryPrefsStore::default();
        store.save_pref("k", "old").expect("save");
        store.set_fail_writes(true);

        let err = store.save_pref("k", "new").expect_err("write should fail");
        assert!(err.contains("quota"));
        assert!(store.delete_pref("k").is_err());
        assert_eq!(store.load_pref("k").expect("load"), Some("old".to_string()));

        store.set_fail_writes(false);
        store.save_pref("k", "new").expect("save");
        assert_eq!(store.raw("k"), Some("new".to_string()));
    }

    #[test]
    fn typed_pref_helpers_round_trip() {
        let store = MemoryPrefsStore::default();
        save_pref_with(&store, "video", &PrefThing { volume: 0.5 }).expect("save typed pref");

        let loaded: Option<PrefThing> = load_pref_with(&store, "video").expect("load typed pref");
        assert_eq!(loaded, Some(PrefThing { volume: 0.5 }));
    }

    #[test]
    fn typed_load_reports_corrupt_json() {
        let store = MemoryPrefsStore::default();
        store.insert_raw("video", "{not json");
        let err = load_pref_with::<_, PrefThing>(&store, "video").expect_err("corrupt");
        assert!(!err.is_empty());
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "{}").expect("save");
        store_obj.delete_pref("k").expect("delete");
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
    }
}

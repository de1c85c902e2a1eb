use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};
use serde::{de::DeserializeOwned, Serialize};

/// Loads a typed value stored under `key`, falling back when it is absent or unreadable.
///
/// Storage and deserialization failures are logged with the key as context.
pub fn load_or<S, T>(store: &S, key: &str, fallback: impl FnOnce() -> T) -> T
where
    S: PrefsStore + ?Sized,
    T: DeserializeOwned,
{
    match load_pref_with(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => fallback(),
        Err(err) => {
            logging::warn!("load `{key}` failed: {err}");
            fallback()
        }
    }
}

/// Loads the raw (non-JSON) string stored under `key`.
pub fn load_raw_or<S: PrefsStore + ?Sized>(store: &S, key: &str, fallback: &str) -> String {
    match store.load_pref(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => fallback.to_string(),
        Err(err) => {
            logging::warn!("load `{key}` failed: {err}");
            fallback.to_string()
        }
    }
}

/// Serializes and saves `value` under `key`, logging any failure.
///
/// Returns whether the write went through.
pub fn save_logged<S, T>(store: &S, key: &str, value: &T) -> bool
where
    S: PrefsStore + ?Sized,
    T: Serialize,
{
    match save_pref_with(store, key, value) {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("persist `{key}` failed: {err}");
            false
        }
    }
}

/// Saves a raw (non-JSON) string under `key`, logging any failure.
pub fn save_raw_logged<S: PrefsStore + ?Sized>(store: &S, key: &str, raw: &str) -> bool {
    match store.save_pref(key, raw) {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("persist `{key}` failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn load_or_uses_fallback_for_missing_and_corrupt_values() {
        let store = MemoryPrefsStore::default();
        assert_eq!(load_or(&store, "missing", || 7_u32), 7);

        store.insert_raw("corrupt", "{{{");
        assert_eq!(load_or(&store, "corrupt", || 9_u32), 9);

        store.insert_raw("ok", "42");
        assert_eq!(load_or(&store, "ok", || 0_u32), 42);
    }

    #[test]
    fn save_logged_reports_failure_without_panicking() {
        let store = MemoryPrefsStore::default();
        assert!(save_logged(&store, "k", &[1, 2, 3]));
        assert_eq!(store.raw("k"), Some("[1,2,3]".to_string()));

        store.set_fail_writes(true);
        assert!(!save_logged(&store, "k", &[4]));
        assert_eq!(store.raw("k"), Some("[1,2,3]".to_string()));
    }

    #[test]
    fn raw_helpers_skip_json_encoding() {
        let store = MemoryPrefsStore::default();
        assert_eq!(load_raw_or(&store, "tag", "all"), "all");
        assert!(save_raw_logged(&store, "tag", "work"));
        assert_eq!(store.raw("tag"), Some("work".to_string()));
        assert_eq!(load_raw_or(&store, "tag", "all"), "work");
    }
}

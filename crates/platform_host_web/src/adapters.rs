use std::rc::Rc;

use platform_host::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, SharedPrefsStore};

use crate::WebPrefsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters (`window.localStorage`).
    Browser,
    /// Process-local in-memory adapters for native builds and tests.
    Memory,
    /// Placeholder adapters that persist nothing.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(all(not(feature = "desktop-host-stub"), target_arch = "wasm32"))]
    {
        HostStrategy::Browser
    }

    #[cfg(all(not(feature = "desktop-host-stub"), not(target_arch = "wasm32")))]
    {
        HostStrategy::Memory
    }
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// In-memory preferences shared by every adapter created on this thread.
    Memory(MemoryPrefsStore),
    /// No-op fallback.
    Stub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Memory(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw),
            Self::Memory(store) => store.save_pref(key, raw),
            Self::Stub(store) => store.save_pref(key, raw),
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Memory(store) => store.delete_pref(key),
            Self::Stub(store) => store.delete_pref(key),
        }
    }
}

thread_local! {
    static PROCESS_PREFS: MemoryPrefsStore = MemoryPrefsStore::default();
}

/// Builds the preference adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Memory => PrefsStoreAdapter::Memory(PROCESS_PREFS.with(Clone::clone)),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

/// Builds the preference adapter as a shared handle for widget stores.
pub fn shared_prefs_store() -> SharedPrefsStore {
    Rc::new(prefs_store())
}

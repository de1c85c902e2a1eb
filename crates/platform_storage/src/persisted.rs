use platform_host::SharedPrefsStore;
use serde::{de::DeserializeOwned, Serialize};

use crate::{load_or, save_logged};

/// A value bound to a storage key.
///
/// Mutations go through [`Persisted::update`] or [`Persisted::set`], which commit the new value
/// to storage before returning and then notify subscribed listeners. There is no implicit change
/// detection: reading through [`Persisted::get`] never writes.
pub struct Persisted<T> {
    key: String,
    value: T,
    store: SharedPrefsStore,
    listeners: Vec<Box<dyn Fn(&T)>>,
}

impl<T: Serialize + DeserializeOwned> Persisted<T> {
    /// Loads the value stored under `key`, or `fallback()` when absent or unreadable.
    pub fn load(
        store: SharedPrefsStore,
        key: impl Into<String>,
        fallback: impl FnOnce() -> T,
    ) -> Self {
        let key = key.into();
        let value = load_or(&*store, &key, fallback);
        Self {
            key,
            value,
            store,
            listeners: Vec::new(),
        }
    }

    /// Binds an already-built value to `key` without reading or writing storage.
    pub fn with_value(store: SharedPrefsStore, key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
            store,
            listeners: Vec::new(),
        }
    }

    /// Storage key this value is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutates the value, commits it, and returns whatever `mutate` returned.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let out = mutate(&mut self.value);
        self.commit();
        out
    }

    /// Replaces the value and commits it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.commit();
    }

    /// Writes the current value to storage. Returns whether the write went through.
    pub fn save(&self) -> bool {
        save_logged(&*self.store, &self.key, &self.value)
    }

    /// Registers a listener that runs after every committed mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&self) {
        self.save();
        for listener in &self.listeners {
            listener(&self.value);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

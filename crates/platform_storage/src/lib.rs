//! Best-effort persistence helpers for widget state.
//!
//! Every widget store persists through this crate. Reads and writes go through a
//! [`PrefsStore`](platform_host::PrefsStore) and never fail outward: load errors (missing
//! storage, corrupt JSON) fall back to the caller's default, and save errors are logged and
//! dropped so the in-memory state stays authoritative for the session.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use platform_storage::{MemoryPrefsStore, Persisted, SharedPrefsStore};
//!
//! let store: SharedPrefsStore = Rc::new(MemoryPrefsStore::default());
//! let mut counter = Persisted::load(store.clone(), "counter", || 0_u32);
//! counter.update(|n| *n += 3);
//!
//! let reopened = Persisted::load(store, "counter", || 0_u32);
//! assert_eq!(*reopened.get(), 3);
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod logged;
mod persisted;

pub use logged::{load_or, load_raw_or, save_logged, save_raw_logged};
pub use persisted::Persisted;
pub use platform_host::{
    generate_unique_id, load_pref_with, save_pref_with, unix_time_ms_now, utc_now,
    MemoryPrefsStore, NoopPrefsStore, PrefsStore, SharedPrefsStore,
};

/// Returns the host-selected preference store (`localStorage` in the browser).
pub fn local_prefs_store() -> SharedPrefsStore {
    platform_host_web::shared_prefs_store()
}

//! Typed host-domain contracts shared by the desktop runtime, widget apps, and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the synchronous
//! key/value preference contract used for all widget persistence, time helpers, and the
//! identifier generator, while the concrete `localStorage` adapter lives in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod id;
pub mod storage;
pub mod time;

pub use id::generate_unique_id;
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
    SharedPrefsStore,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now, utc_now};

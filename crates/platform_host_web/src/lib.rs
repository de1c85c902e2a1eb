//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The only host service the widget desktop needs is the preference store, backed by
//! `window.localStorage`. Non-`wasm32` builds fall back to a process-local in-memory store so
//! the same wiring runs in native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{
    prefs_store, selected_host_strategy, shared_prefs_store, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;

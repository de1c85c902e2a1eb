//! Storage contracts for host-persisted widget state.

pub mod prefs;

//! Ambient background video widget state.
//!
//! A fixed catalog of looping videos and streams, plus the selected video, play state, and
//! volume persisted under `lifetool-video`.

mod catalog;
mod store;

pub use catalog::{find_source, VideoKind, VideoSource, DEFAULT_VIDEO_ID, VIDEO_SOURCES};
pub use store::{clamp_volume, AmbientVideoStore, VideoState, VIDEO_KEY};

//! Persisted ambient video selection and playback settings.

use platform_storage::{Persisted, SharedPrefsStore};
use serde::{Deserialize, Serialize};

use crate::catalog::{find_source, VideoSource, DEFAULT_VIDEO_ID, VIDEO_SOURCES};

/// Storage key holding the video state.
pub const VIDEO_KEY: &str = "lifetool-video";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredVideoState")]
pub struct VideoState {
    pub current_video_id: String,
    pub is_playing: bool,
    /// Always within `0.0..=1.0`.
    pub volume: f64,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            current_video_id: DEFAULT_VIDEO_ID.to_string(),
            is_playing: true,
            volume: 0.0,
        }
    }
}

/// Lenient read shape: any missing, null, or empty field falls back to the default.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredVideoState {
    #[serde(default)]
    current_video_id: Option<String>,
    #[serde(default)]
    is_playing: Option<bool>,
    #[serde(default)]
    volume: Option<f64>,
}

impl From<StoredVideoState> for VideoState {
    fn from(stored: StoredVideoState) -> Self {
        let defaults = Self::default();
        Self {
            current_video_id: stored
                .current_video_id
                .filter(|id| !id.is_empty())
                .unwrap_or(defaults.current_video_id),
            is_playing: stored.is_playing.unwrap_or(defaults.is_playing),
            volume: clamp_volume(stored.volume.unwrap_or(defaults.volume)),
        }
    }
}

/// Clamps to `0.0..=1.0`; NaN becomes `0.0`.
pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

pub struct AmbientVideoStore {
    state: Persisted<VideoState>,
}

impl AmbientVideoStore {
    pub fn load(store: SharedPrefsStore) -> Self {
        Self {
            state: Persisted::load(store, VIDEO_KEY, VideoState::default),
        }
    }

    pub fn state(&self) -> &VideoState {
        self.state.get()
    }

    /// The catalog entry being shown, if the stored id is still in the catalog.
    pub fn current_video(&self) -> Option<&'static VideoSource> {
        find_source(&self.state().current_video_id)
    }

    pub fn sources(&self) -> &'static [VideoSource] {
        &VIDEO_SOURCES
    }

    /// Stores `id` as the current video. Ids outside the catalog are kept as is;
    /// `current_video` reports them as `None`.
    pub fn select(&mut self, id: &str) {
        self.state
            .update(|state| state.current_video_id = id.to_string());
    }

    pub fn toggle_play(&mut self) {
        self.state.update(|state| state.is_playing = !state.is_playing);
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.state.update(|state| state.volume = clamp_volume(volume));
    }

    pub fn reset(&mut self) {
        self.state.set(VideoState::default());
    }

    /// Runs `listener` after every committed change.
    pub fn subscribe(&mut self, listener: impl Fn(&VideoState) + 'static) {
        self.state.subscribe(listener);
    }
}

impl std::fmt::Debug for AmbientVideoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbientVideoStore")
            .field("state", self.state())
            .finish_non_exhaustive()
    }
}

/// Where a background video plays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    /// Direct media file served with the app.
    File { url: &'static str },
    /// Embedded stream identified by its provider video id.
    Stream { video_id: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSource {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: VideoKind,
}

pub const DEFAULT_VIDEO_ID: &str = "forest-loop";

pub static VIDEO_SOURCES: [VideoSource; 5] = [
    VideoSource {
        id: "forest-loop",
        name: "Forest Loop",
        kind: VideoKind::File {
            url: "/videos/forest-loop.mp4",
        },
    },
    VideoSource {
        id: "rain-loop",
        name: "Rain Loop",
        kind: VideoKind::File {
            url: "/videos/rain-loop.mp4",
        },
    },
    VideoSource {
        id: "fireplace-loop",
        name: "Fireplace Loop",
        kind: VideoKind::File {
            url: "/videos/fireplace-loop.mp4",
        },
    },
    VideoSource {
        id: "lofi-study",
        name: "Lofi Study",
        kind: VideoKind::Stream {
            video_id: "jfKfPfyJRdk",
        },
    },
    VideoSource {
        id: "peaceful-nature",
        name: "Peaceful Nature",
        kind: VideoKind::Stream {
            video_id: "36YnV9STBqc",
        },
    },
];

pub fn find_source(id: &str) -> Option<&'static VideoSource> {
    VIDEO_SOURCES.iter().find(|source| source.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_default_exists() {
        let ids = VIDEO_SOURCES.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), VIDEO_SOURCES.len());
        assert!(find_source(DEFAULT_VIDEO_ID).is_some());
        assert!(find_source("missing").is_none());
    }

    #[test]
    fn streams_carry_provider_ids() {
        assert_eq!(
            find_source("lofi-study").map(|s| s.kind),
            Some(VideoKind::Stream {
                video_id: "jfKfPfyJRdk"
            })
        );
    }
}

use regex::Regex;
use serde::{Deserialize, Serialize};
use specta::Type;
use std::sync::LazyLock;

static VIDEO_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(mp4|webm|ogg)$").unwrap());

const LOCAL_VIDEO_DIR: &str = "/videos/";

/// How the detail view must play a demonstration video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// A media file played by a native video element
    File,
    /// A third-party player page (YouTube embed and the like)
    Embed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct DemoVideo {
    pub url: String,
    pub kind: VideoKind,
}

impl DemoVideo {
    /// Pick the script's own video, or `default_url` when the field is
    /// absent. A present but empty url is kept as is and plays nothing.
    pub fn resolve(video_url: Option<&str>, default_url: &str) -> Self {
        let url = video_url.unwrap_or(default_url);

        Self {
            url: url.to_string(),
            kind: Self::classify(url),
        }
    }

    pub fn classify(url: &str) -> VideoKind {
        if VIDEO_FILE_RE.is_match(url) || url.starts_with(LOCAL_VIDEO_DIR) {
            VideoKind::File
        } else {
            VideoKind::Embed
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == VideoKind::File
    }
}

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const DEFAULT_EMBED_BASE: &str = "https://www.youtube.com/embed";

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)")
        .expect("valid video id pattern")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VideoError {
    #[error("no video id found in {0:?}")]
    Unrecognized(String),
}

/// Pull the video id out of a `youtube.com/watch?v=ID` or `youtu.be/ID` link.
pub fn extract_video_id(url: &str) -> Result<String, VideoError> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| VideoError::Unrecognized(url.to_string()))
}

pub fn embed_url(base: &str, video_id: &str) -> String {
    format!("{}/{video_id}?autoplay=1", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_stops_at_ampersand() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=5").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(extract_video_id("https://youtu.be/xyz789").unwrap(), "xyz789");
    }

    #[test]
    fn test_short_link_stops_at_query_and_fragment() {
        assert_eq!(extract_video_id("https://youtu.be/xyz789?si=foo").unwrap(), "xyz789");
        assert_eq!(extract_video_id("https://youtu.be/xyz789#t=3").unwrap(), "xyz789");
    }

    #[test]
    fn test_unrelated_url_fails() {
        assert_eq!(
            extract_video_id("https://example.com/notavideo"),
            Err(VideoError::Unrecognized("https://example.com/notavideo".to_string()))
        );
    }

    #[test]
    fn test_watch_without_id_fails() {
        assert!(extract_video_id("https://www.youtube.com/watch?v=").is_err());
    }

    #[test]
    fn test_embed_url_format() {
        assert_eq!(
            embed_url(DEFAULT_EMBED_BASE, "abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1"
        );
        assert_eq!(
            embed_url("https://player.example/embed/", "id"),
            "https://player.example/embed/id?autoplay=1"
        );
    }
}

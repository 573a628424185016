//! Media-kind discrimination for post URLs.
//!
//! Posts do not carry an explicit type column. A post is a video or an
//! image depending on which logical CDN folder its media URL points into
//! (`.../videos/...` or `.../images/...`), and every consumer derives the
//! kind from the URL the same way. This module is the single home for that
//! derivation so the substring rule lives in exactly one place.

use serde::{Deserialize, Serialize};

/// The two logical media buckets a post can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Derive the media kind from a CDN URL.
    ///
    /// Returns `None` when the URL points into neither folder. The check is
    /// a plain substring match on the path, matching how uploads are
    /// foldered on the CDN side.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.contains("/videos") {
            Some(MediaKind::Video)
        } else if url.contains("/images") {
            Some(MediaKind::Image)
        } else {
            None
        }
    }

    /// Whether the given media URL belongs to this kind.
    pub fn matches_url(self, url: &str) -> bool {
        Self::from_url(url) == Some(self)
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(MediaKind::Video),
            "image" => Ok(MediaKind::Image),
            other => Err(format!("Unknown media kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_url_is_video() {
        let url = "https://cdn.example.com/reelshare/videos/clip_abc.mp4";
        assert_eq!(MediaKind::from_url(url), Some(MediaKind::Video));
        assert!(MediaKind::Video.matches_url(url));
        assert!(!MediaKind::Image.matches_url(url));
    }

    #[test]
    fn test_image_url_is_image() {
        let url = "https://cdn.example.com/reelshare/images/photo_xyz.jpg";
        assert_eq!(MediaKind::from_url(url), Some(MediaKind::Image));
        assert!(MediaKind::Image.matches_url(url));
    }

    #[test]
    fn test_unbucketed_url_is_neither() {
        let url = "https://cdn.example.com/reelshare/other/file.bin";
        assert_eq!(MediaKind::from_url(url), None);
        assert!(!MediaKind::Video.matches_url(url));
        assert!(!MediaKind::Image.matches_url(url));
    }

    #[test]
    fn test_wire_name_round_trip() {
        let kind: MediaKind = "video".parse().unwrap();
        assert_eq!(kind, MediaKind::Video);
        let kind: MediaKind = "image".parse().unwrap();
        assert_eq!(kind, MediaKind::Image);
        assert!("gif".parse::<MediaKind>().is_err());
    }
}

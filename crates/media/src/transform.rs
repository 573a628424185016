//! URL-based transformation descriptors.

use serde::{Deserialize, Serialize};

/// Transformation applied by the CDN when serving a file.
///
/// Encoded as the `tr` query parameter (`tr=h-...,w-...,q-...`), which the
/// CDN resolves at delivery time. Defaults match what the upload form
/// requests for portrait reels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub height: i32,
    pub width: i32,
    pub quality: i32,
}

impl Default for Transformation {
    fn default() -> Self {
        Self {
            height: 1920,
            width: 1080,
            quality: 100,
        }
    }
}

impl Transformation {
    /// Append this transformation to a delivery URL.
    ///
    /// Uses `?tr=` or `&tr=` depending on whether the URL already carries a
    /// query string.
    pub fn apply_to(&self, url: &str) -> String {
        let sep = if url.contains('?') { '&' } else { '?' };
        format!(
            "{url}{sep}tr=h-{},w-{},q-{}",
            self.height, self.width, self.quality
        )
    }
}

//! Caption modes and their fixed instruction strings.

use serde::{Deserialize, Serialize};

/// What kind of text the model is asked to write for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionMode {
    Title,
    Description,
}

impl CaptionMode {
    /// The instruction string sent as the system instruction for this mode.
    pub fn instruction(self) -> &'static str {
        match self {
            CaptionMode::Title => "Write a 5 to 6 word genuine title related to given image",
            CaptionMode::Description => {
                "Write a 1 or 2 line genuine description related to given image"
            }
        }
    }
}

impl std::str::FromStr for CaptionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(CaptionMode::Title),
            "description" => Ok(CaptionMode::Description),
            other => Err(format!("Unknown caption mode: {other}")),
        }
    }
}

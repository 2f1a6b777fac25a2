use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Category a story is filed under. Unknown catalog values land in `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryKind {
    #[serde(alias = "photo-collection")]
    Photos,
    Essay,
    Story,
    #[default]
    #[serde(other)]
    Other,
}

impl StoryKind {
    pub fn label(self) -> &'static str {
        match self {
            StoryKind::Photos => "PHOTOS",
            StoryKind::Essay => "ESSAY",
            StoryKind::Story => "STORY",
            StoryKind::Other => "OTHER",
        }
    }

    /// Stroke/fill color of the end-of-story spiral.
    pub fn accent(self) -> &'static str {
        match self {
            StoryKind::Photos => "#f59e0b",
            StoryKind::Story => "#3b82f6",
            StoryKind::Essay => "#10b981",
            StoryKind::Other => "#a8a29e",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        content: String,
    },
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Any block type this build does not know how to draw.
    #[serde(other)]
    Unsupported,
}

impl ContentBlock {
    pub fn text(content: impl Into<String>) -> Self {
        ContentBlock::Text {
            content: content.into(),
        }
    }

    pub fn image(src: impl Into<String>, caption: Option<&str>) -> Self {
        ContentBlock::Image {
            src: src.into(),
            caption: caption.map(str::to_string),
        }
    }

    /// Caption to draw under an image, `None` when absent or blank.
    pub fn visible_caption(&self) -> Option<&str> {
        match self {
            ContentBlock::Image {
                caption: Some(caption),
                ..
            } if !caption.is_empty() => Some(caption.as_str()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: StoryKind,
    pub cover_image: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Story {
    /// First line of the first text block, or an empty string when there is none.
    pub fn excerpt(&self) -> &str {
        self.content
            .iter()
            .find_map(|block| match block {
                ContentBlock::Text { content } => Some(content.as_str()),
                _ => None,
            })
            .and_then(|content| content.lines().next())
            .unwrap_or("")
    }
}

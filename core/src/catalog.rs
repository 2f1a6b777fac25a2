use std::collections::HashSet;

use serde::Deserialize;

use crate::story::{Story, StoryId};

/// Catalog selected by the build script (`STORY_CATALOG_PATH`, default `stories/catalog.toml`).
pub const STORY_CATALOG_TOML: &str = include_str!(env!("NAUTILUS_STORY_CATALOG"));

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("story catalog parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate story id '{0}'")]
    DuplicateId(StoryId),
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    stories: Vec<Story>,
}

pub fn load_stories() -> Result<Vec<Story>, CatalogError> {
    parse_stories(STORY_CATALOG_TOML)
}

pub fn parse_stories(source: &str) -> Result<Vec<Story>, CatalogError> {
    let catalog: CatalogFile = toml::from_str(source)?;
    let mut seen = HashSet::new();
    for story in &catalog.stories {
        if !seen.insert(&story.id) {
            return Err(CatalogError::DuplicateId(story.id.clone()));
        }
    }
    Ok(catalog.stories)
}

pub fn story_by_id<'a>(stories: &'a [Story], id: &StoryId) -> Option<&'a Story> {
    stories.iter().find(|story| &story.id == id)
}

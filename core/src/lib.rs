pub mod catalog;
pub mod reveal;
pub mod scroll;
pub mod site;
pub mod story;
pub mod view;

pub use catalog::{load_stories, parse_stories, story_by_id, CatalogError};
pub use reveal::{Reveal, BLOCK_REVEAL_THRESHOLD, CARD_REVEAL_THRESHOLD};
pub use scroll::ScrollMetrics;
pub use site::SiteConfig;
pub use story::{ContentBlock, Story, StoryId, StoryKind};
pub use view::{Navigation, Transition, View, ViewportCommand};

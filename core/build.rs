use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const SITE_KEYS: &[&str] = &[
    "NAUTILUS_OWNER_NAME",
    "NAUTILUS_TAGLINE",
    "NAUTILUS_MAJOR",
    "NAUTILUS_EMAIL",
    "NAUTILUS_INSTAGRAM_URL",
    "NAUTILUS_GITHUB_URL",
    "NAUTILUS_AVATAR_SRC",
];

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    stories: Vec<StoryEntry>,
}

#[derive(Deserialize)]
struct StoryEntry {
    id: String,
    title: String,
    cover_image: String,
    #[serde(default)]
    content: Vec<BlockEntry>,
}

#[derive(Deserialize)]
struct BlockEntry {
    #[serde(rename = "type")]
    kind: String,
    src: Option<String>,
    content: Option<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=STORY_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    forward_site_config();

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read story catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse story catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.stories.is_empty() {
        println!(
            "cargo:warning=story catalog {} has no entries, the home page will show the empty state",
            catalog_path.display()
        );
    }

    validate_entries(&catalog.stories, &catalog_path);

    println!(
        "cargo:rustc-env=NAUTILUS_STORY_CATALOG={}",
        catalog_path.display()
    );
}

/// `.env` values only live in this process; hand them to rustc so `option_env!` sees them.
fn forward_site_config() {
    for key in SITE_KEYS {
        for name in [key.to_string(), format!("TRUNK_PUBLIC_{key}")] {
            println!("cargo:rerun-if-env-changed={name}");
            if let Ok(value) = env::var(&name) {
                println!("cargo:rustc-env={name}={}", value.replace('\n', " "));
            }
        }
    }
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("STORY_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("stories/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn validate_entries(entries: &[StoryEntry], catalog_path: &Path) {
    let mut ids = HashSet::new();

    for entry in entries {
        if entry.id.trim().is_empty() {
            panic!("story id cannot be empty in {}", catalog_path.display());
        }
        if entry.title.trim().is_empty() {
            panic!(
                "story '{}' has an empty title in {}",
                entry.id,
                catalog_path.display()
            );
        }
        validate_image_src(&entry.id, &entry.cover_image, catalog_path);
        for (index, block) in entry.content.iter().enumerate() {
            match block.kind.as_str() {
                "text" => {
                    if block.content.is_none() {
                        panic!(
                            "story '{}' text block {index} has no content in {}",
                            entry.id,
                            catalog_path.display()
                        );
                    }
                }
                "image" => {
                    let src = block.src.as_deref().unwrap_or("");
                    validate_image_src(&entry.id, src, catalog_path);
                }
                other => {
                    println!(
                        "cargo:warning=story '{}' block {index} has unknown type '{other}' and will not render",
                        entry.id
                    );
                }
            }
        }
        if !ids.insert(entry.id.clone()) {
            panic!(
                "duplicate story id '{}' in {}",
                entry.id,
                catalog_path.display()
            );
        }
    }
}

/// Site-relative paths and remote http(s) URLs are both accepted.
fn validate_image_src(story_id: &str, src: &str, catalog_path: &Path) {
    if src.trim().is_empty() {
        panic!(
            "story '{story_id}' has an empty image src in {}",
            catalog_path.display()
        );
    }
    if src.starts_with("data:") {
        panic!(
            "story '{story_id}' image src cannot be a data URL in {}",
            catalog_path.display()
        );
    }
}

pub const DEFAULT_AVATAR_SRC: &str = "/images/avatar.jpg";

/// Owner details shown on the about page. Blank values render as empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub tagline: String,
    pub major: String,
    pub email: String,
    pub instagram_url: String,
    pub github_url: String,
    pub avatar_src: String,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            owner_name: pick(&[
                option_env!("NAUTILUS_OWNER_NAME"),
                option_env!("TRUNK_PUBLIC_NAUTILUS_OWNER_NAME"),
            ]),
            tagline: pick(&[
                option_env!("NAUTILUS_TAGLINE"),
                option_env!("TRUNK_PUBLIC_NAUTILUS_TAGLINE"),
            ]),
            major: pick(&[
                option_env!("NAUTILUS_MAJOR"),
                option_env!("TRUNK_PUBLIC_NAUTILUS_MAJOR"),
            ]),
            email: pick(&[
                option_env!("NAUTILUS_EMAIL"),
                option_env!("TRUNK_PUBLIC_NAUTILUS_EMAIL"),
            ]),
            instagram_url: pick(&[
                option_env!("NAUTILUS_INSTAGRAM_URL"),
                option_env!("TRUNK_PUBLIC_NAUTILUS_INSTAGRAM_URL"),
            ]),
            github_url: pick(&[
                option_env!("NAUTILUS_GITHUB_URL"),
                option_env!("TRUNK_PUBLIC_NAUTILUS_GITHUB_URL"),
            ]),
            avatar_src: or_default(
                pick(&[
                    option_env!("NAUTILUS_AVATAR_SRC"),
                    option_env!("TRUNK_PUBLIC_NAUTILUS_AVATAR_SRC"),
                ]),
                DEFAULT_AVATAR_SRC,
            ),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

fn pick(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .map(|raw| raw.trim())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

use std::rc::Rc;

use nautilus_core::{
    story_by_id, ContentBlock, Navigation, ScrollMetrics, SiteConfig, Story, StoryId, View,
    BLOCK_REVEAL_THRESHOLD, CARD_REVEAL_THRESHOLD,
};
use yew::prelude::*;

use crate::reveal_observer::use_reveal;
use crate::svg_view::{GradientSpiral, Spiral, SpiralDot, SpiralShape};
use crate::viewport::{self, use_scroll_metrics};

const RIPPLE_COUNT: u32 = 5;
const RIPPLE_STEP_PX: u32 = 200;
const RIPPLE_DELAY_TENTHS: u32 = 6;

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) stories: Rc<[Story]>,
    pub(crate) site: Rc<SiteConfig>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.stories, &other.stories) && Rc::ptr_eq(&self.site, &other.site)
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let view = use_state(View::default);
    let metrics = use_scroll_metrics();

    let navigate = {
        let view = view.clone();
        Callback::from(move |navigation: Navigation| {
            let transition = View::navigate(navigation);
            view.set(transition.view);
            viewport::apply(transition.command);
        })
    };

    let page = match &*view {
        View::Home => html! {
            <HomePage
                stories={props.stories.clone()}
                on_open={navigate.reform(Navigation::OpenStory)}
            />
        },
        View::About => html! { <AboutPage site={props.site.clone()} /> },
        View::Story(id) => match story_by_id(&props.stories, id) {
            Some(story) => html! {
                <StoryView
                    story={story.clone()}
                    on_close={navigate.reform(|_: ()| Navigation::CloseStory)}
                />
            },
            None => html! {},
        },
    };

    html! {
        <div class="app">
            <NavBar view={(*view).clone()} metrics={metrics} on_navigate={navigate} />
            { page }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NavBarProps {
    pub(crate) view: View,
    pub(crate) metrics: ScrollMetrics,
    pub(crate) on_navigate: Callback<Navigation>,
}

#[function_component(NavBar)]
pub(crate) fn nav_bar(props: &NavBarProps) -> Html {
    let go_home = props.on_navigate.reform(|_: MouseEvent| Navigation::Home);
    let go_about = props.on_navigate.reform(|_: MouseEvent| Navigation::About);
    html! {
        <nav class="nav">
            <div class="nav-container">
                <button onclick={go_home.clone()} class="nav-logo">
                    <Spiral
                        width={32}
                        height={32}
                        class={classes!("nautilus-icon")}
                        style={AttrValue::from(props.metrics.rotation_style())}
                        dot={SpiralDot { radius: 3.0, fill: "currentColor".into() }}
                    />
                    <span class="nav-title">{ "NAUTILUS" }</span>
                </button>
                <div class="nav-links">
                    <button
                        onclick={go_home}
                        class={classes!("nav-link", props.view.is_home().then_some("active"))}
                    >
                        { "STORIES" }
                    </button>
                    <button
                        onclick={go_about}
                        class={classes!("nav-link", props.view.is_about().then_some("active"))}
                    >
                        { "ABOUT" }
                    </button>
                </div>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style={props.metrics.progress_style()} />
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HomePageProps {
    pub(crate) stories: Rc<[Story]>,
    pub(crate) on_open: Callback<StoryId>,
}

#[function_component(HomePage)]
pub(crate) fn home_page(props: &HomePageProps) -> Html {
    let ripples = (0..RIPPLE_COUNT).map(|index| {
        let size = (index + 1) * RIPPLE_STEP_PX;
        let delay = f64::from(index * RIPPLE_DELAY_TENTHS) / 10.0;
        html! {
            <div
                key={index}
                class="ripple"
                style={format!("width: {size}px; height: {size}px; animation-delay: {delay}s")}
            />
        }
    });

    let stories = if props.stories.is_empty() {
        html! {
            <div class="empty-state">
                <Spiral
                    width={120}
                    height={120}
                    class={classes!("empty-icon")}
                    shape={SpiralShape::Open}
                    stroke_width="1"
                />
                <h3 class="empty-title">{ "Stories are forming" }</h3>
                <p class="empty-text">
                    { "Like a nautilus building its chambers, one at a time" }
                </p>
            </div>
        }
    } else {
        html! {
            <div class="stories-grid">
                { for props.stories.iter().enumerate().map(|(index, story)| html! {
                    <StoryCard
                        key={story.id.as_str()}
                        story={story.clone()}
                        index={index}
                        on_open={props.on_open.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <div class="page">
            <div class="hero">
                <div class="ripples">{ for ripples }</div>
                <div class="hero-content">
                    <h1 class="hero-title">{ "I found " }<br />{ " something " }<br /></h1>
                    <p class="hero-subtitle">{ "inside a nautilus shell" }<br /></p>
                </div>
            </div>
            <div class="stories-section">{ stories }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StoryCardProps {
    pub(crate) story: Story,
    pub(crate) index: usize,
    pub(crate) on_open: Callback<StoryId>,
}

#[function_component(StoryCard)]
pub(crate) fn story_card(props: &StoryCardProps) -> Html {
    let (node, visible) = use_reveal(CARD_REVEAL_THRESHOLD);
    let story = &props.story;
    let open = {
        let id = story.id.clone();
        props.on_open.reform(move |_: MouseEvent| id.clone())
    };
    let parity = if props.index % 2 == 0 { "even" } else { "odd" };
    html! {
        <div ref={node} class={classes!("story-card", visible.then_some("visible"), parity)}>
            <div class="story-image" onclick={open.clone()}>
                <img src={story.cover_image.clone()} alt={story.title.clone()} />
                <div class="story-overlay" />
            </div>
            <div class="story-text">
                <div class="story-type">{ story.kind.label() }</div>
                <h2 class="story-title">{ story.title.clone() }</h2>
                <p class="story-excerpt">{ story.excerpt().to_string() }</p>
                <button onclick={open} class="story-button">
                    <span>{ "READ MORE" }</span>
                    <span class="arrow">{ "→" }</span>
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StoryViewProps {
    pub(crate) story: Story,
    pub(crate) on_close: Callback<()>,
}

#[function_component(StoryView)]
pub(crate) fn story_view(props: &StoryViewProps) -> Html {
    let story = &props.story;
    let close = props.on_close.reform(|_: MouseEvent| ());
    let accent = AttrValue::from(story.kind.accent());
    html! {
        <div class="story-view">
            <button onclick={close.clone()} class="back-button">
                <Spiral
                    width={24}
                    height={24}
                    class={classes!("back-icon")}
                    stroke_width="2"
                />
                <span>{ "BACK" }</span>
            </button>
            <div class="story-header">
                <div class="story-type-badge">{ story.kind.label() }</div>
                <h1 class="story-main-title">{ story.title.clone() }</h1>
            </div>
            <div class="story-content">
                { for story.content.iter().enumerate().map(|(index, block)| html! {
                    <StoryBlock key={index} block={block.clone()} />
                }) }
            </div>
            <div class="story-end">
                <Spiral
                    width={100}
                    height={80}
                    class={classes!("end-icon")}
                    stroke={accent.clone()}
                    dot={SpiralDot { radius: 2.0, fill: accent }}
                />
                <button onclick={close} class="return-button">{ "fin." }</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StoryBlockProps {
    pub(crate) block: ContentBlock,
}

#[function_component(StoryBlock)]
pub(crate) fn story_block(props: &StoryBlockProps) -> Html {
    let (node, visible) = use_reveal(BLOCK_REVEAL_THRESHOLD);
    let visible = visible.then_some("visible");
    match &props.block {
        ContentBlock::Text { content } => html! {
            <div ref={node} class={classes!("content-text", visible)}>
                <div class="text-content">{ content.clone() }</div>
            </div>
        },
        ContentBlock::Image { src, .. } => {
            let caption = props.block.visible_caption();
            html! {
                <div ref={node} class={classes!("content-image", visible)}>
                    <div class="image-wrapper">
                        <img src={src.clone()} alt={caption.unwrap_or_default().to_string()} />
                        if let Some(caption) = caption {
                            <p class="image-caption">{ caption.to_string() }</p>
                        }
                    </div>
                </div>
            }
        }
        ContentBlock::Unsupported => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AboutPageProps {
    pub(crate) site: Rc<SiteConfig>,
}

#[function_component(AboutPage)]
pub(crate) fn about_page(props: &AboutPageProps) -> Html {
    let site = &props.site;
    html! {
        <div class="about-page">
            <section class="about-hero">
                <div class="hero-spiral"><GradientSpiral /></div>
                <div class="hero-content">
                    <h1 class="hero-title">{ "Nautilus" }</h1>
                    <div class="golden-text">
                        <p>
                            { "The nautilus shell grows in a logarithmic spiral, closely \
                               approximating the golden ratio (φ ≈ 1.618). This mathematical \
                               perfection appears throughout nature: in galaxies, in sunflowers, \
                               in the way stories unfold." }
                        </p>
                    </div>
                </div>
            </section>
            <section class="bio-section">
                <div class="section-container">
                    <div class="bio-content">
                        <div class="bio-header">
                            <div class="avatar-container">
                                <img src={site.avatar_src.clone()} alt="me!" class="avatar" />
                                <Spiral
                                    width={40}
                                    height={40}
                                    class={classes!("avatar-spiral")}
                                    stroke="#f59e0b"
                                    stroke_width="1"
                                />
                            </div>
                            <div class="bio-basic">
                                <h2 class="bio-name">{ site.owner_name.clone() }</h2>
                                <p class="bio-tagline">{ site.tagline.clone() }</p>
                            </div>
                        </div>
                        <div class="bio-details">
                            <div class="bio-text">
                                <p>
                                    { format!(
                                        "Hi! I am currently a student majored in {}. Another \
                                         mundane fact about me is that I take photos and write \
                                         things :D",
                                        site.major
                                    ) }
                                </p>
                                <p>
                                    { "Sometimes the photos and words go together, sometimes \
                                       they don't. You'll find my photography here, along with \
                                       short stories, essays, and random thoughts about books, \
                                       anime, movies, or whatever's on my mind." }
                                </p>
                                <p>
                                    { "When I'm not behind the camera, I'm probably reading \
                                       novels, playing the flute, cycling around town, \
                                       binge-watching anime, or cooking something in my kitchen \
                                       (with varying degrees of success)." }
                                </p>
                                <p>
                                    { "This site is named Nautilus, after the shell that's been \
                                       growing in spirals for 500 million years, one chamber at a \
                                       time." }
                                </p>
                            </div>
                        </div>
                        <div class="bio-contact">
                            <p>
                                { "Say hello: " }
                                <a href={site.mailto()}>{ site.email.clone() }</a>
                            </p>
                            <div class="social-links">
                                <a href={site.instagram_url.clone()} class="social-link">
                                    { "Instagram" }
                                </a>
                                <span class="divider">{ "•" }</span>
                                <a href={site.github_url.clone()} class="social-link">
                                    { "GitHub" }
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use nautilus_core::StoryKind;
    use yew::ServerRenderer;

    fn story(id: &str, kind: StoryKind, content: Vec<ContentBlock>) -> Story {
        Story {
            id: StoryId::from(id),
            title: format!("Title {id}"),
            kind,
            cover_image: format!("/images/{id}.jpg"),
            content,
        }
    }

    fn sample_stories() -> Vec<Story> {
        vec![
            story(
                "harbor",
                StoryKind::Photos,
                vec![ContentBlock::text("boats at dawn\nmore")],
            ),
            story("chambers", StoryKind::Essay, vec![]),
            story("keeper", StoryKind::Story, vec![]),
        ]
    }

    #[tokio::test]
    async fn empty_collection_renders_empty_state_instead_of_grid() {
        let rendered = ServerRenderer::<HomePage>::with_props(|| HomePageProps {
            stories: Rc::from(Vec::new()),
            on_open: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(rendered.contains("empty-state"));
        assert!(rendered.contains("Stories are forming"));
        assert!(!rendered.contains("stories-grid"));
    }

    #[tokio::test]
    async fn cards_alternate_parity_and_start_hidden() {
        let rendered = ServerRenderer::<HomePage>::with_props(|| HomePageProps {
            stories: Rc::from(sample_stories()),
            on_open: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;
        assert_eq!(rendered.matches("story-card even").count(), 2);
        assert_eq!(rendered.matches("story-card odd").count(), 1);
        assert!(!rendered.contains("visible"));
        assert!(rendered.contains("boats at dawn"));
        assert!(!rendered.contains("more</p>"));
        assert!(rendered.contains("PHOTOS"));
        assert!(!rendered.contains("empty-state"));
    }

    #[tokio::test]
    async fn ripples_grow_and_stagger() {
        let rendered = ServerRenderer::<HomePage>::with_props(|| HomePageProps {
            stories: Rc::from(Vec::new()),
            on_open: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(rendered.contains("width: 200px; height: 200px; animation-delay: 0s"));
        assert!(rendered.contains("width: 1000px; height: 1000px; animation-delay: 2.4s"));
    }

    #[tokio::test]
    async fn story_without_blocks_renders_empty_content_area() {
        let rendered = ServerRenderer::<StoryView>::with_props(|| StoryViewProps {
            story: story("quiet", StoryKind::Essay, vec![]),
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(rendered.contains(r#"<div class="story-content"></div>"#));
        assert!(rendered.contains("ESSAY"));
        assert!(rendered.contains("#10b981"));
        assert!(rendered.contains("fin."));
    }

    #[tokio::test]
    async fn image_caption_only_when_present() {
        let rendered = ServerRenderer::<StoryView>::with_props(|| StoryViewProps {
            story: story(
                "gallery",
                StoryKind::Photos,
                vec![
                    ContentBlock::image("/images/one.jpg", None),
                    ContentBlock::image("/images/two.jpg", Some("")),
                    ContentBlock::image("/images/three.jpg", Some("last light")),
                    ContentBlock::Unsupported,
                ],
            ),
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;
        assert_eq!(rendered.matches("content-image").count(), 3);
        assert_eq!(rendered.matches("image-caption").count(), 1);
        assert!(rendered.contains("last light"));
    }

    #[tokio::test]
    async fn app_starts_on_home_with_stories_link_active() {
        let rendered = ServerRenderer::<App>::with_props(|| AppProps {
            stories: Rc::from(sample_stories()),
            site: Rc::new(SiteConfig::default()),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(rendered.contains(r#"class="nav-link active""#));
        assert!(rendered.contains("width: 0%"));
        assert!(rendered.contains("transform: rotate(0deg)"));
        assert_eq!(rendered.matches("READ MORE").count(), 3);
        assert!(!rendered.contains("about-page"));
    }

    #[tokio::test]
    async fn about_page_tolerates_empty_config() {
        let rendered = ServerRenderer::<AboutPage>::with_props(|| AboutPageProps {
            site: Rc::new(SiteConfig::default()),
        })
        .hydratable(false)
        .render()
        .await;
        assert!(rendered.contains(r#"<h2 class="bio-name"></h2>"#));
        assert!(rendered.contains(r#"href="mailto:""#));
        assert!(rendered.contains("largeSpiralGradient"));
    }
}

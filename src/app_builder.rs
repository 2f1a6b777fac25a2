use std::rc::Rc;

use nautilus_core::{load_stories, SiteConfig, Story};

use crate::yew_app::{App, AppProps};

fn load_catalog() -> Vec<Story> {
    match load_stories() {
        Ok(stories) => {
            gloo::console::log!("stories loaded", stories.len());
            stories
        }
        Err(err) => {
            gloo::console::warn!("story catalog unavailable", err.to_string());
            Vec::new()
        }
    }
}

pub(crate) fn run() {
    gloo::console::log!("boot phase", "catalog");
    let stories = load_catalog();
    let site = SiteConfig::from_build_env();

    gloo::console::log!("boot phase", "render");
    yew::Renderer::<App>::with_props(AppProps {
        stories: Rc::from(stories),
        site: Rc::new(site),
    })
    .render();
}

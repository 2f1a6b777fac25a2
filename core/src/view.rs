use crate::story::StoryId;

/// Page currently on screen. A story is only ever selected while its page is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    About,
    Story(StoryId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    OpenStory(StoryId),
    CloseStory,
    Home,
    About,
}

/// Instruction for the host viewport that accompanies a view change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportCommand {
    ScrollToTop,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub view: View,
    pub command: ViewportCommand,
}

impl View {
    /// Target view for a navigation event. The previous view never matters: last writer wins.
    pub fn navigate(navigation: Navigation) -> Transition {
        let view = match navigation {
            Navigation::OpenStory(id) => View::Story(id),
            Navigation::CloseStory | Navigation::Home => View::Home,
            Navigation::About => View::About,
        };
        Transition {
            view,
            command: ViewportCommand::ScrollToTop,
        }
    }

    pub fn selected_story(&self) -> Option<&StoryId> {
        match self {
            View::Story(id) => Some(id),
            View::Home | View::About => None,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, View::Home)
    }

    pub fn is_about(&self) -> bool {
        matches!(self, View::About)
    }
}

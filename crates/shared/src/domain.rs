use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the fixed dashboard screens. Exactly one view renders per pass;
/// views are never composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Explore,
    ChangeDetection,
    About,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Home,
        View::Explore,
        View::ChangeDetection,
        View::About,
    ];

    /// Canonical `?page=` slug for this view.
    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Explore => "explore",
            View::ChangeDetection => "change",
            View::About => "about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Explore => "Explore Data",
            View::ChangeDetection => "Change Detection",
            View::About => "About",
        }
    }

    /// Case-insensitive slug lookup. Total over all strings; unrecognized
    /// input (empty strings and control characters included) yields `None`.
    pub fn parse(raw: &str) -> Option<View> {
        let normalized = raw.trim().to_ascii_lowercase();
        View::ALL
            .iter()
            .copied()
            .find(|view| view.slug() == normalized)
    }
}

impl Default for View {
    fn default() -> Self {
        View::Home
    }
}

/// Stable identifier for one browser session, carried in a cookie. Session
/// state does not survive process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

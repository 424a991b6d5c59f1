//! Static application registry: the closed set of built-in content tags,
//! their display titles, default window dimensions, and the launch catalog.

use crate::constants::FALLBACK_TITLE;

/// Content tag for a window's interior. Built-in applications each have
/// their own tag; windows hosting an installed agent all share
/// [`AppId::AgentProfile`] and are distinguished by their content props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppId {
    Chat,
    Notes,
    Travel,
    ImageStudio,
    VideoStudio,
    Browser,
    Music,
    Terminal,
    Settings,
    AgentForge,
    /// Generic profile window wrapped around an installed agent.
    AgentProfile,
}

/// Default window dimensions, keyed by content tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeProfile {
    /// Small utility surface.
    Compact,
    Standard,
    /// Media-heavy surfaces that want more room up front.
    Expanded,
}

/// Display locale for the title table. Only English ships today; the table
/// is keyed by locale so additional translations slot in without touching
/// call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
}

impl AppId {
    pub fn size_profile(self) -> SizeProfile {
        match self {
            AppId::Settings | AppId::Music => SizeProfile::Compact,
            AppId::ImageStudio | AppId::VideoStudio | AppId::Browser | AppId::Travel => {
                SizeProfile::Expanded
            }
            _ => SizeProfile::Standard,
        }
    }

    /// Default window size in cells.
    pub fn default_size(self) -> (u16, u16) {
        match self.size_profile() {
            SizeProfile::Compact => (40, 12),
            SizeProfile::Standard => (64, 18),
            SizeProfile::Expanded => (90, 24),
        }
    }
}

fn title_en(app: AppId) -> Option<&'static str> {
    let title = match app {
        AppId::Chat => "Chat",
        AppId::Notes => "Notes",
        AppId::Travel => "Travel Planner",
        AppId::ImageStudio => "Image Studio",
        AppId::VideoStudio => "Video Studio",
        AppId::Browser => "Browser",
        AppId::Music => "Music",
        AppId::Terminal => "Terminal",
        AppId::Settings => "Settings",
        AppId::AgentForge => "Agent Forge",
        // Agent windows are titled by the identity resolver from the agent
        // definition, never from this table.
        AppId::AgentProfile => return None,
    };
    Some(title)
}

/// Look up the display title for a built-in tag; tags absent from the table
/// fall back to a generic placeholder.
pub fn app_title(app: AppId, locale: Locale) -> &'static str {
    let title = match locale {
        Locale::En => title_en(app),
    };
    title.unwrap_or(FALLBACK_TITLE)
}

/// Launchable built-ins, in the order the launcher lists them.
pub const CATALOG: &[AppId] = &[
    AppId::Chat,
    AppId::Notes,
    AppId::Travel,
    AppId::ImageStudio,
    AppId::VideoStudio,
    AppId::Browser,
    AppId::Music,
    AppId::Terminal,
    AppId::AgentForge,
    AppId::Settings,
];

/// Built-ins pinned to the dock regardless of whether they are open.
pub const DOCK_PINNED: &[AppId] = &[
    AppId::Chat,
    AppId::Notes,
    AppId::Travel,
    AppId::ImageStudio,
    AppId::AgentForge,
    AppId::Settings,
];

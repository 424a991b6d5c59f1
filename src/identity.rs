//! Identity resolution: maps a requested identity (built-in tag or installed
//! agent) to the concrete content tag, title, and props a window is created
//! with. Resolution happens exactly once, at open time; later edits to the
//! agent directory never reach already-open windows.

use std::sync::Arc;

use crate::agents::{AgentDefinition, AgentDirectory};
use crate::apps::{AppId, Locale, app_title};
use crate::constants::{AGENT_TITLE_PREFIX, FALLBACK_TITLE};

/// What the user asked to open. Built-ins and agents share the launch
/// surface but never the same tag space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppIdentity {
    Builtin(AppId),
    Agent(String),
}

impl AppIdentity {
    pub fn label(&self) -> String {
        match self {
            AppIdentity::Builtin(app) => app_title(*app, Locale::default()).to_string(),
            AppIdentity::Agent(id) => id.clone(),
        }
    }
}

/// Opaque payload handed to the hosted content renderer. Set once at window
/// creation and never mutated by the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContentProps {
    #[default]
    Empty,
    /// Snapshot of an installed agent's definition.
    Agent(Arc<AgentDefinition>),
    /// Arbitrary structured payload, e.g. a specific travel plan.
    Payload(serde_json::Value),
}

impl ContentProps {
    /// Empty props make a window eligible for the single-instance policy;
    /// anything else is never deduplicated.
    pub fn is_empty(&self) -> bool {
        matches!(self, ContentProps::Empty)
    }

    pub fn agent(&self) -> Option<&Arc<AgentDefinition>> {
        match self {
            ContentProps::Agent(definition) => Some(definition),
            _ => None,
        }
    }
}

/// Outcome of resolving one open request.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub content: AppId,
    pub title: String,
    pub props: ContentProps,
}

/// Resolve a requested identity against the currently installed agents.
///
/// Caller-supplied props win over resolver-derived ones for built-ins; an
/// agent request always carries the agent snapshot so two opens of the same
/// agent produce two windows.
pub fn resolve(
    identity: &AppIdentity,
    agents: &AgentDirectory,
    props: ContentProps,
    locale: Locale,
) -> Resolution {
    match identity {
        AppIdentity::Builtin(app) => Resolution {
            content: *app,
            title: app_title(*app, locale).to_string(),
            props,
        },
        AppIdentity::Agent(id) => match agents.get(id) {
            Some(definition) => Resolution {
                content: AppId::AgentProfile,
                title: format!("{AGENT_TITLE_PREFIX}: {}", definition.name),
                props: ContentProps::Agent(definition),
            },
            // Unknown agent: the window still opens, with a placeholder
            // title and nothing for the renderer to show.
            None => Resolution {
                content: AppId::AgentProfile,
                title: FALLBACK_TITLE.to_string(),
                props,
            },
        },
    }
}

//! Lazily-loaded window content. The session knows nothing about renderers;
//! the shell asks this cache for one per content tag and paints a
//! placeholder until it settles. A load failure is local to the windows of
//! that tag; the windows themselves stay fully functional.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::prelude::Rect;

use crate::apps::AppId;
use crate::identity::ContentProps;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RendererError {
    #[error("no renderer registered for {0:?}")]
    NotRegistered(AppId),
    #[error("renderer for {app:?} failed to load: {reason}")]
    LoadFailed { app: AppId, reason: String },
}

/// The opaque interior of a window. Implementations receive their window's
/// props verbatim at render time and are free to ignore them.
pub trait ContentRenderer {
    fn render(&mut self, frame: &mut Frame, area: Rect, props: &ContentProps, focused: bool);
}

/// Produces a renderer for a content tag. The shell installs one loader at
/// startup; tests install their own.
pub type RendererLoader = Box<dyn Fn(AppId) -> Result<Box<dyn ContentRenderer>, RendererError>>;

pub enum LoadState {
    /// Requested but not yet settled; the window shows a placeholder.
    Pending,
    Ready(Box<dyn ContentRenderer>),
    Failed(RendererError),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Per-tag renderer cache. `request` is cheap and synchronous; settlement
/// happens on a later `settle` call, which is the crate's only deferred
/// boundary. There is no timeout and no cancellation: a window closed
/// before its renderer settles simply never displays the result.
pub struct RendererCache {
    entries: HashMap<AppId, LoadState>,
    loader: RendererLoader,
}

impl RendererCache {
    pub fn new(loader: RendererLoader) -> Self {
        Self {
            entries: HashMap::new(),
            loader,
        }
    }

    /// Mark a tag as wanted. First sight of a tag enters `Pending`; later
    /// calls are no-ops regardless of state.
    pub fn request(&mut self, app: AppId) {
        self.entries.entry(app).or_insert_with(|| {
            tracing::debug!(?app, "renderer requested");
            LoadState::Pending
        });
    }

    /// Resolve every pending entry through the loader. Returns how many
    /// entries settled.
    pub fn settle(&mut self) -> usize {
        let pending: Vec<AppId> = self
            .entries
            .iter()
            .filter(|(_, state)| state.is_pending())
            .map(|(&app, _)| app)
            .collect();
        for app in &pending {
            let state = match (self.loader)(*app) {
                Ok(renderer) => LoadState::Ready(renderer),
                Err(err) => {
                    tracing::warn!(app = ?app, error = %err, "renderer load failed");
                    LoadState::Failed(err)
                }
            };
            self.entries.insert(*app, state);
        }
        pending.len()
    }

    pub fn state(&self, app: AppId) -> Option<&LoadState> {
        self.entries.get(&app)
    }

    pub fn state_mut(&mut self, app: AppId) -> Option<&mut LoadState> {
        self.entries.get_mut(&app)
    }

    pub fn has_pending(&self) -> bool {
        self.entries.values().any(|state| state.is_pending())
    }
}

//! The window session: identity-resolved window instances, lifecycle and
//! stacking arbitration, and the drag interaction state machine. Everything
//! in this module is headless and runs without a terminal.

pub mod drag;
mod manager;

use ratatui::prelude::Rect;

use crate::apps::AppId;
use crate::identity::{AppIdentity, ContentProps};

pub use drag::{DragController, DragState, ResizeGrab};
pub use manager::{UsageEvent, WindowSession};


/// Session-unique window handle. Strictly increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Window geometry with a signed origin; windows may be dragged partially
/// or fully off-screen and are clipped at render time, never repositioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl WinRect {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The on-screen portion of this rect within `bounds`, if any.
    pub fn clip_to(&self, bounds: Rect) -> Option<Rect> {
        let left = self.x.max(i32::from(bounds.x));
        let top = self.y.max(i32::from(bounds.y));
        let right = (self.x + i32::from(self.width)).min(i32::from(bounds.x + bounds.width));
        let bottom = (self.y + i32::from(self.height)).min(i32::from(bounds.y + bounds.height));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let (column, row) = (i32::from(column), i32::from(row));
        column >= self.x
            && column < self.x + i32::from(self.width)
            && row >= self.y
            && row < self.y + i32::from(self.height)
    }
}

/// One open window. `identity`, `content`, `title`, and `props` are frozen
/// at creation; geometry and stacking state mutate in place.
#[derive(Debug, Clone)]
pub struct WindowInstance {
    pub id: WindowId,
    /// The identity the caller asked for (pre-resolution).
    pub identity: AppIdentity,
    /// The resolved content tag driving the renderer.
    pub content: AppId,
    pub title: String,
    pub rect: WinRect,
    pub z_index: u64,
    pub minimized: bool,
    pub props: ContentProps,
}

impl WindowInstance {
    /// Whether this window participates in the single-instance policy.
    pub fn is_singleton(&self) -> bool {
        self.props.is_empty()
    }
}

/// Close/minimize handle bound to one window id. The header buttons route
/// through this, and content renderers can hold one to dismiss their own
/// window and nobody else's. Stays valid (as a no-op) after the window is
/// gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowControls {
    id: WindowId,
}

impl WindowControls {
    pub(crate) fn new(id: WindowId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn close(&self, session: &mut WindowSession) {
        session.close(self.id);
    }

    pub fn minimize(&self, session: &mut WindowSession) {
        session.minimize(self.id);
    }
}

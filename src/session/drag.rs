//! Pointer-driven drag as an explicit state machine. One gesture exists at
//! a time; pointer move/up events route here globally for the lifetime of
//! that gesture, so fast pointer movement outside the window is never lost
//! and teardown on pointer-up or mid-drag close is deterministic.

use super::{WindowId, WindowSession};
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        window: WindowId,
        /// Pointer offset from the window origin, captured at drag start.
        grab_x: i32,
        grab_y: i32,
    },
}

/// Translates pointer events into window position updates.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Begin a drag from a pointer-down on a window's title region.
    /// Dragging always focuses. A no-op if the window does not exist.
    pub fn pointer_down(
        &mut self,
        session: &mut WindowSession,
        id: WindowId,
        column: u16,
        row: u16,
    ) {
        let Some(window) = session.window(id) else {
            return;
        };
        let grab_x = i32::from(column) - window.rect.x;
        let grab_y = i32::from(row) - window.rect.y;
        session.focus(id);
        self.state = DragState::Dragging {
            window: id,
            grab_x,
            grab_y,
        };
        tracing::trace!(window = %id, grab_x, grab_y, "drag start");
    }

    /// Recompute the window origin from the current pointer position. No
    /// clamping: windows follow the pointer off-screen. If the window was
    /// closed mid-drag the gesture dissolves without touching anything.
    pub fn pointer_move(&mut self, session: &mut WindowSession, column: u16, row: u16) {
        let DragState::Dragging {
            window,
            grab_x,
            grab_y,
        } = self.state
        else {
            return;
        };
        if session.window(window).is_none() {
            self.state = DragState::Idle;
            return;
        }
        session.set_position(window, i32::from(column) - grab_x, i32::from(row) - grab_y);
    }

    /// Any pointer-up ends the gesture.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            tracing::trace!("drag end");
        }
        self.state = DragState::Idle;
    }

    /// Abandon the gesture without a pointer-up (viewport mode change,
    /// focus loss).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Corner-grab resize. Unlike dragging this is not a state machine of its
/// own; it mirrors the host affordance: grab the bottom-right corner,
/// stretch, release. Disabled entirely on small viewports by the caller.
#[derive(Debug, Default)]
pub struct ResizeGrab {
    active: Option<WindowId>,
}

impl ResizeGrab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn grab(&mut self, session: &mut WindowSession, id: WindowId) {
        if session.window(id).is_none() {
            return;
        }
        session.focus(id);
        self.active = Some(id);
    }

    /// Stretch the grabbed window so its bottom-right corner tracks the
    /// pointer; the session clamps to the minimum size.
    pub fn pointer_move(&mut self, session: &mut WindowSession, column: u16, row: u16) {
        let Some(id) = self.active else {
            return;
        };
        let Some(window) = session.window(id) else {
            self.active = None;
            return;
        };
        let width = (i32::from(column) - window.rect.x + 1).max(i32::from(MIN_WINDOW_WIDTH));
        let height = (i32::from(row) - window.rect.y + 1).max(i32::from(MIN_WINDOW_HEIGHT));
        session.resize(id, width as u16, height as u16);
    }

    pub fn release(&mut self) {
        self.active = None;
    }
}

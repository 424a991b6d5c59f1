use super::{WinRect, WindowId, WindowInstance};
use crate::agents::AgentDirectory;
use crate::apps::{AppId, Locale};
use crate::constants::{
    BASE_Z_INDEX, CASCADE_ORIGIN_X, CASCADE_ORIGIN_Y, CASCADE_STEP_X, CASCADE_STEP_Y, CASCADE_WRAP,
    FIRST_WINDOW_ID, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::identity::{AppIdentity, ContentProps, resolve};

/// Emitted on every open request, keyed by the identity the user asked for.
/// Drained by the shell and fed to the usage/frequency log; the session
/// itself attaches no meaning to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEvent {
    pub identity: AppIdentity,
}

/// Owns the ordered collection of open windows and arbitrates identity,
/// stacking, and lifecycle. All operations run synchronously to completion;
/// operations naming an unknown id are silent no-ops.
#[derive(Debug)]
pub struct WindowSession {
    windows: Vec<WindowInstance>,
    agents: AgentDirectory,
    locale: Locale,
    next_window_id: u64,
    /// Stacking counter shared by open/focus/restore. Read-then-increment;
    /// no two windows are ever assigned the same value.
    next_z_index: u64,
    cascade_counter: u64,
    launcher_open: bool,
    usage_events: Vec<UsageEvent>,
}

impl Default for WindowSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSession {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            agents: AgentDirectory::new(),
            locale: Locale::default(),
            next_window_id: FIRST_WINDOW_ID,
            next_z_index: BASE_Z_INDEX,
            cascade_counter: 0,
            launcher_open: false,
            usage_events: Vec::new(),
        }
    }

    pub fn agents(&self) -> &AgentDirectory {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut AgentDirectory {
        &mut self.agents
    }

    fn bump_z(&mut self) -> u64 {
        let z = self.next_z_index;
        self.next_z_index += 1;
        z
    }

    fn cascade_slot(&mut self) -> (i32, i32) {
        let slot = (self.cascade_counter % CASCADE_WRAP) as i32;
        self.cascade_counter += 1;
        (
            CASCADE_ORIGIN_X + slot * CASCADE_STEP_X,
            CASCADE_ORIGIN_Y + slot * CASCADE_STEP_Y,
        )
    }

    fn find(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    /// Open a window for `identity`. If the resolved identity is already
    /// hosted by a singleton window (empty props on both sides), that window
    /// is restored and focused instead of duplicated. Returns the id of the
    /// window that ends up hosting the request.
    pub fn open(&mut self, identity: AppIdentity, props: ContentProps) -> WindowId {
        self.usage_events.push(UsageEvent {
            identity: identity.clone(),
        });
        let resolution = resolve(&identity, &self.agents, props, self.locale);

        if resolution.props.is_empty()
            && let Some(existing) = self
                .windows
                .iter()
                .find(|w| w.content == resolution.content && w.is_singleton())
                .map(|w| w.id)
        {
            tracing::debug!(window = %existing, content = ?resolution.content, "singleton refocus");
            // restore both un-minimizes and brings to front in one z bump
            self.restore(existing);
            self.launcher_open = false;
            return existing;
        }

        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        let (x, y) = self.cascade_slot();
        let (width, height) = resolution.content.default_size();
        let z_index = self.bump_z();
        tracing::debug!(window = %id, content = ?resolution.content, z = z_index, "open window");
        self.windows.push(WindowInstance {
            id,
            identity,
            content: resolution.content,
            title: resolution.title,
            rect: WinRect::new(x, y, width, height),
            z_index,
            minimized: false,
            props: resolution.props,
        });
        self.launcher_open = false;
        id
    }

    /// Remove a window permanently. No cascading effect on other windows.
    pub fn close(&mut self, id: WindowId) {
        if let Some(index) = self.find(id) {
            tracing::debug!(window = %id, "close window");
            self.windows.remove(index);
        }
    }

    /// Suspend a window: z-index, position, and size are all preserved.
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(index) = self.find(id) {
            self.windows[index].minimized = true;
        }
    }

    /// Un-minimize and bring to front. A restore always stacks on top, even
    /// if the window was already visible.
    pub fn restore(&mut self, id: WindowId) {
        if let Some(index) = self.find(id) {
            let z = self.bump_z();
            let window = &mut self.windows[index];
            window.minimized = false;
            window.z_index = z;
        }
    }

    /// Bring to front without touching the minimized flag. Focusing a
    /// minimized window does not reveal it; callers wanting both use
    /// [`WindowSession::restore`].
    pub fn focus(&mut self, id: WindowId) {
        if let Some(index) = self.find(id) {
            let z = self.bump_z();
            self.windows[index].z_index = z;
        }
    }

    /// Move a window. No viewport clamping: off-screen positions are legal
    /// and preserved.
    pub fn set_position(&mut self, id: WindowId, x: i32, y: i32) {
        if let Some(index) = self.find(id) {
            self.windows[index].rect.x = x;
            self.windows[index].rect.y = y;
        }
    }

    /// Resize a window, clamped to the crate-wide minimum.
    pub fn resize(&mut self, id: WindowId, width: u16, height: u16) {
        if let Some(index) = self.find(id) {
            self.windows[index].rect.width = width.max(MIN_WINDOW_WIDTH);
            self.windows[index].rect.height = height.max(MIN_WINDOW_HEIGHT);
        }
    }

    /// Open windows in creation order.
    pub fn windows(&self) -> &[WindowInstance] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// The non-minimized window with the maximum z-index, if any. Computed
    /// fresh on every call; never cached.
    pub fn active_window(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Whether any window (minimized or not) currently hosts `content` as a
    /// singleton. Dock indicators key off this.
    pub fn is_open(&self, content: AppId) -> bool {
        self.windows.iter().any(|w| w.content == content)
    }

    /// Window ids sorted back-to-front for painting.
    pub fn paint_order(&self) -> Vec<WindowId> {
        let mut visible: Vec<&WindowInstance> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible.iter().map(|w| w.id).collect()
    }

    /// The topmost non-minimized window containing the given cell, if any.
    pub fn window_at(&self, column: u16, row: u16) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized && w.rect.contains(column, row))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    /// Id-bound close/minimize pair for handing to a content renderer.
    /// Valid to obtain for any id; stale handles are harmless.
    pub fn controls(&self, id: WindowId) -> super::WindowControls {
        super::WindowControls::new(id)
    }

    pub fn launcher_open(&self) -> bool {
        self.launcher_open
    }

    pub fn set_launcher_open(&mut self, open: bool) {
        self.launcher_open = open;
    }

    /// Drain usage events recorded since the last call.
    pub fn take_usage_events(&mut self) -> Vec<UsageEvent> {
        std::mem::take(&mut self.usage_events)
    }
}

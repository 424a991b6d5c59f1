//! The dock: one-row taskbar listing pinned built-ins, installed agents,
//! and anything else that is open. Single-click toggle contract: absent
//! windows open, visible windows focus, minimized windows restore.

use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::Style;

use crate::apps::{AppId, DOCK_PINNED, Locale, app_title};
use crate::identity::{AppIdentity, ContentProps};
use crate::session::{WindowId, WindowSession};
use crate::theme;

#[derive(Debug, Clone)]
pub struct DockEntry {
    pub identity: AppIdentity,
    pub label: String,
    /// The window currently hosting this identity, if any. For agents with
    /// several profile windows this is the most recently created one.
    pub window: Option<WindowId>,
    pub minimized: bool,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct Dock {
    entries: Vec<DockEntry>,
    hits: Vec<(Rect, usize)>,
    launcher_hit: Option<Rect>,
    hostname: Option<String>,
}

impl Dock {
    pub fn new() -> Self {
        Self {
            hostname: hostname::get().ok().map(|h| h.to_string_lossy().into_owned()),
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[DockEntry] {
        &self.entries
    }

    /// Rebuild the entry list from live session state. Pinned apps always
    /// appear; installed agents and open unpinned identities follow.
    pub fn refresh(&mut self, session: &WindowSession) {
        let active = session.active_window();
        self.entries.clear();

        for &app in DOCK_PINNED {
            self.entries
                .push(entry_for_builtin(session, app, active));
        }
        for agent in session.agents().iter() {
            self.entries
                .push(entry_for_agent(session, &agent.id, &agent.name, active));
        }
        // open built-ins not already represented
        for window in session.windows() {
            if window.content == AppId::AgentProfile || DOCK_PINNED.contains(&window.content) {
                continue;
            }
            let identity = AppIdentity::Builtin(window.content);
            if self.entries.iter().any(|e| e.identity == identity) {
                continue;
            }
            self.entries
                .push(entry_for_builtin(session, window.content, active));
        }
    }

    /// Apply the toggle contract for a clicked entry.
    pub fn activate(&self, session: &mut WindowSession, index: usize) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        match entry.window {
            None => {
                session.open(entry.identity.clone(), ContentProps::Empty);
            }
            Some(id) if entry.minimized => session.restore(id),
            Some(id) => session.focus(id),
        }
    }

    /// Which entry, if any, a pointer-down at the given cell lands on.
    pub fn hit_entry(&self, column: u16, row: u16) -> Option<usize> {
        self.hits
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|&(_, index)| index)
    }

    pub fn hit_launcher(&self, column: u16, row: u16) -> bool {
        self.launcher_hit
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, session: &WindowSession) {
        self.hits.clear();
        self.launcher_hit = None;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().bg(theme::dock_bg()).fg(theme::dock_fg());
        let buffer = frame.buffer_mut();
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.set_symbol(" ");
                cell.set_style(base);
            }
        }

        let mut x = area.x;
        // launcher button first
        let launcher_label = if session.launcher_open() {
            " [Apps*] "
        } else {
            " [Apps] "
        };
        buffer.set_string(x, area.y, launcher_label, base);
        self.launcher_hit = Some(Rect {
            x,
            y: area.y,
            width: launcher_label.len() as u16,
            height: 1,
        });
        x += launcher_label.len() as u16;

        for (index, entry) in self.entries.iter().enumerate() {
            // open indicator dot, filled when active
            let dot = match (entry.window.is_some(), entry.active) {
                (_, true) => "●",
                (true, false) => "○",
                (false, false) => " ",
            };
            let label = format!(" {}{} ", entry.label, dot);
            let width = label.chars().count() as u16;
            if x + width >= area.x + area.width {
                break;
            }
            let style = if entry.active {
                Style::default()
                    .bg(theme::dock_active_bg())
                    .fg(theme::dock_active_fg())
            } else if entry.window.is_some() {
                base.fg(theme::dock_indicator_fg())
            } else {
                base
            };
            buffer.set_string(x, area.y, &label, style);
            self.hits.push((
                Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1,
                },
                index,
            ));
            x += width;
        }

        // status area on the right: hostname + open-window count
        let status = match &self.hostname {
            Some(host) => format!(" {} windows · {host} ", session.windows().len()),
            None => format!(" {} windows ", session.windows().len()),
        };
        let status_width = status.chars().count() as u16;
        if status_width < area.width {
            let start = area.x + area.width - status_width;
            if start > x {
                buffer.set_string(start, area.y, &status, base);
            }
        }
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

fn entry_for_builtin(session: &WindowSession, app: AppId, active: Option<WindowId>) -> DockEntry {
    let window = session
        .windows()
        .iter()
        .filter(|w| w.content == app)
        .max_by_key(|w| w.id)
        .map(|w| (w.id, w.minimized));
    DockEntry {
        identity: AppIdentity::Builtin(app),
        label: app_title(app, Locale::default()).to_string(),
        window: window.map(|(id, _)| id),
        minimized: window.is_some_and(|(_, minimized)| minimized),
        active: window.is_some_and(|(id, _)| active == Some(id)),
    }
}

fn entry_for_agent(
    session: &WindowSession,
    agent_id: &str,
    name: &str,
    active: Option<WindowId>,
) -> DockEntry {
    let window = session
        .windows()
        .iter()
        .filter(|w| {
            w.content == AppId::AgentProfile
                && w.props.agent().is_some_and(|a| a.id == agent_id)
        })
        .max_by_key(|w| w.id)
        .map(|w| (w.id, w.minimized));
    DockEntry {
        identity: AppIdentity::Agent(agent_id.to_string()),
        label: name.to_string(),
        window: window.map(|(id, _)| id),
        minimized: window.is_some_and(|(_, minimized)| minimized),
        active: window.is_some_and(|(id, _)| active == Some(id)),
    }
}

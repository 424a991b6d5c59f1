//! The app launcher: a centered overlay listing every launchable identity,
//! built-ins first, then installed agents. Opening anything closes the
//! launcher as a session side effect.

use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::{CATALOG, Locale, app_title};
use crate::identity::{AppIdentity, ContentProps};
use crate::session::WindowSession;
use crate::theme;

#[derive(Debug, Clone)]
struct LauncherItem {
    identity: AppIdentity,
    label: String,
}

#[derive(Debug, Default)]
pub struct Launcher {
    items: Vec<LauncherItem>,
    selected: usize,
    list_area: Rect,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuild the catalog from the session (agents may have changed).
    pub fn refresh(&mut self, session: &WindowSession) {
        self.items = CATALOG
            .iter()
            .map(|&app| LauncherItem {
                identity: AppIdentity::Builtin(app),
                label: app_title(app, Locale::default()).to_string(),
            })
            .chain(session.agents().iter().map(|agent| LauncherItem {
                identity: AppIdentity::Agent(agent.id.clone()),
                label: format!("{} (agent)", agent.name),
            }))
            .collect();
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        self.selected = ((self.selected as isize + delta).rem_euclid(len)) as usize;
    }

    /// Open the selected item. The session closes the launcher itself.
    pub fn activate_selected(&self, session: &mut WindowSession) {
        self.activate(session, self.selected);
    }

    pub fn activate(&self, session: &mut WindowSession, index: usize) {
        if let Some(item) = self.items.get(index) {
            session.open(item.identity.clone(), ContentProps::Empty);
        }
    }

    /// Map a pointer position to a list row, if it lands on one.
    pub fn hit_item(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let index = usize::from(row - area.y);
        (index < self.items.len()).then_some(index)
    }

    /// Whether the pointer is inside the overlay at all; clicks outside
    /// dismiss it.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let area = overlay_area_from_list(self.list_area);
        column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height
    }

    pub fn render(&mut self, frame: &mut Frame, bounds: Rect) {
        let width = bounds.width.min(36).max(20);
        let height = (self.items.len() as u16 + 2).min(bounds.height);
        let area = Rect {
            x: bounds.x + (bounds.width.saturating_sub(width)) / 2,
            y: bounds.y + (bounds.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        let base = Style::default()
            .bg(theme::launcher_bg())
            .fg(theme::launcher_fg());
        let buffer = frame.buffer_mut();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(base);
                }
            }
        }
        buffer.set_string(
            area.x + 1,
            area.y,
            "Applications",
            base.add_modifier(Modifier::BOLD),
        );

        self.list_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(2),
        };
        for (index, item) in self.items.iter().enumerate() {
            let y = self.list_area.y + index as u16;
            if y >= self.list_area.y + self.list_area.height {
                break;
            }
            let style = if index == self.selected {
                Style::default()
                    .bg(theme::launcher_selected_bg())
                    .fg(theme::launcher_selected_fg())
            } else {
                base
            };
            let label = format!(" {:<width$}", item.label, width = area.width as usize - 1);
            let label: String = label.chars().take(area.width as usize).collect();
            buffer.set_string(area.x, y, &label, style);
        }
    }
}

fn overlay_area_from_list(list: Rect) -> Rect {
    Rect {
        x: list.x,
        y: list.y.saturating_sub(1),
        width: list.width,
        height: list.height + 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentDefinition;
    use crate::apps::AppId;

    #[test]
    fn catalog_and_agents_listed() {
        let mut session = WindowSession::new();
        session.agents_mut().install(AgentDefinition {
            id: "nova".into(),
            name: "Nova".into(),
            persona: String::new(),
            capabilities: Vec::new(),
        });
        let mut launcher = Launcher::new();
        launcher.refresh(&session);
        assert_eq!(launcher.len(), CATALOG.len() + 1);
    }

    #[test]
    fn selection_wraps() {
        let session = WindowSession::new();
        let mut launcher = Launcher::new();
        launcher.refresh(&session);
        launcher.move_selection(-1);
        assert_eq!(launcher.selected(), launcher.len() - 1);
        launcher.move_selection(1);
        assert_eq!(launcher.selected(), 0);
    }

    #[test]
    fn activation_opens_and_closes_launcher() {
        let mut session = WindowSession::new();
        session.set_launcher_open(true);
        let mut launcher = Launcher::new();
        launcher.refresh(&session);
        launcher.activate_selected(&mut session);
        assert_eq!(session.windows().len(), 1);
        assert_eq!(session.windows()[0].content, AppId::Chat);
        assert!(!session.launcher_open());
    }
}

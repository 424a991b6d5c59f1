//! Built-in content renderers. These are deliberately thin: window
//! lifecycle correctness never depends on what a renderer paints, and the
//! real mini-applications live behind this trait boundary.

use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::apps::AppId;
use crate::identity::ContentProps;
use crate::renderer::{ContentRenderer, RendererError, RendererLoader};
use crate::theme;

struct TextContent {
    lines: Vec<String>,
}

impl ContentRenderer for TextContent {
    fn render(&mut self, frame: &mut Frame, area: Rect, _props: &ContentProps, _focused: bool) {
        let lines: Vec<Line> = self.lines.iter().map(|l| Line::raw(l.as_str())).collect();
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}

/// Profile view for an installed agent; everything it shows comes from the
/// props snapshot taken at open time.
struct AgentProfileContent;

impl ContentRenderer for AgentProfileContent {
    fn render(&mut self, frame: &mut Frame, area: Rect, props: &ContentProps, _focused: bool) {
        let lines = match props.agent() {
            Some(agent) => {
                let mut lines = vec![
                    Line::raw(format!("Name: {}", agent.name)),
                    Line::raw(format!("Id: {}", agent.id)),
                ];
                if !agent.persona.is_empty() {
                    lines.push(Line::raw(format!("Persona: {}", agent.persona)));
                }
                if !agent.capabilities.is_empty() {
                    lines.push(Line::raw(format!(
                        "Capabilities: {}",
                        agent.capabilities.join(", ")
                    )));
                }
                lines
            }
            None => vec![Line::styled(
                "This agent is no longer installed.",
                Style::default().fg(theme::placeholder_fg()),
            )],
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}

fn stub(lines: &[&str]) -> Box<dyn ContentRenderer> {
    Box::new(TextContent {
        lines: lines.iter().map(|s| s.to_string()).collect(),
    })
}

/// The shell's renderer loader. Every catalog tag resolves; the error path
/// exists for future out-of-process renderers and is exercised in tests.
pub fn default_loader() -> RendererLoader {
    Box::new(|app| {
        let renderer: Box<dyn ContentRenderer> = match app {
            AppId::Chat => stub(&["Chat", "", "Conversations live here."]),
            AppId::Notes => stub(&["Notes", "", "Scratchpad for quick text."]),
            AppId::Travel => stub(&["Travel Planner", "", "Plan and revisit trips."]),
            AppId::ImageStudio => stub(&["Image Studio", "", "Generate and edit images."]),
            AppId::VideoStudio => stub(&["Video Studio", "", "Storyboard and render clips."]),
            AppId::Browser => stub(&["Browser", "", "Navigate the web, sandboxed."]),
            AppId::Music => stub(&["Music", "", "Now playing: nothing."]),
            AppId::Terminal => stub(&["Terminal", "", "$"]),
            AppId::Settings => stub(&["Settings", "", "Wallpaper, locale, agents."]),
            AppId::AgentForge => stub(&[
                "Agent Forge",
                "",
                "Install agents with --agents <manifest.json>,",
                "then launch them like any other app.",
            ]),
            AppId::AgentProfile => Box::new(AgentProfileContent),
        };
        Ok::<_, RendererError>(renderer)
    })
}

//! Frame composition: desktop surface, windows back-to-front, dock, and the
//! launcher overlay on top. Also owns the small-viewport policy: below the
//! size thresholds the active window takes the whole desktop and the shell
//! stops routing drag/resize.

use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use crate::chrome;
use crate::constants::{DOCK_HEIGHT, SMALL_VIEWPORT_HEIGHT, SMALL_VIEWPORT_WIDTH};
use crate::renderer::{LoadState, RendererCache};
use crate::session::{WinRect, WindowInstance, WindowSession};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Windowed,
    /// Too small for windowing: the active window fills the desktop,
    /// drag/resize are disabled.
    SmallViewport,
}

pub fn viewport_mode(area: Rect) -> ViewportMode {
    if area.width < SMALL_VIEWPORT_WIDTH || area.height < SMALL_VIEWPORT_HEIGHT {
        ViewportMode::SmallViewport
    } else {
        ViewportMode::Windowed
    }
}

/// Split the terminal into desktop and dock rows.
pub fn split_area(area: Rect) -> (Rect, Rect) {
    let dock_height = DOCK_HEIGHT.min(area.height);
    let desktop = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height - dock_height,
    };
    let dock = Rect {
        x: area.x,
        y: area.y + desktop.height,
        width: area.width,
        height: dock_height,
    };
    (desktop, dock)
}

/// The rect a window occupies given the viewport mode.
pub fn effective_rect(window: &WindowInstance, desktop: Rect, mode: ViewportMode) -> WinRect {
    match mode {
        ViewportMode::Windowed => window.rect,
        ViewportMode::SmallViewport => WinRect::new(
            i32::from(desktop.x),
            i32::from(desktop.y),
            desktop.width,
            desktop.height,
        ),
    }
}

pub fn render_desktop(
    frame: &mut Frame,
    desktop: Rect,
    session: &WindowSession,
    cache: &mut RendererCache,
    mode: ViewportMode,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::desktop_bg())),
        desktop,
    );
    match mode {
        ViewportMode::Windowed => {
            for id in session.paint_order() {
                let Some(window) = session.window(id) else {
                    continue;
                };
                let focused = session.active_window() == Some(id);
                render_window(frame, desktop, window, window.rect, focused, cache);
            }
        }
        ViewportMode::SmallViewport => {
            if let Some(id) = session.active_window()
                && let Some(window) = session.window(id)
            {
                let rect = effective_rect(window, desktop, mode);
                render_window(frame, desktop, window, rect, true, cache);
            }
        }
    }
}

fn render_window(
    frame: &mut Frame,
    desktop: Rect,
    window: &WindowInstance,
    rect: WinRect,
    focused: bool,
    cache: &mut RendererCache,
) {
    chrome::render_frame(frame, rect, desktop, &window.title, focused);
    let Some(area) = chrome::content_area(rect, desktop) else {
        return;
    };
    match cache.state_mut(window.content) {
        Some(LoadState::Ready(renderer)) => {
            renderer.render(frame, area, &window.props, focused);
        }
        Some(LoadState::Failed(err)) => {
            let message = format!("Failed to load: {err}");
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(theme::error_fg())),
                area,
            );
        }
        // Pending or not yet requested: the window shows up immediately
        // with a placeholder and swaps content in when the load settles.
        _ => {
            frame.render_widget(
                Paragraph::new("Loading…")
                    .style(Style::default().fg(theme::placeholder_fg())),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_viewport_thresholds() {
        let big = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };
        let narrow = Rect {
            x: 0,
            y: 0,
            width: 60,
            height: 40,
        };
        let short = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 12,
        };
        assert_eq!(viewport_mode(big), ViewportMode::Windowed);
        assert_eq!(viewport_mode(narrow), ViewportMode::SmallViewport);
        assert_eq!(viewport_mode(short), ViewportMode::SmallViewport);
    }

    #[test]
    fn split_reserves_dock_row() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (desktop, dock) = split_area(area);
        assert_eq!(desktop.height, 23);
        assert_eq!(dock.y, 23);
        assert_eq!(dock.height, 1);
    }
}

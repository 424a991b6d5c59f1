//! Window decoration: border, title bar, and the minimize/close buttons.
//! Windows paint back-to-front, so occlusion falls out of overdraw; the
//! only subtlety here is clipping windows that hang off the desktop edge.

use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};

use crate::session::WinRect;
use crate::theme;

/// What a pointer-down on the title row means. Embedded buttons never start
/// a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Drag,
    Minimize,
    Close,
    None,
}

/// Width of one header button including brackets, e.g. `[-]`.
const BUTTON_WIDTH: i32 = 3;

/// Classify a pointer position against a window's header row.
pub fn hit_test(rect: WinRect, column: u16, row: u16) -> HeaderHit {
    let (column, row) = (i32::from(column), i32::from(row));
    if row != rect.y || column < rect.x || column >= rect.x + i32::from(rect.width) {
        return HeaderHit::None;
    }
    let right = rect.x + i32::from(rect.width);
    // buttons sit flush against the right border: [-][x]
    let close_start = right - 1 - BUTTON_WIDTH;
    let minimize_start = close_start - BUTTON_WIDTH;
    if column >= close_start && column < close_start + BUTTON_WIDTH {
        HeaderHit::Close
    } else if column >= minimize_start && column < minimize_start + BUTTON_WIDTH {
        HeaderHit::Minimize
    } else {
        HeaderHit::Drag
    }
}

/// The interior area available to the content renderer, clipped to the
/// desktop. Row 0 of the window is the title bar; a one-cell border frames
/// the rest.
pub fn content_area(rect: WinRect, bounds: Rect) -> Option<Rect> {
    let inner = WinRect::new(
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    );
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    inner.clip_to(bounds)
}

fn put(frame: &mut Frame, clip: Rect, x: i32, y: i32, symbol: &str, style: Style) {
    if x < i32::from(clip.x)
        || x >= i32::from(clip.x + clip.width)
        || y < i32::from(clip.y)
        || y >= i32::from(clip.y + clip.height)
    {
        return;
    }
    if let Some(cell) = frame.buffer_mut().cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

/// Draw a window frame: title bar with buttons on the top row, box border
/// around the rest, interior cleared for the content renderer.
pub fn render_frame(frame: &mut Frame, rect: WinRect, bounds: Rect, title: &str, focused: bool) {
    let Some(clip) = rect.clip_to(bounds) else {
        return;
    };

    let header_style = if focused {
        Style::default()
            .bg(theme::header_focused_bg())
            .fg(theme::header_focused_fg())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(theme::header_bg()).fg(theme::header_fg())
    };
    let border_style = Style::default()
        .fg(theme::border_fg())
        .bg(theme::window_bg());
    let body_style = Style::default().bg(theme::window_bg());

    let right = rect.x + i32::from(rect.width) - 1;
    let bottom = rect.y + i32::from(rect.height) - 1;

    // Title bar
    for x in rect.x..=right {
        put(frame, clip, x, rect.y, " ", header_style);
    }
    let label_width = i32::from(rect.width).saturating_sub(2 * BUTTON_WIDTH + 3).max(0) as usize;
    for (idx, ch) in title.chars().take(label_width).enumerate() {
        put(
            frame,
            clip,
            rect.x + 2 + idx as i32,
            rect.y,
            &ch.to_string(),
            header_style,
        );
    }
    let close_start = right - BUTTON_WIDTH;
    let minimize_start = close_start - BUTTON_WIDTH;
    for (offset, ch) in ["[", "-", "]"].into_iter().enumerate() {
        put(frame, clip, minimize_start + offset as i32, rect.y, ch, header_style);
    }
    for (offset, ch) in ["[", "x", "]"].into_iter().enumerate() {
        put(frame, clip, close_start + offset as i32, rect.y, ch, header_style);
    }

    // Body interior
    for y in (rect.y + 1)..bottom {
        for x in (rect.x + 1)..right {
            put(frame, clip, x, y, " ", body_style);
        }
    }

    // Borders below the title bar
    for y in (rect.y + 1)..bottom {
        put(frame, clip, rect.x, y, "│", border_style);
        put(frame, clip, right, y, "│", border_style);
    }
    for x in rect.x..=right {
        let symbol = if x == rect.x {
            "└"
        } else if x == right {
            "┘"
        } else {
            "─"
        };
        put(frame, clip, x, bottom, symbol, border_style);
    }
}

/// The one-cell resize grip at the bottom-right corner.
pub fn resize_corner(rect: WinRect) -> (i32, i32) {
    (
        rect.x + i32::from(rect.width) - 1,
        rect.y + i32::from(rect.height) - 1,
    )
}

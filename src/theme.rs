use ratatui::style::Color;

// Centralized theme colors so the chrome, dock, and launcher agree.

pub fn desktop_bg() -> Color {
    Color::Black
}

pub fn window_bg() -> Color {
    Color::Reset
}

pub fn border_fg() -> Color {
    Color::DarkGray
}

// Title bars
pub fn header_focused_bg() -> Color {
    Color::Blue
}
pub fn header_focused_fg() -> Color {
    Color::White
}
pub fn header_bg() -> Color {
    Color::DarkGray
}
pub fn header_fg() -> Color {
    Color::Gray
}

// Dock
pub fn dock_bg() -> Color {
    Color::DarkGray
}
pub fn dock_fg() -> Color {
    Color::Black
}
pub fn dock_active_bg() -> Color {
    Color::Gray
}
pub fn dock_active_fg() -> Color {
    Color::Black
}
pub fn dock_indicator_fg() -> Color {
    Color::Green
}

// Launcher
pub fn launcher_bg() -> Color {
    Color::DarkGray
}
pub fn launcher_fg() -> Color {
    Color::White
}
pub fn launcher_selected_bg() -> Color {
    Color::Gray
}
pub fn launcher_selected_fg() -> Color {
    Color::Black
}

// Content placeholders
pub fn placeholder_fg() -> Color {
    Color::DarkGray
}
pub fn error_fg() -> Color {
    Color::Red
}

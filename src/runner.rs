//! The shell: owns the session, the interaction controllers, and the
//! presentation surfaces, and routes every input event to exactly one of
//! them. This is the only place where pointer events meet session state.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::prelude::Rect;

use crate::chrome::{self, HeaderHit};
use crate::dock::Dock;
use crate::event_loop::ControlFlow;
use crate::launcher::Launcher;
use crate::renderer::{RendererCache, RendererLoader};
use crate::session::{DragController, ResizeGrab, WindowSession};
use crate::ui::{self, ViewportMode};

pub struct Shell {
    pub session: WindowSession,
    dock: Dock,
    launcher: Launcher,
    cache: RendererCache,
    drag: DragController,
    resize: ResizeGrab,
    mode: ViewportMode,
    desktop: Rect,
}

impl Shell {
    pub fn new(loader: RendererLoader) -> Self {
        Self {
            session: WindowSession::new(),
            dock: Dock::new(),
            launcher: Launcher::new(),
            cache: RendererCache::new(loader),
            drag: DragController::new(),
            resize: ResizeGrab::new(),
            mode: ViewportMode::Windowed,
            desktop: Rect::default(),
        }
    }

    /// Idle-turn housekeeping: settle deferred renderer loads and flush the
    /// usage log. Runs between input events, never inside one.
    pub fn tick(&mut self) {
        self.cache.settle();
        for event in self.session.take_usage_events() {
            tracing::info!(target: "usage", identity = %event.identity.label(), "app opened");
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let mode = ui::viewport_mode(area);
        if mode != self.mode {
            // mode flips mid-gesture abandon the gesture
            self.drag.cancel();
            self.resize.release();
            self.mode = mode;
        }
        let (desktop, dock_area) = ui::split_area(area);
        self.desktop = desktop;

        for window in self.session.windows() {
            self.cache.request(window.content);
        }

        ui::render_desktop(frame, desktop, &self.session, &mut self.cache, mode);
        self.dock.refresh(&self.session);
        self.dock.render(frame, dock_area, &self.session);
        if self.session.launcher_open() {
            self.launcher.refresh(&self.session);
            self.launcher.render(frame, desktop);
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return ControlFlow::Quit;
                }
                self.handle_key(key.code, key.modifiers);
            }
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
        ControlFlow::Continue
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.session.launcher_open() {
            match code {
                KeyCode::Esc => self.session.set_launcher_open(false),
                KeyCode::Up => self.launcher.move_selection(-1),
                KeyCode::Down => self.launcher.move_selection(1),
                KeyCode::Enter => {
                    self.launcher.refresh(&self.session);
                    self.launcher.activate_selected(&mut self.session);
                }
                _ => {}
            }
            return;
        }
        match code {
            KeyCode::Char('p') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.launcher.refresh(&self.session);
                self.session.set_launcher_open(true);
            }
            KeyCode::Char('w') if modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(active) = self.session.active_window() {
                    self.session.close(active);
                }
            }
            KeyCode::Char('m') if modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(active) = self.session.active_window() {
                    self.session.minimize(active);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(_) => self.pointer_down(mouse.column, mouse.row),
            MouseEventKind::Drag(_) => {
                self.drag.pointer_move(&mut self.session, mouse.column, mouse.row);
                self.resize.pointer_move(&mut self.session, mouse.column, mouse.row);
            }
            MouseEventKind::Up(_) => {
                self.drag.pointer_up();
                self.resize.release();
            }
            _ => {}
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        // dock first: it sits on top of everything except the launcher
        if self.dock.hit_launcher(column, row) {
            let open = !self.session.launcher_open();
            if open {
                self.launcher.refresh(&self.session);
            }
            self.session.set_launcher_open(open);
            return;
        }
        if let Some(index) = self.dock.hit_entry(column, row) {
            self.dock.activate(&mut self.session, index);
            return;
        }
        if self.session.launcher_open() {
            self.launcher.refresh(&self.session);
            if let Some(index) = self.launcher.hit_item(column, row) {
                self.launcher.activate(&mut self.session, index);
            } else if !self.launcher.contains(column, row) {
                self.session.set_launcher_open(false);
            }
            return;
        }

        match self.mode {
            ViewportMode::Windowed => self.pointer_down_windowed(column, row),
            ViewportMode::SmallViewport => self.pointer_down_small(column, row),
        }
    }

    fn pointer_down_windowed(&mut self, column: u16, row: u16) {
        let Some(id) = self.session.window_at(column, row) else {
            return;
        };
        let Some(window) = self.session.window(id) else {
            return;
        };
        let rect = window.rect;
        match chrome::hit_test(rect, column, row) {
            HeaderHit::Close => {
                self.session.controls(id).close(&mut self.session);
                return;
            }
            HeaderHit::Minimize => {
                self.session.controls(id).minimize(&mut self.session);
                return;
            }
            HeaderHit::Drag => {
                self.drag.pointer_down(&mut self.session, id, column, row);
                return;
            }
            HeaderHit::None => {}
        }
        let (corner_x, corner_y) = chrome::resize_corner(rect);
        if i32::from(column) == corner_x && i32::from(row) == corner_y {
            self.resize.grab(&mut self.session, id);
            return;
        }
        self.session.focus(id);
    }

    fn pointer_down_small(&mut self, column: u16, row: u16) {
        // the active window fills the desktop; only its header buttons work
        let Some(id) = self.session.active_window() else {
            return;
        };
        let Some(window) = self.session.window(id) else {
            return;
        };
        let rect = ui::effective_rect(window, self.desktop, self.mode);
        match chrome::hit_test(rect, column, row) {
            HeaderHit::Close => self.session.controls(id).close(&mut self.session),
            HeaderHit::Minimize => self.session.controls(id).minimize(&mut self.session),
            _ => {}
        }
    }
}

//! Drag-gesture scenarios, including mid-drag close teardown.

use shell_wm::apps::AppId;
use shell_wm::identity::{AppIdentity, ContentProps};
use shell_wm::session::{DragController, DragState, WindowSession};

#[test]
fn drag_moves_by_exact_pointer_delta() {
    let mut session = WindowSession::new();
    let chat = session.open(AppIdentity::Builtin(AppId::Chat), ContentProps::Empty);
    let settings = session.open(AppIdentity::Builtin(AppId::Settings), ContentProps::Empty);
    let start = session.window(chat).unwrap().rect;
    let other = session.window(settings).unwrap().rect;

    let mut drag = DragController::new();
    let (col, row) = ((start.x + 8) as u16, start.y as u16);
    drag.pointer_down(&mut session, chat, col, row);
    // drag start brings the window to front
    assert_eq!(session.active_window(), Some(chat));

    drag.pointer_move(&mut session, col + 50, row + 3);
    let moved = session.window(chat).unwrap().rect;
    assert_eq!(moved.x, start.x + 50);
    assert_eq!(moved.y, start.y + 3);
    assert_eq!(moved.width, start.width);
    assert_eq!(moved.height, start.height);

    // the other window never moved
    assert_eq!(session.window(settings).unwrap().rect, other);
    drag.pointer_up();
    assert_eq!(drag.state(), DragState::Idle);
}

#[test]
fn intermediate_moves_all_apply() {
    let mut session = WindowSession::new();
    let id = session.open(AppIdentity::Builtin(AppId::Notes), ContentProps::Empty);
    let start = session.window(id).unwrap().rect;
    let mut drag = DragController::new();
    drag.pointer_down(&mut session, id, (start.x + 1) as u16, start.y as u16);
    for step in 1..=10u16 {
        drag.pointer_move(&mut session, (start.x + 1) as u16 + step, start.y as u16 + step);
        let rect = session.window(id).unwrap().rect;
        assert_eq!(rect.x, start.x + i32::from(step));
        assert_eq!(rect.y, start.y + i32::from(step));
    }
}

#[test]
fn close_mid_drag_leaves_no_live_gesture() {
    let mut session = WindowSession::new();
    let doomed = session.open(AppIdentity::Builtin(AppId::Chat), ContentProps::Empty);
    let survivor = session.open(AppIdentity::Builtin(AppId::Notes), ContentProps::Empty);
    let rect = session.window(doomed).unwrap().rect;

    let mut drag = DragController::new();
    drag.pointer_down(&mut session, doomed, rect.x as u16, rect.y as u16);
    assert!(drag.is_dragging());

    session.close(doomed);
    let survivor_rect = session.window(survivor).unwrap().rect;
    // the next move dissolves the gesture instead of touching anything
    drag.pointer_move(&mut session, 70, 30);
    assert_eq!(drag.state(), DragState::Idle);
    assert_eq!(session.window(survivor).unwrap().rect, survivor_rect);

    // and the controller is reusable for a fresh gesture
    drag.pointer_down(&mut session, survivor, survivor_rect.x as u16, survivor_rect.y as u16);
    assert!(drag.is_dragging());
}

#[test]
fn minimize_preserves_dragged_position() {
    let mut session = WindowSession::new();
    let id = session.open(AppIdentity::Builtin(AppId::Music), ContentProps::Empty);
    let start = session.window(id).unwrap().rect;
    let mut drag = DragController::new();
    drag.pointer_down(&mut session, id, (start.x + 2) as u16, start.y as u16);
    drag.pointer_move(&mut session, (start.x + 2 + 13) as u16, (start.y + 4) as u16);
    drag.pointer_up();

    session.minimize(id);
    session.restore(id);
    let rect = session.window(id).unwrap().rect;
    assert_eq!(rect.x, start.x + 13);
    assert_eq!(rect.y, start.y + 4);
}

//! End-to-end lifecycle scenarios driven purely through the headless
//! session API.

use shell_wm::apps::AppId;
use shell_wm::identity::{AppIdentity, ContentProps};
use shell_wm::session::{WindowId, WindowSession};

fn open(session: &mut WindowSession, app: AppId) -> WindowId {
    session.open(AppIdentity::Builtin(app), ContentProps::Empty)
}

#[test]
fn reopening_a_singleton_refocuses_it() {
    let mut session = WindowSession::new();
    let chat = open(&mut session, AppId::Chat);
    assert_eq!(chat, WindowId(1));
    assert_eq!(session.window(chat).unwrap().z_index, 10);
    assert_eq!(session.active_window(), Some(chat));

    let again = open(&mut session, AppId::Chat);
    assert_eq!(again, chat);
    assert_eq!(session.windows().len(), 1);
    assert_eq!(session.window(chat).unwrap().z_index, 11);
    assert_eq!(session.active_window(), Some(chat));
}

#[test]
fn minimize_hands_activity_to_next_in_stack() {
    let mut session = WindowSession::new();
    let chat = open(&mut session, AppId::Chat);
    let settings = open(&mut session, AppId::Settings);
    assert_eq!(session.window(chat).unwrap().z_index, 10);
    assert_eq!(session.window(settings).unwrap().z_index, 11);

    session.minimize(chat);
    assert_eq!(session.active_window(), Some(settings));

    session.restore(chat);
    assert_eq!(session.window(chat).unwrap().z_index, 12);
    assert_eq!(session.active_window(), Some(chat));
}

#[test]
fn no_active_window_when_everything_is_minimized() {
    let mut session = WindowSession::new();
    let chat = open(&mut session, AppId::Chat);
    let notes = open(&mut session, AppId::Notes);
    session.minimize(chat);
    session.minimize(notes);
    assert_eq!(session.active_window(), None);
    session.restore(notes);
    assert_eq!(session.active_window(), Some(notes));
}

#[test]
fn close_leaves_remaining_stack_untouched() {
    let mut session = WindowSession::new();
    let chat = open(&mut session, AppId::Chat);
    let notes = open(&mut session, AppId::Notes);
    let settings = open(&mut session, AppId::Settings);
    let notes_z = session.window(notes).unwrap().z_index;
    let chat_z = session.window(chat).unwrap().z_index;

    session.close(settings);
    assert_eq!(session.windows().len(), 2);
    assert_eq!(session.window(notes).unwrap().z_index, notes_z);
    assert_eq!(session.window(chat).unwrap().z_index, chat_z);
    assert_eq!(session.active_window(), Some(notes));
}

#[test]
fn rapid_reopen_storm_never_duplicates() {
    let mut session = WindowSession::new();
    for _ in 0..50 {
        open(&mut session, AppId::Chat);
    }
    assert_eq!(session.windows().len(), 1);
    // every reopen still advanced the stacking counter
    assert_eq!(session.window(WindowId(1)).unwrap().z_index, 10 + 49);
}

#[test]
fn active_window_matches_max_z_after_arbitrary_operations() {
    let mut session = WindowSession::new();
    let ids: Vec<WindowId> = [AppId::Chat, AppId::Notes, AppId::Settings, AppId::Music]
        .into_iter()
        .map(|app| open(&mut session, app))
        .collect();

    session.focus(ids[0]);
    session.minimize(ids[3]);
    session.restore(ids[3]);
    session.minimize(ids[3]);
    session.close(ids[1]);
    session.focus(ids[2]);

    let expected = session
        .windows()
        .iter()
        .filter(|w| !w.minimized)
        .max_by_key(|w| w.z_index)
        .map(|w| w.id);
    assert_eq!(session.active_window(), expected);
    assert_eq!(session.active_window(), Some(ids[2]));
}

#[test]
fn titles_are_frozen_at_creation() {
    let mut session = WindowSession::new();
    let travel = open(&mut session, AppId::Travel);
    assert_eq!(session.window(travel).unwrap().title, "Travel Planner");
    session.focus(travel);
    session.minimize(travel);
    session.restore(travel);
    assert_eq!(session.window(travel).unwrap().title, "Travel Planner");
}

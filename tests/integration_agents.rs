//! Agents as first-class launchable identities: manifest loading, profile
//! windows, and snapshot-at-open semantics.

use std::io::Write;

use shell_wm::agents::AgentDefinition;
use shell_wm::apps::AppId;
use shell_wm::identity::{AppIdentity, ContentProps};
use shell_wm::session::WindowSession;

fn install_nova(session: &mut WindowSession) {
    session.agents_mut().install(AgentDefinition {
        id: "nova".into(),
        name: "Nova".into(),
        persona: "travel concierge".into(),
        capabilities: vec!["search".into(), "book".into()],
    });
}

#[test]
fn agent_opens_as_profile_window() {
    let mut session = WindowSession::new();
    install_nova(&mut session);
    let id = session.open(AppIdentity::Agent("nova".into()), ContentProps::Empty);
    let window = session.window(id).unwrap();
    assert_eq!(window.content, AppId::AgentProfile);
    assert_eq!(window.title, "Agent: Nova");
    assert_eq!(window.props.agent().unwrap().persona, "travel concierge");
}

#[test]
fn repeated_agent_opens_create_separate_windows() {
    let mut session = WindowSession::new();
    install_nova(&mut session);
    let first = session.open(AppIdentity::Agent("nova".into()), ContentProps::Empty);
    let second = session.open(AppIdentity::Agent("nova".into()), ContentProps::Empty);
    assert_ne!(first, second);
    assert_eq!(session.windows().len(), 2);
    // and they cascade apart
    assert_ne!(
        session.window(first).unwrap().rect,
        session.window(second).unwrap().rect
    );
}

#[test]
fn open_windows_survive_agent_removal() {
    let mut session = WindowSession::new();
    install_nova(&mut session);
    let id = session.open(AppIdentity::Agent("nova".into()), ContentProps::Empty);
    session.agents_mut().remove("nova");
    let window = session.window(id).unwrap();
    assert_eq!(window.title, "Agent: Nova");
    assert_eq!(window.props.agent().unwrap().name, "Nova");
}

#[test]
fn renaming_an_agent_does_not_retitle_open_windows() {
    let mut session = WindowSession::new();
    install_nova(&mut session);
    let before = session.open(AppIdentity::Agent("nova".into()), ContentProps::Empty);
    session.agents_mut().install(AgentDefinition {
        id: "nova".into(),
        name: "Supernova".into(),
        persona: String::new(),
        capabilities: Vec::new(),
    });
    let after = session.open(AppIdentity::Agent("nova".into()), ContentProps::Empty);
    assert_eq!(session.window(before).unwrap().title, "Agent: Nova");
    assert_eq!(session.window(after).unwrap().title, "Agent: Supernova");
}

#[test]
fn manifest_installs_launchable_agents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "nova", "name": "Nova", "capabilities": ["search"]}},
            {{"id": "atlas", "name": "Atlas", "persona": "researcher"}}
        ]"#
    )
    .unwrap();

    let mut session = WindowSession::new();
    assert_eq!(
        session.agents_mut().load_manifest(file.path()).unwrap(),
        2
    );
    let id = session.open(AppIdentity::Agent("atlas".into()), ContentProps::Empty);
    assert_eq!(session.window(id).unwrap().title, "Agent: Atlas");
}

#[test]
fn unknown_agent_opens_placeholder_window() {
    let mut session = WindowSession::new();
    let id = session.open(AppIdentity::Agent("ghost".into()), ContentProps::Empty);
    let window = session.window(id).unwrap();
    assert_eq!(window.content, AppId::AgentProfile);
    assert!(window.props.agent().is_none());
}

pub mod agents;
pub mod apps;
pub mod chrome;
pub mod constants;
pub mod content;
pub mod dock;
pub mod event_loop;
pub mod identity;
pub mod launcher;
pub mod renderer;
pub mod runner;
pub mod session;
pub mod theme;
pub mod tracing_sub;
pub mod ui;

pub use identity::{AppIdentity, ContentProps};
pub use session::{WindowId, WindowSession};

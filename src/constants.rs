//! Shared crate-wide constants.

/// First z-index handed out by the stacking counter. Values below this are
/// reserved for the desktop surface itself.
pub const BASE_Z_INDEX: u64 = 10;

/// First window id handed out by the session. Ids are never reused.
pub const FIRST_WINDOW_ID: u64 = 1;

/// Top-left corner of the first cascaded window, in cells relative to the
/// desktop area.
pub const CASCADE_ORIGIN_X: i32 = 4;
pub const CASCADE_ORIGIN_Y: i32 = 2;

/// Per-window cascade offset so successive windows do not perfectly overlap.
pub const CASCADE_STEP_X: i32 = 4;
pub const CASCADE_STEP_Y: i32 = 1;

/// Number of cascade slots before placement wraps back to the origin, so a
/// long session repeats the cascade instead of drifting off-screen.
pub const CASCADE_WRAP: u64 = 8;

/// Windows may not be resized below this; the resize grab is also withheld
/// once a window sits at the minimum.
pub const MIN_WINDOW_WIDTH: u16 = 24;
pub const MIN_WINDOW_HEIGHT: u16 = 6;

/// Below either threshold the shell drops into small-viewport mode: the
/// active window fills the whole desktop and drag/resize are disabled.
pub const SMALL_VIEWPORT_WIDTH: u16 = 70;
pub const SMALL_VIEWPORT_HEIGHT: u16 = 20;

/// Height of the dock bar at the bottom of the viewport, in rows.
pub const DOCK_HEIGHT: u16 = 1;

/// Title shown for identities missing from the title table.
pub const FALLBACK_TITLE: &str = "Application";

/// Prefix used for windows hosting an installed agent's profile.
pub const AGENT_TITLE_PREFIX: &str = "Agent";

//! Display, layout and timing constants for the desktop front end.
//!
//! Layout positions are derived from the screen size at compile time, so the
//! drawing code never recomputes them per frame. Simulation constants (tick
//! period, speed cap, initial state) live in `dashboard_common::config`.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ LOCK 12:42 PM                  290 mi  [82%] │  STATUS_BAR_HEIGHT
//! ├──────────────────────────────────────────────┤
//! │  65 MPH              │  Navigate to HQ        │
//! │  DRIVING             │  3500 Deer Creek Rd    │  MAIN_HEIGHT
//! ├──────────────────────────────────────────────┤
//! │   [Lock]        [Climate]        [Frunk]     │  CONTROLS_HEIGHT
//! ├──────────────────────────────────────────────┤
//! │  68° ✢                     ( P  R  N  D )    │  DOCK_HEIGHT
//! └──────────────────────────────────────────────┘
//! ```

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window pixel scale.
pub const WINDOW_SCALE: u32 = 2;

/// Window title.
pub const WINDOW_TITLE: &str = "Cybertruck Dashboard";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame finishes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long a lock/frunk confirmation popup stays on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

// =============================================================================
// Layout Rows
// =============================================================================

/// Status bar height (lock, clock, range, battery).
pub const STATUS_BAR_HEIGHT: u32 = 20;

/// Quick controls row height.
pub const CONTROLS_HEIGHT: u32 = 50;

/// Dock height (climate and gear selector).
pub const DOCK_HEIGHT: u32 = 44;

/// Main area height (speed readout and navigation card).
pub const MAIN_HEIGHT: u32 = SCREEN_HEIGHT - STATUS_BAR_HEIGHT - CONTROLS_HEIGHT - DOCK_HEIGHT;

/// Top of the main area.
pub const MAIN_Y: u32 = STATUS_BAR_HEIGHT;

/// Top of the quick controls row.
pub const CONTROLS_Y: u32 = MAIN_Y + MAIN_HEIGHT;

/// Top of the dock.
pub const DOCK_Y: u32 = CONTROLS_Y + CONTROLS_HEIGHT;

const _: () = assert!(DOCK_Y + DOCK_HEIGHT == SCREEN_HEIGHT);

// =============================================================================
// Layout Columns
// =============================================================================

/// Width of the speed panel on the left of the main area.
pub const SPEED_PANEL_WIDTH: u32 = 130;

/// Width of each quick control slot.
pub const CONTROL_SLOT_WIDTH: u32 = SCREEN_WIDTH / 3;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Static Content
// =============================================================================

/// Clock text in the status bar. The mockup has no real clock.
pub const CLOCK_TEXT: &str = "12:42 PM";

/// Navigation card destination.
pub const NAV_TITLE: &str = "Navigate to HQ";

/// Navigation card address line.
pub const NAV_ADDRESS: &str = "3500 Deer Creek Rd";

/// Navigation card city line.
pub const NAV_CITY: &str = "Palo Alto";

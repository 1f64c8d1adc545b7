//! Widget components for the dashboard display.
//!
//! - [`status_bar`]: lock indicator, clock, range and battery
//! - [`speed`]: speed readout and navigation card
//! - [`controls`]: Lock, Climate and Frunk buttons with fading fills
//! - [`dock`]: climate readout and gear selector
//! - [`popups`]: lock and frunk confirmation overlays
//! - [`primitives`]: shared fills, pills and glyphs
//!
//! Every region widget repaints its own background first, so the main loop can
//! redraw any region on its own when that region is dirty.

mod controls;
mod dock;
mod popups;
mod primitives;
mod speed;
mod status_bar;

pub use controls::{draw_controls, update_control_targets};
pub use dock::draw_dock;
pub use popups::{draw_frunk_popup, draw_lock_popup};
pub use speed::{draw_nav_card, draw_speed_panel};
pub use status_bar::draw_status_bar;

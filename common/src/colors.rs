//! RGB565 palette for the dashboard.
//!
//! The panel is monochrome apart from a blue accent for climate and the red
//! popup background. Built-in `RgbColor` constants are used where they exist.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Panel background and text on active buttons.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Primary text and active button fill.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Popup background.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Debug page header and log prompt.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Highlighted debug values.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange log text on the debug page.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Divider lines. RGB565 (8, 16, 8), roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Inactive button fill (dark gray).
pub const DARK_GRAY: Rgb565 = Rgb565::new(4, 9, 5);

/// Secondary text (labels, units, unselected gears).
pub const MID_GRAY: Rgb565 = Rgb565::new(14, 29, 15);

/// Climate accent and spinning fan.
pub const BLUE: Rgb565 = Rgb565::new(7, 32, 31);

/// Dock background, slightly lifted from black.
pub const PANEL_BG: Rgb565 = Rgb565::new(2, 4, 2);

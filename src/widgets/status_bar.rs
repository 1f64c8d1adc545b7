//! Status bar: lock indicator and clock on the left, range and battery on the
//! right, divider line underneath.
//!
//! Positions are fixed `const` values derived from the layout constants.

use core::fmt::Write;

use dashboard_common::VehicleState;
use dashboard_common::colors::{BLACK, GRAY, WHITE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use super::primitives::{draw_battery_glyph, draw_lock_glyph, fill_region};
use crate::config::{CLOCK_TEXT, SCREEN_WIDTH, STATUS_BAR_HEIGHT};
use crate::styles::{LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};

// =============================================================================
// Layout Constants
// =============================================================================

/// Text baseline inside the bar.
const TEXT_Y: i32 = 13;

/// Padlock body top-left.
const LOCK_POS: Point = Point::new(6, 8);

/// Clock text start (after the padlock slot).
const CLOCK_POS: Point = Point::new(20, TEXT_Y);

/// Battery glyph top-left (right edge minus glyph and nub).
const BATTERY_X: i32 = SCREEN_WIDTH as i32 - 26;
const BATTERY_Y: i32 = 5;

/// Right edge of the range/percentage text.
const RANGE_RIGHT_POS: Point = Point::new(BATTERY_X - 6, TEXT_Y);

/// Divider under the bar.
const DIVIDER_START: Point = Point::new(0, STATUS_BAR_HEIGHT as i32 - 1);
const DIVIDER_END: Point = Point::new(SCREEN_WIDTH as i32 - 1, STATUS_BAR_HEIGHT as i32 - 1);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the status bar for `state`.
///
/// The padlock is only drawn while locked, the clock stays put either way.
pub fn draw_status_bar(
    display: &mut SimulatorDisplay<Rgb565>,
    state: &VehicleState,
) {
    fill_region(display, 0, 0, SCREEN_WIDTH, STATUS_BAR_HEIGHT - 1, BLACK);

    if state.is_locked {
        draw_lock_glyph(display, LOCK_POS.x, LOCK_POS.y, WHITE);
    }

    Text::with_text_style(CLOCK_TEXT, CLOCK_POS, LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let mut range_str: String<24> = String::new();
    let _ = write!(range_str, "{} mi  {}%", state.range, state.battery_level);
    Text::with_text_style(&range_str, RANGE_RIGHT_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    draw_battery_glyph(display, BATTERY_X, BATTERY_Y, state.battery_level, WHITE);

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

//! Non-modal confirmation popups for the lock and frunk toggles.
//!
//! Popups appear centered on screen with a white border and red background.
//! Only one popup displays at a time (most recent wins). Key input is still
//! processed while a popup is visible.
//!
//! Geometry and fill styles are `const`, so nothing is recomputed per frame.

use dashboard_common::colors::{RED, WHITE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

// =============================================================================
// Layout Constants
// =============================================================================

const POPUP_WIDTH: u32 = 160;
const POPUP_HEIGHT: u32 = 50;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

/// Outer white rectangle, 3px larger on every side.
const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);

/// Inner red rectangle.
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

/// Single line of text, vertically centered.
const TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 5);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

// =============================================================================
// Messages
// =============================================================================

/// Popup text after a lock toggle.
#[inline]
pub const fn lock_message(locked: bool) -> &'static str { if locked { "LOCKED" } else { "UNLOCKED" } }

/// Popup text after a frunk toggle.
#[inline]
pub const fn frunk_message(open: bool) -> &'static str { if open { "FRUNK OPEN" } else { "FRUNK CLOSED" } }

// =============================================================================
// Drawing
// =============================================================================

fn draw_popup(
    display: &mut SimulatorDisplay<Rgb565>,
    message: &str,
) {
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(RED_FILL)
        .draw(display)
        .ok();

    Text::with_text_style(message, TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the "LOCKED" / "UNLOCKED" popup.
pub fn draw_lock_popup(
    display: &mut SimulatorDisplay<Rgb565>,
    locked: bool,
) {
    draw_popup(display, lock_message(locked));
}

/// Draw the "FRUNK OPEN" / "FRUNK CLOSED" popup.
pub fn draw_frunk_popup(
    display: &mut SimulatorDisplay<Rgb565>,
    open: bool,
) {
    draw_popup(display, frunk_message(open));
}

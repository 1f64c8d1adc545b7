//! Main area: speed readout on the left, navigation card on the right.

use core::fmt::Write;

use dashboard_common::VehicleState;
use dashboard_common::colors::{BLACK, BLUE, GRAY, PANEL_BG};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use super::primitives::fill_region;
use crate::config::{MAIN_HEIGHT, MAIN_Y, NAV_ADDRESS, NAV_CITY, NAV_TITLE, SCREEN_WIDTH, SPEED_PANEL_WIDTH};
use crate::styles::{CENTERED, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LEFT_ALIGNED, SPEED_STYLE, TITLE_STYLE_WHITE};

// =============================================================================
// Speed Panel Layout
// =============================================================================

/// Speed value baseline.
const SPEED_POS: Point = Point::new(16, MAIN_Y as i32 + 58);

/// "MPH" unit, after three digits of `ProFont` 24pt.
const UNIT_POS: Point = Point::new(16 + 3 * 16 + 6, MAIN_Y as i32 + 58);

/// "PARKED" / "DRIVING" baseline.
const STATUS_POS: Point = Point::new(16, MAIN_Y as i32 + 78);

// =============================================================================
// Navigation Card Layout
// =============================================================================

const NAV_X: u32 = SPEED_PANEL_WIDTH;
const NAV_W: u32 = SCREEN_WIDTH - SPEED_PANEL_WIDTH - 8;
const NAV_CARD: Rectangle = Rectangle::new(
    Point::new(NAV_X as i32, MAIN_Y as i32 + 8),
    Size::new(NAV_W, MAIN_HEIGHT - 16),
);
const NAV_CENTER_X: i32 = (NAV_X + NAV_W / 2) as i32;
const NAV_PIN_POS: Point = Point::new(NAV_CENTER_X, MAIN_Y as i32 + 36);
const NAV_TITLE_POS: Point = Point::new(NAV_CENTER_X, MAIN_Y as i32 + 64);
const NAV_ADDRESS_POS: Point = Point::new(NAV_CENTER_X, MAIN_Y as i32 + 84);
const NAV_CITY_POS: Point = Point::new(NAV_CENTER_X, MAIN_Y as i32 + 96);

const NAV_CARD_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL_BG);
const NAV_PIN_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLUE, 3);

// =============================================================================
// Drawing
// =============================================================================

/// Drive status is bright while the vehicle has speed, dimmed at rest.
pub fn status_style(state: &VehicleState) -> MonoTextStyle<'static, Rgb565> {
    if state.is_moving() { LABEL_STYLE_WHITE } else { LABEL_STYLE_GRAY }
}

/// Draw the speed readout for `state`.
pub fn draw_speed_panel(
    display: &mut SimulatorDisplay<Rgb565>,
    state: &VehicleState,
) {
    fill_region(display, 0, MAIN_Y, SPEED_PANEL_WIDTH, MAIN_HEIGHT, BLACK);

    let mut speed_str: String<8> = String::new();
    let _ = write!(speed_str, "{}", state.speed);
    Text::with_text_style(&speed_str, SPEED_POS, SPEED_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style("MPH", UNIT_POS, LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(state.drive_status(), STATUS_POS, status_style(state), LEFT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the static navigation card.
pub fn draw_nav_card(display: &mut SimulatorDisplay<Rgb565>) {
    fill_region(
        display,
        SPEED_PANEL_WIDTH,
        MAIN_Y,
        SCREEN_WIDTH - SPEED_PANEL_WIDTH,
        MAIN_HEIGHT,
        BLACK,
    );

    RoundedRectangle::with_equal_corners(NAV_CARD, Size::new(8, 8))
        .into_styled(NAV_CARD_STYLE)
        .draw(display)
        .ok();

    Circle::with_center(NAV_PIN_POS, 11)
        .into_styled(NAV_PIN_STYLE)
        .draw(display)
        .ok();
    Text::with_text_style(NAV_TITLE, NAV_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(NAV_ADDRESS, NAV_ADDRESS_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(NAV_CITY, NAV_CITY_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();

    // Card edge so the panel reads as a separate surface
    RoundedRectangle::with_equal_corners(NAV_CARD, Size::new(8, 8))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use dashboard_common::Gear;
    use dashboard_common::colors::{MID_GRAY, WHITE};

    use super::*;

    #[test]
    fn test_status_style_follows_motion() {
        let rolling = VehicleState {
            speed: 12,
            gear: Gear::Neutral,
            ..VehicleState::new()
        };
        assert_eq!(status_style(&rolling).text_color, Some(WHITE));

        // Still moving while Park bleeds off speed
        let stopping = VehicleState {
            speed: 4,
            gear: Gear::Park,
            ..VehicleState::new()
        };
        assert_eq!(status_style(&stopping).text_color, Some(WHITE));

        assert_eq!(status_style(&VehicleState::new()).text_color, Some(MID_GRAY));
    }
}

//! Bottom dock: climate readout on the left, gear selector on the right.

use core::fmt::Write;

use dashboard_common::animations::fan_blade_offsets;
use dashboard_common::colors::{BLACK, BLUE, DARK_GRAY, GRAY, WHITE};
use dashboard_common::{Gear, VehicleState};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use super::primitives::{draw_fan_glyph, draw_pill, fill_region};
use crate::config::{DOCK_HEIGHT, DOCK_Y, SCREEN_WIDTH};
use crate::styles::{CENTERED, CLIMATE_STYLE_OFF, CLIMATE_STYLE_ON, GEAR_STYLE_IDLE, GEAR_STYLE_SELECTED, LEFT_ALIGNED};

// =============================================================================
// Layout Constants
// =============================================================================

const DOCK_MID_Y: i32 = DOCK_Y as i32 + DOCK_HEIGHT as i32 / 2;

const FAN_CENTER: Point = Point::new(22, DOCK_MID_Y);
const FAN_RADIUS: f32 = 8.0;
const CLIMATE_TEXT_POS: Point = Point::new(38, DOCK_MID_Y + 5);

/// Horizontal distance between gear letter centers.
const GEAR_PITCH: i32 = 28;
const GEAR_PILL_SIZE: Size = Size::new(24, 26);
const GEAR_TRACK_SIZE: Size = Size::new(GEAR_PITCH as u32 * 4 + 8, 32);
const GEAR_TRACK_X: i32 = SCREEN_WIDTH as i32 - GEAR_TRACK_SIZE.width as i32 - 10;
const GEAR_TRACK_Y: i32 = DOCK_MID_Y - GEAR_TRACK_SIZE.height as i32 / 2;
const GEAR_FIRST_CENTER_X: i32 = GEAR_TRACK_X + 4 + GEAR_PITCH / 2;
const GEAR_TEXT_Y: i32 = DOCK_MID_Y + 6;

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Formatting
// =============================================================================

/// Climate readout: the set point with a degree sign while on, `--` while off.
pub fn climate_label(state: &VehicleState) -> String<8> {
    let mut label: String<8> = String::new();
    match state.climate_set_point() {
        Some(set_point) => {
            let _ = write!(label, "{set_point}\u{b0}");
        }
        None => {
            let _ = label.push_str("--");
        }
    }
    label
}

/// Horizontal center of a gear letter in the selector.
#[inline]
pub const fn gear_center_x(gear: Gear) -> i32 { GEAR_FIRST_CENTER_X + gear.index() as i32 * GEAR_PITCH }

// =============================================================================
// Drawing
// =============================================================================

/// Draw the dock for `state`.
///
/// `frame` drives the fan rotation while climate is on.
pub fn draw_dock(
    display: &mut SimulatorDisplay<Rgb565>,
    state: &VehicleState,
    frame: u32,
) {
    fill_region(display, 0, DOCK_Y, SCREEN_WIDTH, DOCK_HEIGHT, BLACK);

    Line::new(Point::new(0, DOCK_Y as i32), Point::new(SCREEN_WIDTH as i32 - 1, DOCK_Y as i32))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    // Climate
    let tips = fan_blade_offsets(frame, state.climate_on, FAN_RADIUS);
    let fan_color = if state.climate_on { BLUE } else { GRAY };
    draw_fan_glyph(display, FAN_CENTER, &tips, fan_color);

    let climate_style = if state.climate_on { CLIMATE_STYLE_ON } else { CLIMATE_STYLE_OFF };
    Text::with_text_style(&climate_label(state), CLIMATE_TEXT_POS, climate_style, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Gear selector
    draw_pill(display, Point::new(GEAR_TRACK_X, GEAR_TRACK_Y), GEAR_TRACK_SIZE, DARK_GRAY);

    let selected_x = gear_center_x(state.gear);
    draw_pill(
        display,
        Point::new(
            selected_x - GEAR_PILL_SIZE.width as i32 / 2,
            DOCK_MID_Y - GEAR_PILL_SIZE.height as i32 / 2,
        ),
        GEAR_PILL_SIZE,
        WHITE,
    );

    for gear in Gear::ALL {
        let style = if gear == state.gear { GEAR_STYLE_SELECTED } else { GEAR_STYLE_IDLE };
        let mut letter: String<4> = String::new();
        let _ = letter.push(gear.as_char());
        Text::with_text_style(&letter, Point::new(gear_center_x(gear), GEAR_TEXT_Y), style, CENTERED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_climate_label_on() {
        let state = VehicleState {
            climate_on: true,
            ..VehicleState::new()
        };
        assert_eq!(climate_label(&state).as_str(), "68°");
    }

    #[test]
    fn test_climate_label_off() {
        let state = VehicleState {
            climate_on: false,
            ..VehicleState::new()
        };
        assert_eq!(climate_label(&state).as_str(), "--");
    }

    #[test]
    fn test_gear_centers_ordered_and_on_screen() {
        let mut prev = i32::MIN;
        for gear in Gear::ALL {
            let x = gear_center_x(gear);
            assert!(x > prev);
            assert!(x < SCREEN_WIDTH as i32);
            prev = x;
        }
        assert_eq!(gear_center_x(Gear::Reverse) - gear_center_x(Gear::Park), GEAR_PITCH);
    }
}

//! Quick controls row: Lock, Climate and Frunk buttons.
//!
//! Each button is a pill whose fill comes from the color transition state, so
//! toggling fades between white (active) and dark gray (inactive). The label
//! flips between black and white text depending on the current fill.

use dashboard_common::VehicleState;
use dashboard_common::animations::{CONTROL_COUNT, ColorTransition, control_idx};
use dashboard_common::colors::{BLACK, DARK_GRAY, WHITE};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use super::primitives::{draw_pill, fill_region};
use crate::config::{CONTROL_SLOT_WIDTH, CONTROLS_HEIGHT, CONTROLS_Y, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_FONT, LABEL_STYLE_GRAY};

// =============================================================================
// Layout Constants
// =============================================================================

const BUTTON_SIZE: Size = Size::new(CONTROL_SLOT_WIDTH - 24, 26);
const BUTTON_Y: i32 = CONTROLS_Y as i32 + 6;
const LABEL_Y: i32 = BUTTON_Y + 17;
const CAPTION_Y: i32 = BUTTON_Y + BUTTON_SIZE.height as i32 + 12;

/// Button text and caption under it, in slot order.
const BUTTONS: [(&str, &str); CONTROL_COUNT] = [("LOCK", "Doors"), ("CLIMATE", "Cabin"), ("FRUNK", "Front trunk")];

// =============================================================================
// Targets
// =============================================================================

/// Target fill for a control.
#[inline]
pub const fn button_fill(active: bool) -> Rgb565 { if active { WHITE } else { DARK_GRAY } }

/// Point every control's fade at the fill matching `state`.
pub fn update_control_targets(
    transition: &mut ColorTransition,
    state: &VehicleState,
) {
    transition.set_target(control_idx::LOCK, button_fill(state.is_locked));
    transition.set_target(control_idx::CLIMATE, button_fill(state.climate_on));
    transition.set_target(control_idx::FRUNK, button_fill(state.frunk_open));
}

/// Text color that stays readable on `fill`.
///
/// Uses the 6-bit green channel as a cheap luminance proxy.
pub fn label_color_for_fill(fill: Rgb565) -> Rgb565 { if fill.g() > 31 { BLACK } else { WHITE } }

// =============================================================================
// Drawing
// =============================================================================

/// Draw the quick controls row with the current fade colors.
pub fn draw_controls(
    display: &mut SimulatorDisplay<Rgb565>,
    transition: &ColorTransition,
) {
    fill_region(display, 0, CONTROLS_Y, SCREEN_WIDTH, CONTROLS_HEIGHT, BLACK);

    for (slot, (label, caption)) in BUTTONS.iter().enumerate() {
        let slot_x = slot as i32 * CONTROL_SLOT_WIDTH as i32;
        let center_x = slot_x + CONTROL_SLOT_WIDTH as i32 / 2;
        let fill = transition.get_current(slot);

        draw_pill(
            display,
            Point::new(center_x - BUTTON_SIZE.width as i32 / 2, BUTTON_Y),
            BUTTON_SIZE,
            fill,
        );

        let label_style = MonoTextStyle::new(LABEL_FONT, label_color_for_fill(fill));
        Text::with_text_style(label, Point::new(center_x, LABEL_Y), label_style, CENTERED)
            .draw(display)
            .ok();

        Text::with_text_style(caption, Point::new(center_x, CAPTION_Y), LABEL_STYLE_GRAY, CENTERED)
            .draw(display)
            .ok();
    }
}

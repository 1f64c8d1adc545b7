//! Animation helpers for the control panel.
//!
//! - **Color transitions**: quick-control buttons fade between their active
//!   (white) and inactive (dark gray) fills instead of snapping.
//! - **Fan spin**: blade endpoints for the climate fan glyph, rotating while
//!   climate is on.
//!
//! Both are frame-based and use fixed-size arrays, so they run in `no_std`.
//! Trigonometry goes through `micromath`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;
// std's inherent f32 methods shadow the trait under test
#[cfg_attr(test, allow(unused_imports))]
use micromath::F32Ext;

use crate::colors::BLACK;

// =============================================================================
// Color Transition Constants
// =============================================================================

/// Number of quick-control buttons with animated fills (Lock, Climate, Frunk).
pub const CONTROL_COUNT: usize = 3;

/// Button indices into [`ColorTransition`].
pub mod control_idx {
    pub const LOCK: usize = 0;
    pub const CLIMATE: usize = 1;
    pub const FRUNK: usize = 2;
}

/// Fraction of the remaining distance covered per frame (0.0-1.0).
/// At 0.25 and 50 FPS a full fade takes roughly 200ms.
const COLOR_LERP_SPEED: f32 = 0.25;

/// Manhattan distance (in RGB565 component units) below which a fade snaps
/// to its target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Fan Spin Constants
// =============================================================================

/// Number of fan blades.
pub const FAN_BLADES: usize = 3;

/// Rotation per frame in radians (~1 turn per second at 50 FPS).
const FAN_RADIANS_PER_FRAME: f32 = core::f32::consts::TAU / 50.0;

// =============================================================================
// Color Transition State
// =============================================================================

/// Per-button fill color easing toward a target.
pub struct ColorTransition {
    current: [Rgb565; CONTROL_COUNT],
    target: [Rgb565; CONTROL_COUNT],
    transitioning: [bool; CONTROL_COUNT],
}

impl ColorTransition {
    /// All buttons start black with no fade in progress.
    pub const fn new() -> Self {
        Self {
            current: [BLACK; CONTROL_COUNT],
            target: [BLACK; CONTROL_COUNT],
            transitioning: [false; CONTROL_COUNT],
        }
    }

    /// Set a button's target fill. Returns `true` if a new fade started.
    pub fn set_target(
        &mut self,
        idx: usize,
        target: Rgb565,
    ) -> bool {
        if self.target[idx] == target {
            false
        } else {
            self.target[idx] = target;
            self.transitioning[idx] = true;
            true
        }
    }

    /// Fill to draw this frame.
    #[inline]
    pub const fn get_current(
        &self,
        idx: usize,
    ) -> Rgb565 {
        self.current[idx]
    }

    /// Whether any button is mid-fade.
    pub fn is_animating(&self) -> bool { self.transitioning.iter().any(|t| *t) }

    /// Advance every fade by one frame. Returns a bitmask of changed buttons.
    pub fn update(&mut self) -> u8 {
        let mut changed: u8 = 0;

        for i in 0..CONTROL_COUNT {
            if !self.transitioning[i] {
                continue;
            }

            let target = self.target[i];
            if self.current[i] == target {
                self.transitioning[i] = false;
                continue;
            }

            let next = lerp_rgb565(self.current[i], target, COLOR_LERP_SPEED);
            if colors_close_enough(next, target) {
                self.current[i] = target;
                self.transitioning[i] = false;
            } else {
                self.current[i] = next;
            }
            changed |= 1 << i;
        }

        changed
    }
}

impl Default for ColorTransition {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Fan Spin
// =============================================================================

/// Blade tip offsets from the fan hub for the given frame.
///
/// When `spinning` is false the fan rests at its frame-0 pose.
pub fn fan_blade_offsets(
    frame: u32,
    spinning: bool,
    radius: f32,
) -> [(i32, i32); FAN_BLADES] {
    let base = if spinning {
        (frame % 50) as f32 * FAN_RADIANS_PER_FRAME
    } else {
        0.0
    };

    let mut tips = [(0, 0); FAN_BLADES];
    for (i, tip) in tips.iter_mut().enumerate() {
        let angle = base + i as f32 * (core::f32::consts::TAU / FAN_BLADES as f32);
        *tip = ((angle.cos() * radius).round() as i32, (angle.sin() * radius).round() as i32);
    }
    tips
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

fn components(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        ((raw >> 11) & 0x1F) as i32,
        ((raw >> 5) & 0x3F) as i32,
        (raw & 0x1F) as i32,
    )
}

/// Linear interpolation in RGB565 space with 8-bit fixed point.
///
/// Every non-zero component delta moves at least one unit so fades never stall.
fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let (fr, fg, fb) = components(from);
    let (tr, tg, tb) = components(to);
    let t_fixed = (t * 256.0) as i32;

    let step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            return 0;
        }
        match (delta * t_fixed) >> 8 {
            0 => delta.signum(),
            s => s,
        }
    };

    let r = (fr + step(tr - fr)).clamp(0, 31);
    let g = (fg + step(tg - fg)).clamp(0, 63);
    let b = (fb + step(tb - fb)).clamp(0, 31);
    Rgb565::new(r as u8, g as u8, b as u8)
}

fn colors_close_enough(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    let (ar, ag, ab) = components(a);
    let (br, bg, bb) = components(b);
    (ar - br).abs() + (ag - bg).abs() + (ab - bb).abs() <= COLOR_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK_GRAY, WHITE};

    #[test]
    fn test_transition_starts_black_and_idle() {
        let transition = ColorTransition::new();
        assert_eq!(transition.get_current(control_idx::LOCK), BLACK);
        assert!(!transition.is_animating());
    }

    #[test]
    fn test_set_target_same_color_is_noop() {
        let mut transition = ColorTransition::new();
        assert!(!transition.set_target(control_idx::CLIMATE, BLACK));
        assert!(transition.set_target(control_idx::CLIMATE, WHITE));
        assert!(!transition.set_target(control_idx::CLIMATE, WHITE));
    }

    #[test]
    fn test_transition_reaches_target() {
        let mut transition = ColorTransition::new();
        transition.set_target(control_idx::FRUNK, WHITE);

        let mut frames = 0;
        while transition.is_animating() {
            transition.update();
            frames += 1;
            assert!(frames < 100, "fade never finished");
        }
        assert_eq!(transition.get_current(control_idx::FRUNK), WHITE);
        assert_eq!(transition.get_current(control_idx::LOCK), BLACK);
    }

    #[test]
    fn test_update_reports_changed_buttons() {
        let mut transition = ColorTransition::new();
        transition.set_target(control_idx::LOCK, DARK_GRAY);
        transition.set_target(control_idx::FRUNK, WHITE);

        let changed = transition.update();
        assert_eq!(changed, (1 << control_idx::LOCK) | (1 << control_idx::FRUNK));
    }

    #[test]
    fn test_changes_only_while_animating() {
        let mut transition = ColorTransition::new();
        transition.set_target(control_idx::CLIMATE, WHITE);

        let mut frames = 0;
        loop {
            let was_animating = transition.is_animating();
            let changed = transition.update();
            if changed == 0 && !was_animating {
                break;
            }
            assert!(was_animating, "changed without a fade in progress");
            frames += 1;
            assert!(frames < 100, "fade never finished");
        }
        assert_eq!(transition.get_current(control_idx::CLIMATE), WHITE);
    }

    #[test]
    fn test_lerp_minimum_step() {
        let from = Rgb565::new(0, 0, 0);
        let to = Rgb565::new(1, 1, 1);
        assert_eq!(lerp_rgb565(from, to, 0.25), to);
    }

    #[test]
    fn test_fan_at_rest_is_frame_independent() {
        assert_eq!(fan_blade_offsets(0, false, 5.0), fan_blade_offsets(17, false, 5.0));
    }

    #[test]
    fn test_fan_rotates_when_spinning() {
        assert_ne!(fan_blade_offsets(0, true, 5.0), fan_blade_offsets(10, true, 5.0));
    }

    #[test]
    fn test_fan_first_blade_points_right_at_rest() {
        let tips = fan_blade_offsets(0, false, 5.0);
        assert_eq!(tips[0], (5, 0));
    }
}

//! Loading screen with console-style wake-up messages.
//!
//! Shows a spinner title and a short sequence of messages before the vehicle
//! page takes over.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │    |  Waking vehicle  /            │  Title with spinner
//! │────────────────────────────────────│  Divider line
//! │   Waking vehicle...                │
//! │   Checking battery...              │  Console output
//! │   Battery 82% | 290 mi             │
//! │ > Ready.                           │
//! └────────────────────────────────────┘
//! ```

use core::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use dashboard_common::VehicleState;
use dashboard_common::colors::{BLACK, RED, WHITE};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use heapless::{String, Vec};

use crate::config::CENTER_X;
use crate::styles::{CENTERED, LEFT_ALIGNED};

// =============================================================================
// Layout Constants
// =============================================================================

const TITLE_POS: Point = Point::new(CENTER_X, 25);
const LINE_START: Point = Point::new(10, 35);
const LINE_END: Point = Point::new(310, 35);
const CONSOLE_X: i32 = 10;
const CONSOLE_START_Y: i32 = 50;
const CONSOLE_LINE_HEIGHT: i32 = 14;

/// Console lines kept on screen before the oldest scrolls off.
const CONSOLE_MAX_LINES: usize = 12;

const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, RED);
const CONSOLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RED, 1);

const SPINNER_CHARS: [char; 4] = ['|', '/', '-', '\\'];

type ConsoleLine = String<40>;

// =============================================================================
// Boot Messages
// =============================================================================

/// Messages shown in order, with how long each stays current.
///
/// The battery line is built from `initial` so it matches the first frame of
/// the vehicle page.
pub fn boot_messages(initial: &VehicleState) -> Vec<(ConsoleLine, Duration), 6> {
    let mut messages: Vec<(ConsoleLine, Duration), 6> = Vec::new();
    let mut push = |text: &str, ms: u64| {
        let mut line = ConsoleLine::new();
        let _ = line.push_str(text);
        let _ = messages.push((line, Duration::from_millis(ms)));
    };

    push("Waking vehicle...", 700);
    push("Checking battery...", 600);

    let mut battery = ConsoleLine::new();
    let _ = write!(battery, "Battery {}% | {} mi", initial.battery_level, initial.range);
    push(battery.as_str(), 600);

    push(if initial.is_locked { "Doors locked" } else { "Doors unlocked" }, 400);
    push("Loading navigation...", 500);
    push("Ready.", 400);
    messages
}

// =============================================================================
// Loading Screen
// =============================================================================

/// Run the loading sequence.
///
/// Returns `false` if the window is closed, `true` when the sequence completes.
pub fn run_loading_screen(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    initial: &VehicleState,
) -> bool {
    let mut spinner_idx = 0;
    let mut spinner_frame = 0u32;
    let mut console_lines: std::vec::Vec<ConsoleLine> = std::vec::Vec::new();

    for (msg, duration) in boot_messages(initial) {
        log::debug!("boot: {msg}");
        console_lines.push(msg);
        if console_lines.len() > CONSOLE_MAX_LINES {
            console_lines.remove(0);
        }

        let msg_start = Instant::now();
        while msg_start.elapsed() < duration {
            if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
                return false;
            }

            display.clear(WHITE).ok();

            // Every 8 frames (~130ms)
            spinner_frame = spinner_frame.wrapping_add(1);
            if spinner_frame.is_multiple_of(8) {
                spinner_idx = (spinner_idx + 1) % SPINNER_CHARS.len();
            }
            let left_spinner = SPINNER_CHARS[spinner_idx];
            let right_spinner = SPINNER_CHARS[(spinner_idx + 2) % SPINNER_CHARS.len()];

            let mut title: String<32> = String::new();
            let _ = write!(title, "{left_spinner}  Waking vehicle  {right_spinner}");
            Text::with_text_style(&title, TITLE_POS, TITLE_STYLE, CENTERED)
                .draw(display)
                .ok();

            Line::new(LINE_START, LINE_END)
                .into_styled(DIVIDER_STYLE)
                .draw(display)
                .ok();

            let last = console_lines.len() - 1;
            for (i, line) in console_lines.iter().enumerate() {
                let y_pos = CONSOLE_START_Y + i as i32 * CONSOLE_LINE_HEIGHT;
                let prefix = if i == last { "> " } else { "  " };
                let mut full_line: String<48> = String::new();
                let _ = write!(full_line, "{prefix}{line}");
                Text::with_text_style(&full_line, Point::new(CONSOLE_X, y_pos), CONSOLE_STYLE, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
            }

            window.update(display);
            thread::sleep(Duration::from_millis(16));
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_boot_messages_end_with_ready() {
        let messages = boot_messages(&VehicleState::new());
        assert_eq!(messages.last().map(|(m, _)| m.as_str()), Some("Ready."));
    }

    #[test]
    fn test_boot_messages_report_initial_battery() {
        let messages = boot_messages(&VehicleState::new());
        assert_eq!(messages[2].0.as_str(), "Battery 82% | 290 mi");
        assert_eq!(messages[3].0.as_str(), "Doors locked");
    }

    #[test]
    fn test_boot_messages_fit_console() {
        let messages = boot_messages(&VehicleState::new());
        assert_eq!(messages.len(), 6);
        assert!(messages.len() <= CONSOLE_MAX_LINES);
    }
}

//! Debug/profiling page rendering.
//!
//! Displays frame timing, simulation counters, render counters and the event
//! log terminal. Toggled from the vehicle page with the `Y` key.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DEBUG VIEW                              UP 00:12:34       50 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ TIMING              │ SIM               │ RENDER                 │
//! │ Frame:  20.0ms      │ Ticks: 6104       │ Frames: 36620          │
//! │ Render: 0.5ms       │ Max/f: 1          │ Regions: 1840          │
//! │ Sleep:  19.5ms      │ Intents: 12       │ Clears: 5              │
//! │ Min:    19.8ms      │ Speed: 65         │ Log: 12                │
//! │ Max:    25.1ms      │ Range: 281        │                        │
//! │ Avg:    20.1ms      │ Gear: D           │                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > Gear: D                                                        │
//! │ > Page: Debug                                                    │
//! │ > _                                                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use dashboard_common::VehicleState;
use dashboard_common::colors::{BLACK, GRAY, GREEN, ORANGE, WHITE, YELLOW};
use dashboard_common::debug_log::DebugLog;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::profiling::ProfilingMetrics;
use crate::styles::LABEL_FONT;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 12;

/// Y position of divider below header
const HEADER_DIVIDER_Y: i32 = 18;

/// Y position where stats section headers start
const SECTION_HEADER_Y: i32 = 28;

/// Y position where stats values start
const STATS_Y: i32 = 40;

/// Y position of divider above log
const LOG_DIVIDER_Y: i32 = 130;

/// Y position where log terminal starts
const LOG_Y: i32 = 138;

const LOG_LINE_HEIGHT: i32 = 12;

/// Column X positions
const COL1_X: i32 = 4;
const COL2_X: i32 = 110;
const COL3_X: i32 = 215;

const STAT_LINE_HEIGHT: i32 = 13;

// =============================================================================
// Colors
// =============================================================================

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;

/// Highlight color for min/max/avg and vehicle values
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;

const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const LOG_TEXT_COLOR: Rgb565 = ORANGE;
const DIVIDER_COLOR: Rgb565 = GRAY;

/// Terminal background (very dark green tint)
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug/profiling page.
///
/// Clears the display and renders the header, the three stat columns and the
/// log terminal.
pub fn draw_debug_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    snapshot: &VehicleState,
    fps: f32,
) {
    display.clear(DEBUG_BG).ok();

    draw_header(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);

    draw_timing_column(display, metrics);
    draw_sim_column(display, metrics, snapshot);
    draw_render_column(display, metrics, log);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    fps: f32,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(160, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(280, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);

    for (title, x) in [("TIMING", COL1_X), ("SIM", COL2_X), ("RENDER", COL3_X)] {
        Text::new(title, Point::new(x, SECTION_HEADER_Y), style)
            .draw(display)
            .ok();
    }
}

/// Draw one stat line and step `y` down.
fn draw_stat(
    display: &mut SimulatorDisplay<Rgb565>,
    text: &str,
    x: i32,
    y: &mut i32,
    style: MonoTextStyle<'_, Rgb565>,
) {
    Text::new(text, Point::new(x, *y), style).draw(display).ok();
    *y += STAT_LINE_HEIGHT;
}

/// Frame timing statistics (left column).
fn draw_timing_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Frame: {:.1}ms", metrics.frame_time_us as f32 / 1000.0);
    draw_stat(display, &s, COL1_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Render:{:.1}ms", metrics.render_time_us as f32 / 1000.0);
    draw_stat(display, &s, COL1_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Sleep: {:.1}ms", metrics.sleep_time_us as f32 / 1000.0);
    draw_stat(display, &s, COL1_X, &mut y, value_style);

    // No frame recorded yet
    let min_ms = if metrics.frame_time_min_us == u32::MAX {
        0.0
    } else {
        metrics.frame_time_min_us as f32 / 1000.0
    };
    s.clear();
    let _ = write!(s, "Min:   {min_ms:.1}ms");
    draw_stat(display, &s, COL1_X, &mut y, highlight_style);

    s.clear();
    let _ = write!(s, "Max:   {:.1}ms", metrics.frame_time_max_us as f32 / 1000.0);
    draw_stat(display, &s, COL1_X, &mut y, highlight_style);

    s.clear();
    let _ = write!(s, "Avg:   {:.1}ms", metrics.frame_time_avg_us() as f32 / 1000.0);
    draw_stat(display, &s, COL1_X, &mut y, highlight_style);
}

/// Simulation counters and live vehicle values (middle column).
fn draw_sim_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    snapshot: &VehicleState,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Ticks: {}", metrics.sim_ticks);
    draw_stat(display, &s, COL2_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Max/f: {}", metrics.max_ticks_per_frame);
    draw_stat(display, &s, COL2_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Intents: {}", metrics.intents);
    draw_stat(display, &s, COL2_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Speed: {}", snapshot.speed);
    draw_stat(display, &s, COL2_X, &mut y, highlight_style);

    s.clear();
    let _ = write!(s, "Range: {}", snapshot.range);
    draw_stat(display, &s, COL2_X, &mut y, highlight_style);

    s.clear();
    let _ = write!(s, "Gear: {}", snapshot.gear);
    draw_stat(display, &s, COL2_X, &mut y, highlight_style);
}

/// Render counters (right column).
fn draw_render_column(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
) {
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Frames:{}", metrics.total_frames);
    draw_stat(display, &s, COL3_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Regions:{}", metrics.region_draws);
    draw_stat(display, &s, COL3_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Clears: {}", metrics.clears);
    draw_stat(display, &s, COL3_X, &mut y, value_style);

    s.clear();
    let _ = write!(s, "Log:    {}", log.total_pushed());
    draw_stat(display, &s, COL3_X, &mut y, value_style);
}

/// Debug log terminal (bottom section).
fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &DebugLog,
) {
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, LOG_TEXT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    // Cursor on the next line
    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}

// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // u128->u32 for durations, f32->i32 for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in timing readouts
#![allow(clippy::cast_possible_wrap)] // u32->i32 for layout constants
#![allow(clippy::cast_sign_loss)] // i32->u32 where the value is known positive
#![allow(clippy::too_many_lines)] // main() owns the whole frame loop

//! Cybertruck-style dashboard mockup on the embedded-graphics simulator.
//!
//! The vehicle model lives in `dashboard_common`. This binary owns it,
//! translates key presses into intents, runs simulation ticks on a fixed
//! period and draws the result:
//!
//! - Status bar with lock state, clock, range and battery
//! - Speed readout with drive status, and a static navigation card
//! - Quick controls (Lock, Climate, Frunk) that fade between states
//! - Dock with climate set point and the P/R/N/D gear selector
//!
//! # Frame Loop
//!
//! Each frame runs in a fixed order, so intents and ticks never interleave:
//!
//! 1. Drain window events and apply intents
//! 2. Run the simulation ticks that came due since the last frame
//! 3. Take a snapshot and redraw the regions that changed
//! 4. Sleep out the rest of the 20 ms frame
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `P` `R` `N` `D` | Select gear |
//! | `L` | Toggle door lock (popup) |
//! | `C` | Toggle climate |
//! | `F` | Toggle frunk (popup) |
//! | `Y` | Switch between vehicle and debug page |
//!
//! Key repeat is ignored so holding a key does not spam toggles.
//!
//! # Logging
//!
//! Log output goes through `pretty_env_logger`; set `RUST_LOG=debug` to see
//! every intent, `RUST_LOG=trace` for range decay events.

mod config;
mod input;
mod pages;
mod profiling;
mod render;
mod screens;
mod styles;
mod widgets;

use std::thread;
use std::time::{Duration, Instant};

use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE, WINDOW_TITLE};
use dashboard_common::animations::ColorTransition;
use dashboard_common::colors::BLACK;
use dashboard_common::config::TICK_PERIOD_MS;
use dashboard_common::debug_log::DebugLog;
use dashboard_common::{Intent, TickScheduler, VehicleSimulator};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use input::{Action, action_for_key};
use pages::Page;
use profiling::ProfilingMetrics;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use render::{Popup, RenderState};
use screens::{draw_debug_page, run_loading_screen};
use widgets::{
    draw_controls,
    draw_dock,
    draw_frunk_popup,
    draw_lock_popup,
    draw_nav_card,
    draw_speed_panel,
    draw_status_bar,
    update_control_targets,
};

fn main() {
    pretty_env_logger::init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // =========================================================================
    // Vehicle Model
    // =========================================================================

    let mut simulator = VehicleSimulator::new(SmallRng::from_os_rng());
    let mut scheduler = TickScheduler::new(TICK_PERIOD_MS);

    if !run_loading_screen(&mut display, &mut window, &simulator.snapshot()) {
        log::info!("window closed during boot");
        return;
    }

    log::info!("dashboard started, tick period {}ms", scheduler.period_ms());

    // =========================================================================
    // Front End State
    // =========================================================================

    let mut frame_count = 0u32;
    let mut active_popup: Option<Popup> = None;

    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    let mut render_state = RenderState::new();
    let mut color_transition = ColorTransition::new();
    let mut current_page = Page::default();

    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("Vehicle awake");

    // Scheduler clock. Advanced by whole milliseconds so fractions carry over.
    let mut tick_clock = Instant::now();

    loop {
        let frame_start = Instant::now();

        // =====================================================================
        // Input
        // =====================================================================

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    scheduler.stop();
                    log::info!(
                        "window closed after {} ticks, {} intents",
                        simulator.ticks(),
                        metrics.intents
                    );
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match action_for_key(keycode, current_page) {
                        Some(Action::Vehicle(intent)) => {
                            simulator.apply(intent);
                            metrics.intents += 1;
                            debug_log.push(intent.label());

                            match intent {
                                Intent::ToggleLocked => active_popup = Some(Popup::Lock(Instant::now())),
                                Intent::ToggleFrunk => active_popup = Some(Popup::Frunk(Instant::now())),
                                Intent::SetGear(_) | Intent::ToggleClimate => {}
                            }
                        }
                        Some(Action::TogglePage) => {
                            current_page = current_page.toggle();
                            active_popup = None;
                            render_state.mark_display_cleared();
                            debug_log.push(current_page.log_line());
                            log::debug!("{}", current_page.log_line());
                        }
                        None => {}
                    }
                }
                _ => {}
            }
        }

        // =====================================================================
        // Simulation Ticks
        // =====================================================================

        let elapsed_ms = tick_clock.elapsed().as_millis() as u32;
        tick_clock += Duration::from_millis(u64::from(elapsed_ms));

        let due = scheduler.advance(elapsed_ms);
        for _ in 0..due {
            simulator.tick();
        }
        metrics.record_ticks(due);

        let snapshot = simulator.snapshot();

        // =====================================================================
        // Popups and Animations
        // =====================================================================

        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }
        render_state.update_popup(active_popup.as_ref());

        update_control_targets(&mut color_transition, &snapshot);
        // Sampled before the step so the frame that lands a fade still redraws
        let controls_animating = color_transition.is_animating();
        color_transition.update();

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // =====================================================================
        // Render
        // =====================================================================

        match current_page {
            Page::Vehicle => {
                if render_state.needs_clear() {
                    display.clear(BLACK).ok();
                    metrics.clears += 1;
                }

                let dirty = render_state.dirty_regions(&snapshot, controls_animating, snapshot.climate_on);

                if dirty.status_bar {
                    draw_status_bar(&mut display, &snapshot);
                }
                if dirty.speed {
                    draw_speed_panel(&mut display, &snapshot);
                }
                if dirty.nav {
                    draw_nav_card(&mut display);
                }
                if dirty.controls {
                    draw_controls(&mut display, &color_transition);
                }
                if dirty.dock {
                    draw_dock(&mut display, &snapshot, frame_count);
                }
                metrics.region_draws += dirty.count();

                // Popup goes on top of whatever was redrawn
                match active_popup {
                    Some(Popup::Lock(_)) => draw_lock_popup(&mut display, snapshot.is_locked),
                    Some(Popup::Frunk(_)) => draw_frunk_popup(&mut display, snapshot.frunk_open),
                    None => {}
                }
            }
            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &debug_log, &snapshot, current_fps);
            }
        }

        // =====================================================================
        // Frame Timing
        // =====================================================================

        let render_time = frame_start.elapsed();

        render_state.end_frame();
        window.update(&display);
        frame_count = frame_count.wrapping_add(1);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME.saturating_sub(pre_sleep));
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

//! Frame timing and simulation counters for the debug page.
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... input, ticks, render ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! ```
//!
//! The on-screen event log lives in `dashboard_common::debug_log`.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Frame timing statistics and render/simulation counters.
pub struct ProfilingMetrics {
    /// Total frame time (render + sleep + overhead), microseconds.
    pub frame_time_us: u32,
    /// Time spent drawing, microseconds.
    pub render_time_us: u32,
    /// Time spent sleeping for the frame cap, microseconds.
    pub sleep_time_us: u32,

    /// Shortest frame seen.
    pub frame_time_min_us: u32,
    /// Longest frame seen.
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    /// Frames since startup.
    pub total_frames: u64,
    /// Simulation ticks run.
    pub sim_ticks: u64,
    /// Most ticks run in a single frame (catch-up after a stall).
    pub max_ticks_per_frame: u32,
    /// Intents applied.
    pub intents: u32,
    /// Vehicle page regions redrawn.
    pub region_draws: u32,
    /// Full display clears.
    pub clears: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Exponential moving average weight for frame time.
    const EMA_ALPHA: f32 = 0.1;

    /// Start metrics and the uptime clock.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            sim_ticks: 0,
            max_ticks_per_frame: 0,
            intents: 0,
            region_draws: 0,
            clears: 0,
            start_time: Instant::now(),
        }
    }

    /// Record one frame's timing.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        self.frame_time_avg_us = if self.total_frames == 0 {
            total_us as f32
        } else {
            Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us)
        };

        self.total_frames += 1;
    }

    /// Record the ticks run this frame.
    pub fn record_ticks(
        &mut self,
        ticks: u32,
    ) {
        self.sim_ticks += u64::from(ticks);
        self.max_ticks_per_frame = self.max_ticks_per_frame.max(ticks);
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Time since startup.
    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format whole seconds as `HH:MM:SS`.
fn format_hms(total_secs: u64) -> String<12> {
    let mut s = String::new();
    let _ = write!(
        s,
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    );
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiling_metrics_new() {
        let metrics = ProfilingMetrics::new();
        assert_eq!(metrics.total_frames, 0);
        assert_eq!(metrics.sim_ticks, 0);
        assert_eq!(metrics.frame_time_min_us, u32::MAX);
        assert_eq!(metrics.frame_time_max_us, 0);
    }

    #[test]
    fn test_record_frame_min_max_avg() {
        let mut metrics = ProfilingMetrics::new();
        let ms = Duration::from_millis;

        metrics.record_frame(ms(20), ms(2), ms(18));
        assert_eq!(metrics.frame_time_avg_us(), 20_000);

        metrics.record_frame(ms(15), ms(1), ms(14));
        metrics.record_frame(ms(25), ms(5), ms(20));

        assert_eq!(metrics.total_frames, 3);
        assert_eq!(metrics.frame_time_us, 25_000);
        assert_eq!(metrics.render_time_us, 5_000);
        assert_eq!(metrics.sleep_time_us, 20_000);
        assert_eq!(metrics.frame_time_min_us, 15_000);
        assert_eq!(metrics.frame_time_max_us, 25_000);
    }

    #[test]
    fn test_record_ticks() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_ticks(0);
        metrics.record_ticks(1);
        metrics.record_ticks(4);
        metrics.record_ticks(1);
        assert_eq!(metrics.sim_ticks, 6);
        assert_eq!(metrics.max_ticks_per_frame, 4);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0).as_str(), "00:00:00");
        assert_eq!(format_hms(59).as_str(), "00:00:59");
        assert_eq!(format_hms(3_661).as_str(), "01:01:01");
        assert_eq!(format_hms(36_000).as_str(), "10:00:00");
    }

    #[test]
    fn test_uptime_string_shape() {
        let uptime = ProfilingMetrics::new().uptime_string();
        assert_eq!(uptime.len(), 8);
    }
}

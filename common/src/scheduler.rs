//! Repeating timer that owns the simulation cadence.
//!
//! The scheduler knows nothing about the vehicle. The caller feeds it the time
//! elapsed since the previous call and gets back how many ticks are due:
//!
//! ```ignore
//! let mut scheduler = TickScheduler::new(TICK_PERIOD_MS);
//!
//! // In the event loop, after handling input:
//! for _ in 0..scheduler.advance(frame_ms) {
//!     simulator.tick();
//! }
//! ```
//!
//! Time is tracked in whole milliseconds so this works without `std::time`.
//! Leftover time below one period carries over to the next call, so a 20 ms
//! frame loop still yields one tick every 120 ms on average.

/// Accumulating fixed-period timer.
pub struct TickScheduler {
    period_ms: u32,
    accumulated_ms: u32,
    running: bool,
}

impl TickScheduler {
    /// Create a running scheduler. A zero period is raised to 1 ms.
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            accumulated_ms: 0,
            running: true,
        }
    }

    /// Tick period in milliseconds.
    #[inline]
    pub const fn period_ms(&self) -> u32 { self.period_ms }

    /// Whether the timer is still firing.
    #[inline]
    pub const fn is_running(&self) -> bool { self.running }

    /// Account for `elapsed_ms` of wall time and return the number of ticks due.
    ///
    /// Returns 0 once stopped.
    pub const fn advance(
        &mut self,
        elapsed_ms: u32,
    ) -> u32 {
        if !self.running {
            return 0;
        }

        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms = total % self.period_ms;
        total / self.period_ms
    }

    /// Stop the timer. Pending partial time is dropped.
    pub const fn stop(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICK_PERIOD_MS;

    #[test]
    fn test_scheduler_new() {
        let scheduler = TickScheduler::new(TICK_PERIOD_MS);
        assert!(scheduler.is_running());
        assert_eq!(scheduler.period_ms(), TICK_PERIOD_MS);
    }

    #[test]
    fn test_zero_period_raised() {
        let mut scheduler = TickScheduler::new(0);
        assert_eq!(scheduler.period_ms(), 1);
        assert_eq!(scheduler.advance(5), 5);
    }

    #[test]
    fn test_partial_periods_carry_over() {
        let mut scheduler = TickScheduler::new(TICK_PERIOD_MS);

        // Six 20ms frames make exactly one tick
        let ticks: u32 = (0..6).map(|_| scheduler.advance(20)).sum();
        assert_eq!(ticks, 1);

        // 100ms + 30ms crosses one period with 10ms carried into the next
        assert_eq!(scheduler.advance(100), 0);
        assert_eq!(scheduler.advance(30), 1);
        assert_eq!(scheduler.advance(110), 1);
    }

    #[test]
    fn test_long_stall_catches_up() {
        let mut scheduler = TickScheduler::new(TICK_PERIOD_MS);
        assert_eq!(scheduler.advance(1_200), 10);
        assert_eq!(scheduler.advance(0), 0);
    }

    #[test]
    fn test_stopped_scheduler_never_fires() {
        let mut scheduler = TickScheduler::new(TICK_PERIOD_MS);
        scheduler.advance(100);
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.advance(10_000), 0);
    }

    #[test]
    fn test_average_rate_over_frame_loop() {
        let mut scheduler = TickScheduler::new(TICK_PERIOD_MS);
        let ticks: u32 = (0..600).map(|_| scheduler.advance(20)).sum();
        // 600 frames * 20ms = 12s = 100 ticks
        assert_eq!(ticks, 100);
    }
}

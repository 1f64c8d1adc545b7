//! Vehicle state and the simulator that advances it.
//!
//! The simulator owns the only [`VehicleState`] of a session. Two actors mutate
//! it, both through `&mut self`:
//!
//! - the periodic [`VehicleSimulator::tick`], driven by a
//!   [`TickScheduler`](crate::scheduler::TickScheduler)
//! - discrete user intents (gear selection and the three toggles)
//!
//! Readers only ever see a copied [`VehicleState`] snapshot, so the front end
//! cannot compute or modify state itself.
//!
//! # Tick Model
//!
//! | Gear | Speed | Range |
//! |------|-------|-------|
//! | Drive | `+1`, capped at 65 | `-1` with p = 0.02, floored at 0 |
//! | Park | `-2`, floored at 0 | unchanged |
//! | Reverse / Neutral | unchanged | unchanged |
//!
//! Reverse and Neutral have no speed curve. Selecting either while moving
//! holds the current speed until Park or Drive is selected again.

use rand::Rng;

use crate::config::{
    CLIMATE_SET_POINT_F,
    DRIVE_ACCELERATION,
    INITIAL_BATTERY_LEVEL,
    INITIAL_LOCKED,
    INITIAL_RANGE,
    INITIAL_SPEED,
    MAX_SPEED,
    PARK_DECELERATION,
    RANGE_DECAY_PROBABILITY,
    RANGE_DECAY_STEP,
};
use crate::gear::Gear;
use crate::intent::Intent;

// =============================================================================
// Vehicle State
// =============================================================================

/// Snapshot of the simulated vehicle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VehicleState {
    /// Current speed in MPH (`0..=MAX_SPEED`).
    pub speed: u32,
    /// Remaining range in miles.
    pub range: u32,
    /// Charge percentage (0-100).
    pub battery_level: u8,
    /// Door lock state.
    pub is_locked: bool,
    /// Climate control state.
    pub climate_on: bool,
    /// Front trunk state.
    pub frunk_open: bool,
    /// Selected gear.
    pub gear: Gear,
}

impl VehicleState {
    /// State at session start: parked, locked, 82% battery, 290 mi range.
    pub const fn new() -> Self {
        Self {
            speed: INITIAL_SPEED,
            range: INITIAL_RANGE,
            battery_level: INITIAL_BATTERY_LEVEL,
            is_locked: INITIAL_LOCKED,
            climate_on: false,
            frunk_open: false,
            gear: Gear::Park,
        }
    }

    /// Whether the vehicle has any speed.
    #[inline]
    pub const fn is_moving(&self) -> bool { self.speed > 0 }

    /// Status line under the speed readout.
    #[inline]
    pub const fn drive_status(&self) -> &'static str {
        match self.gear {
            Gear::Park => "PARKED",
            _ => "DRIVING",
        }
    }

    /// Climate set point while on, `None` while off.
    #[inline]
    pub const fn climate_set_point(&self) -> Option<u8> {
        if self.climate_on {
            Some(CLIMATE_SET_POINT_F)
        } else {
            None
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Simulator
// =============================================================================

/// Owns the vehicle state and advances it on ticks and intents.
///
/// Generic over the random source used for range decay so tests can inject a
/// seeded or fixed generator.
pub struct VehicleSimulator<R> {
    state: VehicleState,
    rng: R,
    ticks: u64,
}

impl<R: Rng> VehicleSimulator<R> {
    /// Start a session from the initial vehicle state.
    pub const fn new(rng: R) -> Self { Self::with_state(VehicleState::new(), rng) }

    /// Start from an arbitrary state.
    ///
    /// Speed above the cap is clamped so the speed invariant holds from the
    /// first snapshot.
    pub const fn with_state(
        mut state: VehicleState,
        rng: R,
    ) -> Self {
        if state.speed > MAX_SPEED {
            state.speed = MAX_SPEED;
        }
        Self { state, rng, ticks: 0 }
    }

    /// Current state.
    #[inline]
    pub const fn snapshot(&self) -> VehicleState { self.state }

    /// Ticks advanced since the session started.
    #[inline]
    pub const fn ticks(&self) -> u64 { self.ticks }

    /// Advance the simulation by one period.
    pub fn tick(&mut self) {
        self.ticks += 1;

        match self.state.gear {
            Gear::Drive => {
                self.state.speed = (self.state.speed + DRIVE_ACCELERATION).min(MAX_SPEED);
                if self.rng.random_bool(RANGE_DECAY_PROBABILITY) {
                    self.state.range = self.state.range.saturating_sub(RANGE_DECAY_STEP);
                    log::trace!("range decayed to {} mi", self.state.range);
                }
            }
            Gear::Park => {
                self.state.speed = self.state.speed.saturating_sub(PARK_DECELERATION);
            }
            Gear::Reverse | Gear::Neutral => {}
        }
    }

    /// Select a gear. Always accepted, regardless of speed or lock state.
    pub fn set_gear(
        &mut self,
        gear: Gear,
    ) {
        if self.state.gear != gear {
            log::info!("gear {} -> {}", self.state.gear, gear);
        }
        self.state.gear = gear;
    }

    /// Flip the door lock.
    pub fn toggle_locked(&mut self) {
        self.state.is_locked = !self.state.is_locked;
        log::debug!("locked: {}", self.state.is_locked);
    }

    /// Flip climate control.
    pub fn toggle_climate(&mut self) {
        self.state.climate_on = !self.state.climate_on;
        log::debug!("climate on: {}", self.state.climate_on);
    }

    /// Flip the front trunk.
    pub fn toggle_frunk(&mut self) {
        self.state.frunk_open = !self.state.frunk_open;
        log::debug!("frunk open: {}", self.state.frunk_open);
    }

    /// Dispatch an intent and return the resulting snapshot.
    pub fn apply(
        &mut self,
        intent: Intent,
    ) -> VehicleState {
        match intent {
            Intent::SetGear(gear) => self.set_gear(gear),
            Intent::ToggleLocked => self.toggle_locked(),
            Intent::ToggleClimate => self.toggle_climate(),
            Intent::ToggleFrunk => self.toggle_frunk(),
        }
        self.state
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::config::TICK_PERIOD_MS;
    use crate::scheduler::TickScheduler;

    /// Generator that returns the same word forever.
    ///
    /// `random_bool(p)` succeeds when the drawn `u64` is below `p * 2^64`, so
    /// `0` always fires the range decay and `u64::MAX` never does.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 { self.0 as u32 }

        fn next_u64(&mut self) -> u64 { self.0 }

        fn fill_bytes(
            &mut self,
            dst: &mut [u8],
        ) {
            dst.fill(self.0 as u8);
        }
    }

    const ALWAYS_DECAY: u64 = 0;
    const NEVER_DECAY: u64 = u64::MAX;

    fn state_with(
        speed: u32,
        gear: Gear,
    ) -> VehicleState {
        VehicleState {
            speed,
            gear,
            ..VehicleState::new()
        }
    }

    fn seeded(state: VehicleState) -> VehicleSimulator<ChaCha20Rng> {
        VehicleSimulator::with_state(state, ChaCha20Rng::seed_from_u64(7))
    }

    // -------------------------------------------------------------------------
    // Initial State
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_state() {
        let sim = VehicleSimulator::new(FixedRng(NEVER_DECAY));
        let expected = VehicleState {
            speed: 0,
            range: 290,
            battery_level: 82,
            is_locked: true,
            climate_on: false,
            frunk_open: false,
            gear: Gear::Park,
        };
        assert_eq!(sim.snapshot(), expected);
        assert_eq!(sim.ticks(), 0);
        assert_eq!(VehicleState::default(), expected);
    }

    #[test]
    fn test_with_state_clamps_speed() {
        let sim = VehicleSimulator::with_state(state_with(200, Gear::Drive), FixedRng(NEVER_DECAY));
        assert_eq!(sim.snapshot().speed, MAX_SPEED);
    }

    // -------------------------------------------------------------------------
    // Tick: Drive
    // -------------------------------------------------------------------------

    #[test]
    fn test_drive_accelerates_below_cap() {
        for speed in 0..MAX_SPEED {
            let mut sim = seeded(state_with(speed, Gear::Drive));
            sim.tick();
            assert_eq!(sim.snapshot().speed, speed + 1, "from speed {speed}");
        }
    }

    #[test]
    fn test_drive_holds_at_cap() {
        let mut sim = seeded(state_with(MAX_SPEED, Gear::Drive));
        for _ in 0..10 {
            sim.tick();
            assert_eq!(sim.snapshot().speed, MAX_SPEED);
        }
    }

    #[test]
    fn test_drive_range_decays_on_successful_draw() {
        let mut sim = VehicleSimulator::with_state(state_with(30, Gear::Drive), FixedRng(ALWAYS_DECAY));
        sim.tick();
        assert_eq!(sim.snapshot().range, INITIAL_RANGE - 1);
        sim.tick();
        assert_eq!(sim.snapshot().range, INITIAL_RANGE - 2);
    }

    #[test]
    fn test_drive_range_kept_on_failed_draw() {
        let mut sim = VehicleSimulator::with_state(state_with(30, Gear::Drive), FixedRng(NEVER_DECAY));
        for _ in 0..100 {
            sim.tick();
        }
        assert_eq!(sim.snapshot().range, INITIAL_RANGE);
    }

    #[test]
    fn test_drive_range_floored_at_zero() {
        let state = VehicleState {
            range: 1,
            ..state_with(10, Gear::Drive)
        };
        let mut sim = VehicleSimulator::with_state(state, FixedRng(ALWAYS_DECAY));
        sim.tick();
        sim.tick();
        sim.tick();
        assert_eq!(sim.snapshot().range, 0);
    }

    #[test]
    fn test_drive_decay_rate_is_roughly_two_percent() {
        let mut sim = seeded(state_with(0, Gear::Drive));
        for _ in 0..10_000 {
            sim.tick();
        }
        let consumed = INITIAL_RANGE - sim.snapshot().range;
        // Expected 200 draws, allow a wide margin for the seeded sequence
        assert!((120..=280).contains(&consumed), "consumed {consumed} mi");
    }

    // -------------------------------------------------------------------------
    // Tick: Park, Reverse, Neutral
    // -------------------------------------------------------------------------

    #[test]
    fn test_park_decelerates() {
        for speed in 1..=MAX_SPEED {
            let mut sim = seeded(state_with(speed, Gear::Park));
            sim.tick();
            assert_eq!(sim.snapshot().speed, speed.saturating_sub(2), "from speed {speed}");
        }
    }

    #[test]
    fn test_park_at_rest_stays_at_rest() {
        let mut sim = seeded(state_with(0, Gear::Park));
        sim.tick();
        assert_eq!(sim.snapshot().speed, 0);
    }

    #[test]
    fn test_reverse_and_neutral_hold_speed_and_range() {
        for gear in [Gear::Reverse, Gear::Neutral] {
            for speed in [0, 1, 33, MAX_SPEED] {
                let mut sim = VehicleSimulator::with_state(state_with(speed, gear), FixedRng(ALWAYS_DECAY));
                sim.tick();
                assert_eq!(sim.snapshot().speed, speed, "{gear:?} at {speed}");
                assert_eq!(sim.snapshot().range, INITIAL_RANGE, "{gear:?} at {speed}");
            }
        }
    }

    #[test]
    fn test_range_never_increases() {
        let mut sim = seeded(VehicleState::new());
        let mut prev_range = sim.snapshot().range;
        for step in 0..3_000u32 {
            // Cycle through every gear so all tick branches run
            if step % 250 == 0 {
                sim.set_gear(Gear::ALL[(step / 250) as usize % Gear::ALL.len()]);
            }
            sim.tick();
            let range = sim.snapshot().range;
            assert!(range <= prev_range, "range grew at step {step}");
            prev_range = range;
        }
        assert_eq!(sim.ticks(), 3_000);
    }

    #[test]
    fn test_tick_leaves_toggles_and_battery_alone() {
        let state = VehicleState {
            is_locked: false,
            climate_on: true,
            frunk_open: true,
            ..state_with(20, Gear::Drive)
        };
        let mut sim = VehicleSimulator::with_state(state, FixedRng(ALWAYS_DECAY));
        sim.tick();
        let after = sim.snapshot();
        assert!(!after.is_locked);
        assert!(after.climate_on);
        assert!(after.frunk_open);
        assert_eq!(after.battery_level, INITIAL_BATTERY_LEVEL);
        assert_eq!(after.gear, Gear::Drive);
    }

    // -------------------------------------------------------------------------
    // Intents
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_gear_from_any_gear() {
        for from in Gear::ALL {
            for to in Gear::ALL {
                let mut sim = seeded(state_with(40, from));
                sim.set_gear(to);
                assert_eq!(sim.snapshot().gear, to, "{from:?} -> {to:?}");
                assert_eq!(sim.snapshot().speed, 40);
            }
        }
    }

    #[test]
    fn test_set_gear_ignores_lock() {
        let mut sim = seeded(VehicleState::new());
        assert!(sim.snapshot().is_locked);
        sim.set_gear(Gear::Drive);
        assert_eq!(sim.snapshot().gear, Gear::Drive);
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut sim = seeded(VehicleState::new());
        let original = sim.snapshot();

        sim.toggle_locked();
        assert_eq!(sim.snapshot().is_locked, !original.is_locked);
        sim.toggle_locked();

        sim.toggle_climate();
        assert_eq!(sim.snapshot().climate_on, !original.climate_on);
        sim.toggle_climate();

        sim.toggle_frunk();
        assert_eq!(sim.snapshot().frunk_open, !original.frunk_open);
        sim.toggle_frunk();

        assert_eq!(sim.snapshot(), original);
    }

    #[test]
    fn test_toggle_touches_one_field() {
        let mut sim = seeded(state_with(12, Gear::Neutral));
        let before = sim.snapshot();
        sim.toggle_climate();
        assert_eq!(
            sim.snapshot(),
            VehicleState {
                climate_on: true,
                ..before
            }
        );
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let mut sim = seeded(VehicleState::new());

        let state = sim.apply(Intent::SetGear(Gear::Reverse));
        assert_eq!(state.gear, Gear::Reverse);

        let state = sim.apply(Intent::ToggleLocked);
        assert!(!state.is_locked);

        let state = sim.apply(Intent::ToggleClimate);
        assert!(state.climate_on);

        let state = sim.apply(Intent::ToggleFrunk);
        assert!(state.frunk_open);
        assert_eq!(state, sim.snapshot());
    }

    // -------------------------------------------------------------------------
    // Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_scenario_drive_to_cap() {
        let mut sim = seeded(VehicleState::new());
        sim.set_gear(Gear::Drive);
        for _ in 0..65 {
            sim.tick();
        }
        assert_eq!(sim.snapshot().speed, 65);
        assert_eq!(sim.snapshot().gear, Gear::Drive);
    }

    #[test]
    fn test_scheduler_drives_to_cap_at_tick_period() {
        let mut sim = seeded(VehicleState::new());
        let mut scheduler = TickScheduler::new(TICK_PERIOD_MS);
        sim.set_gear(Gear::Drive);

        // 390 frames of 20ms = 7.8s = 65 periods of 120ms
        for _ in 0..390 {
            for _ in 0..scheduler.advance(20) {
                sim.tick();
            }
        }
        assert_eq!(sim.ticks(), 65);
        assert_eq!(sim.snapshot().speed, MAX_SPEED);

        scheduler.stop();
        assert_eq!(scheduler.advance(1_000), 0);
    }

    #[test]
    fn test_scenario_park_from_ten() {
        let mut sim = seeded(state_with(10, Gear::Drive));
        sim.set_gear(Gear::Park);
        sim.tick();
        assert_eq!(sim.snapshot().speed, 8);
    }

    #[test]
    fn test_scenario_frunk_round_trip() {
        let mut sim = seeded(VehicleState::new());
        assert!(!sim.snapshot().frunk_open);
        sim.toggle_frunk();
        assert!(sim.snapshot().frunk_open);
        sim.toggle_frunk();
        assert!(!sim.snapshot().frunk_open);
    }

    // -------------------------------------------------------------------------
    // Derived Views
    // -------------------------------------------------------------------------

    #[test]
    fn test_drive_status_label() {
        assert_eq!(state_with(0, Gear::Park).drive_status(), "PARKED");
        assert_eq!(state_with(0, Gear::Reverse).drive_status(), "DRIVING");
        assert_eq!(state_with(0, Gear::Neutral).drive_status(), "DRIVING");
        assert_eq!(state_with(5, Gear::Drive).drive_status(), "DRIVING");
    }

    #[test]
    fn test_is_moving() {
        assert!(!state_with(0, Gear::Drive).is_moving());
        assert!(state_with(1, Gear::Park).is_moving());
    }

    #[test]
    fn test_climate_set_point() {
        let mut state = VehicleState::new();
        assert_eq!(state.climate_set_point(), None);
        state.climate_on = true;
        assert_eq!(state.climate_set_point(), Some(68));
    }
}

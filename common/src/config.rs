//! Simulation configuration constants.
//!
//! All values are compile-time constants with validation assertions, in the
//! same spirit as the layout constants of the desktop front end. Changing the
//! simulated vehicle means editing this file, nothing is read at runtime.

// =============================================================================
// Tick Cadence
// =============================================================================

/// Period of the simulation tick in milliseconds.
pub const TICK_PERIOD_MS: u32 = 120;

// =============================================================================
// Speed Model
// =============================================================================

/// Speed cap in Drive (MPH).
pub const MAX_SPEED: u32 = 65;

/// Speed gained per tick while in Drive.
pub const DRIVE_ACCELERATION: u32 = 1;

/// Speed lost per tick while in Park.
pub const PARK_DECELERATION: u32 = 2;

const _: () = assert!(DRIVE_ACCELERATION > 0);
const _: () = assert!(PARK_DECELERATION > 0);
const _: () = assert!(DRIVE_ACCELERATION <= MAX_SPEED);

// =============================================================================
// Range Model
// =============================================================================

/// Probability that a Drive tick consumes one mile of range.
///
/// Drawn independently on every tick; speed magnitude plays no part.
pub const RANGE_DECAY_PROBABILITY: f64 = 0.02;

/// Miles consumed by a successful decay draw.
pub const RANGE_DECAY_STEP: u32 = 1;

const _: () = assert!(RANGE_DECAY_PROBABILITY > 0.0 && RANGE_DECAY_PROBABILITY < 1.0);

// =============================================================================
// Initial Vehicle State
// =============================================================================

/// Speed at session start.
pub const INITIAL_SPEED: u32 = 0;

/// Battery percentage at session start. Stays constant, there is no charging.
pub const INITIAL_BATTERY_LEVEL: u8 = 82;

/// Range in miles at session start.
pub const INITIAL_RANGE: u32 = 290;

/// Doors start locked.
pub const INITIAL_LOCKED: bool = true;

const _: () = assert!(INITIAL_SPEED <= MAX_SPEED);
const _: () = assert!(INITIAL_BATTERY_LEVEL <= 100);

// =============================================================================
// Climate
// =============================================================================

/// Cabin set point shown while climate is on (Fahrenheit).
pub const CLIMATE_SET_POINT_F: u8 = 68;

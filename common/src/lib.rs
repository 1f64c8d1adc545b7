//! Vehicle model and shared types for the dashboard mockup.
//!
//! This crate holds the platform-agnostic half of the dashboard. The desktop
//! front end only reads snapshots from here and sends intents back:
//!
//! - [`vehicle`]: `VehicleState` and the `VehicleSimulator` state machine
//! - [`gear`]: gear enum, letters and parsing
//! - [`intent`]: discrete user intents
//! - [`scheduler`]: repeating timer that decides when to tick
//! - [`config`]: simulation constants
//! - [`debug_log`]: ring buffer shown on the debug page
//! - [`colors`], [`animations`]: palette and button/fan animation state
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Randomness comes in through the
//! `rand::Rng` trait and time through plain millisecond counts, so nothing
//! here depends on `std::time` or an OS random source.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod debug_log;
pub mod gear;
pub mod intent;
pub mod scheduler;
pub mod vehicle;

// Re-export commonly used items
pub use gear::{Gear, GearParseError};
pub use intent::Intent;
pub use scheduler::TickScheduler;
pub use vehicle::{VehicleSimulator, VehicleState};

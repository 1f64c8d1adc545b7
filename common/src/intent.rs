//! Discrete user intents accepted by the simulator.
//!
//! Front ends translate their own input events (key presses, button taps)
//! into an [`Intent`] and hand it to
//! [`VehicleSimulator::apply`](crate::vehicle::VehicleSimulator::apply).

use crate::gear::Gear;

/// A single user action on the vehicle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Intent {
    /// Select a gear.
    SetGear(Gear),
    /// Flip the door lock.
    ToggleLocked,
    /// Flip climate control.
    ToggleClimate,
    /// Flip the front trunk.
    ToggleFrunk,
}

impl Intent {
    /// Short line for the on-screen debug log.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SetGear(Gear::Park) => "Gear: P",
            Self::SetGear(Gear::Reverse) => "Gear: R",
            Self::SetGear(Gear::Neutral) => "Gear: N",
            Self::SetGear(Gear::Drive) => "Gear: D",
            Self::ToggleLocked => "Lock toggled",
            Self::ToggleClimate => "Climate toggled",
            Self::ToggleFrunk => "Frunk toggled",
        }
    }
}

//! Gear selection.
//!
//! The gear is the only enumerated state of the vehicle. Any gear can be
//! reached from any other by direct selection; no shift interlock (such as
//! requiring a stop before Drive → Reverse) is enforced.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Selected gear.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
pub enum Gear {
    /// Parked. Speed bleeds off every tick.
    #[default]
    Park,
    /// Reverse. Speed and range are left untouched.
    Reverse,
    /// Neutral. Speed and range are left untouched.
    Neutral,
    /// Drive. Speed builds up to the cap, range decays stochastically.
    Drive,
}

/// Reasons a piece of text is not a gear.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum GearParseError {
    /// Input was empty or whitespace only.
    #[error("empty gear selection")]
    Empty,
    /// Single character that is not one of P, R, N, D.
    #[error("unknown gear letter '{0}'")]
    UnknownLetter(char),
    /// Longer text that is not a gear name.
    #[error("unknown gear name")]
    UnknownName,
}

impl Gear {
    /// All gears in selector order (P, R, N, D).
    pub const ALL: [Self; 4] = [Self::Park, Self::Reverse, Self::Neutral, Self::Drive];

    /// Letter shown on the gear selector.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Park => 'P',
            Self::Reverse => 'R',
            Self::Neutral => 'N',
            Self::Drive => 'D',
        }
    }

    /// Letter as a static string, for text rendering without formatting.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Park => "P",
            Self::Reverse => "R",
            Self::Neutral => "N",
            Self::Drive => "D",
        }
    }

    /// Position of this gear in [`Gear::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Park => 0,
            Self::Reverse => 1,
            Self::Neutral => 2,
            Self::Drive => 3,
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<char> for Gear {
    type Error = GearParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'P' => Ok(Self::Park),
            'R' => Ok(Self::Reverse),
            'N' => Ok(Self::Neutral),
            'D' => Ok(Self::Drive),
            other => Err(GearParseError::UnknownLetter(other)),
        }
    }
}

impl FromStr for Gear {
    type Err = GearParseError;

    /// Accepts a single letter or a full gear name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(GearParseError::Empty),
            (Some(c), None) => Self::try_from(c),
            _ => {
                if s.eq_ignore_ascii_case("park") {
                    Ok(Self::Park)
                } else if s.eq_ignore_ascii_case("reverse") {
                    Ok(Self::Reverse)
                } else if s.eq_ignore_ascii_case("neutral") {
                    Ok(Self::Neutral)
                } else if s.eq_ignore_ascii_case("drive") {
                    Ok(Self::Drive)
                } else {
                    Err(GearParseError::UnknownName)
                }
            }
        }
    }
}

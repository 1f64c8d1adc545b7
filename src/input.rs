//! Keyboard input handling.
//!
//! Converts key presses into actions: vehicle intents for the simulator and
//! page switches for the front end. Vehicle keys only act on the vehicle
//! page, so pressing `D` while reading the debug log does not shift gear.
//!
//! | Key | Action |
//! |-----|--------|
//! | `P` `R` `N` `D` | Select gear |
//! | `L` | Toggle door lock |
//! | `C` | Toggle climate |
//! | `F` | Toggle frunk |
//! | `Y` | Switch page |

use dashboard_common::{Gear, Intent};
use embedded_graphics_simulator::sdl2::Keycode;

use crate::pages::Page;

/// What a key press asks for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Forward to the simulator.
    Vehicle(Intent),
    /// Switch to the other page.
    TogglePage,
}

/// Letter printed on a bound key, `None` for unbound keys.
pub fn key_letter(keycode: Keycode) -> Option<&'static str> {
    let letter = match keycode {
        Keycode::P => "P",
        Keycode::R => "R",
        Keycode::N => "N",
        Keycode::D => "D",
        Keycode::L => "L",
        Keycode::C => "C",
        Keycode::F => "F",
        Keycode::Y => "Y",
        _ => return None,
    };
    Some(letter)
}

/// Map a key press to an action on the current page.
///
/// Gear keys go through the same `Gear` parser as any other gear text, so
/// the selector letters and the key bindings cannot drift apart. Returns
/// `None` for unbound keys and for vehicle keys pressed on the debug page.
pub fn action_for_key(
    keycode: Keycode,
    page: Page,
) -> Option<Action> {
    let letter = key_letter(keycode)?;
    if letter == "Y" {
        return Some(Action::TogglePage);
    }

    if page != Page::Vehicle {
        return None;
    }

    let intent = match letter.parse::<Gear>() {
        Ok(gear) => Intent::SetGear(gear),
        Err(err) => {
            log::trace!("key {letter}: {err}");
            match letter {
                "L" => Intent::ToggleLocked,
                "C" => Intent::ToggleClimate,
                "F" => Intent::ToggleFrunk,
                _ => return None,
            }
        }
    };
    Some(Action::Vehicle(intent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_keys() {
        let cases = [
            (Keycode::P, Gear::Park),
            (Keycode::R, Gear::Reverse),
            (Keycode::N, Gear::Neutral),
            (Keycode::D, Gear::Drive),
        ];
        for (key, gear) in cases {
            assert_eq!(
                action_for_key(key, Page::Vehicle),
                Some(Action::Vehicle(Intent::SetGear(gear)))
            );
        }
    }

    #[test]
    fn test_toggle_keys() {
        assert_eq!(
            action_for_key(Keycode::L, Page::Vehicle),
            Some(Action::Vehicle(Intent::ToggleLocked))
        );
        assert_eq!(
            action_for_key(Keycode::C, Page::Vehicle),
            Some(Action::Vehicle(Intent::ToggleClimate))
        );
        assert_eq!(
            action_for_key(Keycode::F, Page::Vehicle),
            Some(Action::Vehicle(Intent::ToggleFrunk))
        );
    }

    #[test]
    fn test_page_key_works_everywhere() {
        assert_eq!(action_for_key(Keycode::Y, Page::Vehicle), Some(Action::TogglePage));
        assert_eq!(action_for_key(Keycode::Y, Page::Debug), Some(Action::TogglePage));
    }

    #[test]
    fn test_vehicle_keys_ignored_on_debug_page() {
        assert_eq!(action_for_key(Keycode::D, Page::Debug), None);
        assert_eq!(action_for_key(Keycode::L, Page::Debug), None);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(key_letter(Keycode::Q), None);
        assert_eq!(action_for_key(Keycode::Q, Page::Vehicle), None);
    }

    #[test]
    fn test_gear_key_letters_match_selector() {
        for gear in Gear::ALL {
            let key = match gear {
                Gear::Park => Keycode::P,
                Gear::Reverse => Keycode::R,
                Gear::Neutral => Keycode::N,
                Gear::Drive => Keycode::D,
            };
            assert_eq!(key_letter(key), Some(gear.as_str()));
        }
    }

    #[test]
    fn test_toggle_letters_are_not_gears() {
        for key in [Keycode::L, Keycode::C, Keycode::F, Keycode::Y] {
            let letter = key_letter(key).unwrap_or_default();
            assert!(letter.parse::<Gear>().is_err(), "{letter} parsed as a gear");
        }
    }
}

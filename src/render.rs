//! Render state tracking for the vehicle page.
//!
//! The vehicle panel is split into regions that redraw on different
//! triggers:
//!
//! | Region | Redraws when |
//! |--------|--------------|
//! | Status bar | lock, range or battery changed, or after a clear |
//! | Speed panel | speed or gear changed, or after a clear |
//! | Navigation card | only after a clear (static text) |
//! | Quick controls | every frame while a fade runs, else after a clear |
//! | Dock | gear or climate changed, fan spinning, or after a clear |
//!
//! The display is cleared on the first frame, when a popup closes or is
//! replaced by another, and when switching back from the debug page. A clear
//! marks every region dirty.

use std::time::Instant;

use dashboard_common::VehicleState;

use crate::config::POPUP_DURATION;

// =============================================================================
// Popups
// =============================================================================

/// Confirmation popup for a state change that has no other large indicator.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "LOCKED" / "UNLOCKED".
    Lock(Instant),
    /// "FRUNK OPEN" / "FRUNK CLOSED".
    Frunk(Instant),
}

impl Popup {
    /// When the popup was triggered.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Lock(t) | Self::Frunk(t) => *t,
        }
    }

    /// Whether the popup has been up for `POPUP_DURATION`.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Discriminant for change detection.
    #[inline]
    const fn kind(&self) -> u8 {
        match self {
            Self::Lock(_) => 0,
            Self::Frunk(_) => 1,
        }
    }
}

// =============================================================================
// Render State
// =============================================================================

/// Which regions of the vehicle page need drawing this frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DirtyRegions {
    pub status_bar: bool,
    pub speed: bool,
    pub nav: bool,
    pub controls: bool,
    pub dock: bool,
}

impl DirtyRegions {
    const ALL: Self = Self {
        status_bar: true,
        speed: true,
        nav: true,
        controls: true,
        dock: true,
    };

    /// Number of regions marked dirty.
    pub const fn count(&self) -> u32 {
        self.status_bar as u32 + self.speed as u32 + self.nav as u32 + self.controls as u32 + self.dock as u32
    }
}

/// Tracks what was last drawn so unchanged regions can be skipped.
pub struct RenderState {
    /// Snapshot drawn on the previous vehicle frame.
    prev_snapshot: Option<VehicleState>,

    /// Previous popup kind, for detecting close and switch.
    prev_popup_kind: Option<u8>,

    /// Whether the display must be cleared this frame.
    needs_clear: bool,
}

impl RenderState {
    /// Everything needs drawing on the first frame.
    pub const fn new() -> Self {
        Self {
            prev_snapshot: None,
            prev_popup_kind: None,
            needs_clear: true,
        }
    }

    /// Record the active popup.
    ///
    /// A popup closing or being replaced by a different kind leaves pixels
    /// behind, so both schedule a clear.
    pub fn update_popup(
        &mut self,
        popup: Option<&Popup>,
    ) {
        let current = popup.map(Popup::kind);
        if current != self.prev_popup_kind && self.prev_popup_kind.is_some() {
            self.needs_clear = true;
        }
        self.prev_popup_kind = current;
    }

    /// Schedule a full clear (page switch).
    #[inline]
    pub const fn mark_display_cleared(&mut self) { self.needs_clear = true; }

    /// Whether the display must be cleared before drawing this frame.
    #[inline]
    pub const fn needs_clear(&self) -> bool { self.needs_clear }

    /// Compare `snapshot` with the previous frame and return the dirty regions.
    ///
    /// `controls_animating` and `fan_spinning` force redraws that the snapshot
    /// alone cannot see.
    pub fn dirty_regions(
        &mut self,
        snapshot: &VehicleState,
        controls_animating: bool,
        fan_spinning: bool,
    ) -> DirtyRegions {
        let dirty = match self.prev_snapshot {
            _ if self.needs_clear => DirtyRegions::ALL,
            None => DirtyRegions::ALL,
            Some(prev) => DirtyRegions {
                status_bar: prev.is_locked != snapshot.is_locked
                    || prev.range != snapshot.range
                    || prev.battery_level != snapshot.battery_level,
                speed: prev.speed != snapshot.speed || prev.gear != snapshot.gear,
                nav: false,
                controls: controls_animating,
                dock: prev.gear != snapshot.gear || prev.climate_on != snapshot.climate_on || fan_spinning,
            },
        };
        self.prev_snapshot = Some(*snapshot);
        dirty
    }

    /// Reset per-frame flags. Call after drawing.
    #[inline]
    pub const fn end_frame(&mut self) { self.needs_clear = false; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

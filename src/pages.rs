//! Page navigation.
//!
//! Press `Y` to switch between the vehicle panel and the debug view.

/// Pages of the desktop front end.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Status bar, speed readout, quick controls, dock.
    #[default]
    Vehicle,

    /// Frame timing, simulation counters, debug log terminal.
    Debug,
}

impl Page {
    /// Switch to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Vehicle => Self::Debug,
            Self::Debug => Self::Vehicle,
        }
    }

    /// Debug log line announcing this page.
    #[inline]
    pub const fn log_line(self) -> &'static str {
        match self {
            Self::Vehicle => "Page: Vehicle",
            Self::Debug => "Page: Debug",
        }
    }
}

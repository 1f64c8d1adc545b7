//! Full-screen views outside the vehicle page.
//!
//! - **Loading Screen** ([`loading`]): console-style wake-up messages with a
//!   spinner, shown once at startup
//! - **Debug Page** ([`debug`]): frame timing, simulation counters and the event
//!   log (toggled with `Y`)
//!
//! The loading screen returns `false` if the window is closed before it
//! finishes, so the application can exit without entering the main loop.

mod debug;
mod loading;

pub use debug::draw_debug_page;
pub use loading::run_loading_screen;

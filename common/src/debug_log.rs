//! On-screen debug log.
//!
//! A small ring buffer of recent events (intents, page switches, boot
//! messages) drawn on the debug page. Complements the `log` facade: `log`
//! records go to the terminal, this buffer is what the panel itself shows.
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Session started");
//! log.push(Intent::ToggleLocked.label());
//!
//! for line in log.iter() {
//!     // draw line
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of lines kept.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per line (including room for truncation).
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Fixed-capacity log of the most recent events.
///
/// When full, pushing drops the oldest line. Lines longer than
/// `LOG_LINE_LENGTH - 1` characters are cut.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    total_pushed: u32,
}

impl DebugLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total_pushed: 0,
        }
    }

    /// Append a line, evicting the oldest if full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            if line.push(c).is_err() {
                // Multi-byte characters can run out of bytes before chars
                break;
            }
        }

        self.buffer.push_back(line).ok();
        self.total_pushed = self.total_pushed.wrapping_add(1);
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(|line| line.as_str()) }

    /// Number of lines held.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Whether nothing has been logged (or everything was evicted).
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Lines pushed since creation, including evicted ones.
    #[inline]
    pub const fn total_pushed(&self) -> u32 { self.total_pushed }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("Gear: D");
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some("Gear: D"));

        log.push("Lock toggled");
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some("Lock toggled"));
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();

        for i in 0..LOG_BUFFER_SIZE {
            let mut msg: String<16> = String::new();
            let _ = write!(msg, "Event {i}");
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("Newest");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next(), Some("Event 1"));
        assert_eq!(log.total_pushed(), LOG_BUFFER_SIZE as u32 + 1);
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push("This line is far too long to fit on the debug page terminal area");

        let stored = log.last().unwrap();
        assert_eq!(stored.chars().count(), LOG_LINE_LENGTH - 1);
    }

    #[test]
    fn test_debug_log_multibyte_does_not_overflow() {
        let mut log = DebugLog::new();
        log.push("°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°°");

        let stored = log.last().unwrap();
        assert!(stored.len() <= LOG_LINE_LENGTH);
        assert!(stored.chars().all(|c| c == '°'));
    }
}

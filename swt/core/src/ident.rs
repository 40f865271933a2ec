//! Timer identifiers

use core::fmt;

/// Handle naming one slot of the timer table
///
/// Identifiers are normally obtained from registration and stay valid until
/// the timer is stopped or a single-shot timer completes. Operations taking
/// a `TimerId` validate it against the slot table; a stale identifier yields
/// an error rather than touching another timer's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimerId(u8);

impl TimerId {
    /// Create an identifier from a raw slot index
    pub const fn from_raw(index: u8) -> Self {
        TimerId(index)
    }

    /// Get the raw slot index
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the slot index as a usize
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimerId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Timer({})", self.0);
    }
}

//! Tick arithmetic and timer period types

use core::fmt;
use crate::{SwtError, SwtResult};

/// Tick counter value driven by the hardware tick source
///
/// The counter increments by exactly one per hardware interrupt firing and
/// wraps at `u32::MAX`. Elapsed-tick computations are wrap-correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickCount(u32);

impl TickCount {
    /// Zero tick count
    pub const ZERO: Self = Self(0);

    /// Create a tick count from a raw value
    pub const fn new(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Get the raw tick value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Advance the counter by one tick
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Ticks elapsed since an earlier counter value (handles wraparound)
    pub const fn elapsed_since(self, earlier: TickCount) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl fmt::Display for TickCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick:{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickCount {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "tick:{}", self.0);
    }
}

/// Ticks between firings of a logical timer
///
/// A period is always nonzero; [`Period::new`] rejects zero so a registered
/// timer can never alias the free state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Period(u32);

impl Period {
    /// Create a new period, rejecting zero
    pub fn new(ticks: u32) -> SwtResult<Self> {
        if ticks == 0 {
            Err(SwtError::InvalidPeriod)
        } else {
            Ok(Period(ticks))
        }
    }

    /// Create a period without validation (const fn)
    pub const fn new_unchecked(ticks: u32) -> Self {
        Period(ticks)
    }

    /// Get the period in ticks
    pub const fn ticks(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ticks", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Period {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}ticks", self.0);
    }
}

/// Firing kind of a logical timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once and frees its slot
    SingleShot,
    /// Fires every period until stopped
    Periodic,
}

impl TimerKind {
    /// Check if this is a periodic timer
    pub const fn is_periodic(self) -> bool {
        matches!(self, Self::Periodic)
    }

    /// Check if this is a single-shot timer
    pub const fn is_single_shot(self) -> bool {
        matches!(self, Self::SingleShot)
    }
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerKind::SingleShot => write!(f, "SingleShot"),
            TimerKind::Periodic => write!(f, "Periodic"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimerKind {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TimerKind::SingleShot => defmt::write!(fmt, "SingleShot"),
            TimerKind::Periodic => defmt::write!(fmt, "Periodic"),
        }
    }
}

/// Macro to create compile-time period constants
#[macro_export]
macro_rules! period {
    ($value:literal) => {
        $crate::Period::new_unchecked($value)
    };
}

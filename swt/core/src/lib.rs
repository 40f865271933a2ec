#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # SWT Core
//!
//! Core types for the SWT software timer facility. This crate provides the
//! tick arithmetic, timer identifiers, and error taxonomy shared by the
//! multiplexer and its hardware glue. It contains no hardware knowledge.

use core::fmt;

pub mod ident;
pub mod time;

pub use ident::*;
pub use time::*;

/// SWT version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the timer facility
pub type SwtResult<T> = Result<T, SwtError>;

/// Error types for timer facility operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwtError {
    /// All timer slots are occupied
    CapacityExceeded,
    /// Identifier does not name an occupied slot
    InvalidId,
    /// Timer period must be nonzero
    InvalidPeriod,
}

impl fmt::Display for SwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwtError::CapacityExceeded => write!(f, "All timer slots are occupied"),
            SwtError::InvalidId => write!(f, "Identifier does not name an occupied slot"),
            SwtError::InvalidPeriod => write!(f, "Timer period must be nonzero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SwtError {}

#[cfg(feature = "defmt")]
impl defmt::Format for SwtError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SwtError::CapacityExceeded => defmt::write!(fmt, "CapacityExceeded"),
            SwtError::InvalidId => defmt::write!(fmt, "InvalidId"),
            SwtError::InvalidPeriod => defmt::write!(fmt, "InvalidPeriod"),
        }
    }
}

//! Hardware abstraction for the SWT timer facility
//!
//! This crate provides the vendor-agnostic trait for the hardware tick
//! source consumed by the multiplexer. Vendor implementations live in
//! subcrates (e.g. `swt-hal-systick` for the Cortex-M SysTick).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod tick;

// Re-export commonly used types
pub use error::{HalError, HalResult};
pub use tick::TickSource;

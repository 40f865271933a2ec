//! Cortex-M SysTick implementation of the SWT tick source
//!
//! Owns the SysTick peripheral and programs it for a fixed tick rate
//! derived from the core clock. The application's SysTick exception
//! handler is expected to call the facility's dispatch entry point.

#![no_std]
#![forbid(unsafe_code)]

use cortex_m::peripheral::{syst::SystClkSource, SYST};
use swt_hal::{HalError, HalResult, TickSource};

/// SysTick reload values are 24 bits wide
const RELOAD_MAX: u32 = (1 << 24) - 1;

/// Tick source backed by the Cortex-M SysTick counter
pub struct SysTickSource {
    syst: SYST,
    clock_hz: u32,
}

impl SysTickSource {
    /// Take ownership of SysTick; `clock_hz` is the core clock feeding it
    pub fn new(syst: SYST, clock_hz: u32) -> Self {
        Self { syst, clock_hz }
    }

    /// Release the SysTick peripheral
    pub fn free(self) -> SYST {
        self.syst
    }
}

/// Compute the SysTick reload value for `tick_hz` firings per second
///
/// The counter counts down from the reload value to zero, so the reload is
/// one less than the cycle count per tick. Rates that do not fit the 24-bit
/// reload register are rejected.
pub const fn reload_for(clock_hz: u32, tick_hz: u32) -> HalResult<u32> {
    if tick_hz == 0 || clock_hz / tick_hz < 2 {
        return Err(HalError::InvalidParameter);
    }
    let reload = clock_hz / tick_hz - 1;
    if reload > RELOAD_MAX {
        return Err(HalError::InvalidParameter);
    }
    Ok(reload)
}

impl TickSource for SysTickSource {
    fn start(&mut self, tick_hz: u32) -> HalResult<()> {
        let reload = reload_for(self.clock_hz, tick_hz)?;
        self.syst.set_clock_source(SystClkSource::Core);
        self.syst.set_reload(reload);
        self.syst.clear_current();
        self.syst.enable_interrupt();
        self.syst.enable_counter();
        Ok(())
    }

    fn stop(&mut self) -> HalResult<()> {
        self.syst.disable_interrupt();
        self.syst.disable_counter();
        Ok(())
    }

    // SysTick's COUNTFLAG clears on read; nothing to acknowledge here, so
    // the default no-op clear_interrupt applies.
}

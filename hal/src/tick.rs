//! Hardware tick source abstraction

use crate::error::HalResult;

/// A hardware peripheral that fires a periodic interrupt at a fixed rate
///
/// The multiplexer configures the source once at initialization; every
/// logical timer period is expressed in units of the source's tick.
pub trait TickSource {
    /// Configure the peripheral to fire `tick_hz` times per second and
    /// enable its update interrupt and counter
    fn start(&mut self, tick_hz: u32) -> HalResult<()>;

    /// Disable the update interrupt and stop the counter
    fn stop(&mut self) -> HalResult<()>;

    /// Acknowledge a pending update interrupt
    ///
    /// No-op where the hardware clears the flag on its own.
    fn clear_interrupt(&mut self) {}
}

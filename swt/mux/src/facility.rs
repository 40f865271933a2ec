//! Process-wide timer facility
//!
//! The interrupt handler is entered with no context pointer, so the
//! multiplexer the handler dispatches from is a single process-wide
//! instance behind a `critical-section` mutex, with free functions
//! mirroring the instance operations.

use crate::mux::TimerMux;
use crate::slot::Callback;
use core::cell::RefCell;
use critical_section::Mutex;
use swt_core::{Period, SwtResult, TimerId, TimerKind};
use swt_hal::{HalResult, TickSource};

/// Capacity of the process-wide timer table
pub const MAX_TIMERS: usize = 16;

/// Tick rate the facility configures its hardware source for
///
/// 1 kHz, so logical timer periods are expressed in milliseconds.
pub const TICK_HZ: u32 = 1_000;

/// Global multiplexer instance
static MUX: Mutex<RefCell<TimerMux<MAX_TIMERS>>> = Mutex::new(RefCell::new(TimerMux::new()));

/// Get access to the global multiplexer
///
/// The closure runs with the tick interrupt masked; keep it brief.
pub fn with_mux<F, R>(f: F) -> R
where
    F: FnOnce(&mut TimerMux<MAX_TIMERS>) -> R,
{
    critical_section::with(|cs| {
        let mut mux = MUX.borrow_ref_mut(cs);
        f(&mut mux)
    })
}

/// Reset the facility and start the hardware tick source at [`TICK_HZ`]
///
/// Timers registered before the call are discarded without their callbacks
/// being invoked.
pub fn initialize(source: &mut dyn TickSource) -> HalResult<()> {
    with_mux(|mux| mux.reset());
    source.start(TICK_HZ)
}

/// Stop the hardware tick source
///
/// Slot state is deliberately left untouched; no dispatch occurs until the
/// facility is initialized again. Callers must not assume slots were
/// cleared.
pub fn deinitialize(source: &mut dyn TickSource) -> HalResult<()> {
    source.stop()
}

/// Register a timer in the global table
pub fn register(period: Period, callback: Callback, kind: TimerKind) -> SwtResult<TimerId> {
    with_mux(|mux| mux.register(period, callback, kind))
}

/// Start or restart a registered timer
pub fn start(id: TimerId) -> SwtResult<()> {
    with_mux(|mux| mux.start(id))
}

/// Stop a timer and free its slot
pub fn stop(id: TimerId) -> SwtResult<()> {
    with_mux(|mux| mux.stop(id))
}

/// Dispatch one hardware tick
///
/// Call this from the tick source's interrupt handler. The tick counter
/// and slot table are updated inside the critical section; due callbacks
/// are then invoked in slot order with the borrow released, so callbacks
/// are free to register, start, and stop timers.
pub fn tick() {
    let due: heapless::Vec<Callback, MAX_TIMERS> = with_mux(|mux| mux.advance());
    for callback in due {
        callback();
    }
}

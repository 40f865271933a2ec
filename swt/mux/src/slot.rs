//! Timer slot records

use swt_core::{Period, TickCount, TimerKind};

/// Zero-argument procedure invoked when a timer fires
///
/// Callbacks run synchronously in interrupt context. They may call back
/// into the facility to register, start, or stop timers.
pub type Callback = fn();

/// One occupied entry of the timer table
///
/// A free slot is the absence of a record, so a cleared timer can never be
/// scanned as if it were live.
#[derive(Debug, Clone, Copy)]
pub struct TimerSlot {
    pub(crate) period: Period,
    pub(crate) callback: Callback,
    pub(crate) kind: TimerKind,
    pub(crate) offset: TickCount,
    pub(crate) running: bool,
}

impl TimerSlot {
    pub(crate) const fn new(
        period: Period,
        callback: Callback,
        kind: TimerKind,
        offset: TickCount,
    ) -> Self {
        Self {
            period,
            callback,
            kind,
            offset,
            running: false,
        }
    }

    /// Ticks between firings
    pub fn period(&self) -> Period {
        self.period
    }

    /// Firing kind
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Whether the timer is eligible for dispatch
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the timer fires at tick `now`
    ///
    /// The nonzero-elapsed guard keeps a timer from firing on the exact
    /// tick it was started.
    pub(crate) fn due_at(&self, now: TickCount) -> bool {
        let elapsed = now.elapsed_since(self.offset);
        self.running && elapsed != 0 && elapsed % self.period.ticks() == 0
    }
}

//! Fixed-capacity timer multiplexer

use crate::slot::{Callback, TimerSlot};
use heapless::Vec;
use swt_core::{Period, SwtError, SwtResult, TickCount, TimerId, TimerKind};

/// Multiplexes one hardware tick source into `N` independent logical timers
///
/// The table is a fixed array of slots indexed by [`TimerId`]; registration
/// always takes the lowest free index. All operations are bounded and
/// non-blocking, O(`N`) at worst.
pub struct TimerMux<const N: usize> {
    /// Tick counter, advanced once per hardware interrupt firing
    ticks: TickCount,
    /// Slot table; a free slot holds `None`
    slots: [Option<TimerSlot>; N],
    /// Count of occupied slots
    registered: usize,
}

impl<const N: usize> TimerMux<N> {
    /// Create an empty multiplexer
    pub const fn new() -> Self {
        const NONE: Option<TimerSlot> = None;
        Self {
            ticks: TickCount::ZERO,
            slots: [NONE; N],
            registered: 0,
        }
    }

    /// Reset to the empty state
    ///
    /// Registered timers are discarded without their callbacks being
    /// invoked.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total slot capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots
    pub fn registered(&self) -> usize {
        self.registered
    }

    /// Current tick counter value
    pub fn ticks(&self) -> TickCount {
        self.ticks
    }

    /// Register a timer in the lowest-index free slot
    ///
    /// The timer does not run until started; its first firing comes a full
    /// period after the start call. Fails with `CapacityExceeded` when
    /// every slot is occupied, leaving the table untouched.
    pub fn register(
        &mut self,
        period: Period,
        callback: Callback,
        kind: TimerKind,
    ) -> SwtResult<TimerId> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(SwtError::CapacityExceeded)?;
        self.slots[index] = Some(TimerSlot::new(period, callback, kind, self.ticks));
        self.registered += 1;
        Ok(TimerId::from_raw(index as u8))
    }

    /// Start or restart a timer
    ///
    /// The phase reference is reset to the current tick regardless of prior
    /// state, so the next firing is exactly one period away.
    pub fn start(&mut self, id: TimerId) -> SwtResult<()> {
        let now = self.ticks;
        let slot = self.slot_mut(id)?;
        slot.offset = now;
        slot.running = true;
        Ok(())
    }

    /// Stop a timer and free its slot
    ///
    /// The identifier becomes invalid and the slot is immediately eligible
    /// for reuse by a later registration.
    pub fn stop(&mut self, id: TimerId) -> SwtResult<()> {
        self.slot_mut(id)?;
        self.slots[id.index()] = None;
        self.registered -= 1;
        Ok(())
    }

    /// Whether the identified timer is currently running
    pub fn is_running(&self, id: TimerId) -> SwtResult<bool> {
        self.slot(id).map(|slot| slot.running)
    }

    /// Advance one hardware tick and collect the callbacks now due
    ///
    /// No-op while nothing is registered; the counter does not advance.
    /// Otherwise the counter increments first, then slots are scanned in
    /// ascending index order. A due single-shot slot is freed before its
    /// callback is collected, so a callback that re-registers itself finds
    /// its old slot available. The caller invokes the returned callbacks,
    /// in order, after releasing its borrow of the multiplexer.
    pub fn advance(&mut self) -> Vec<Callback, N> {
        let mut due = Vec::new();
        if self.registered == 0 {
            return due;
        }
        self.ticks.increment();
        let now = self.ticks;
        for entry in self.slots.iter_mut() {
            if let Some(slot) = entry {
                if slot.due_at(now) {
                    let callback = slot.callback;
                    if slot.kind.is_single_shot() {
                        *entry = None;
                        self.registered -= 1;
                    }
                    // at most N slots can be due, push cannot fail
                    let _ = due.push(callback);
                }
            }
        }
        due
    }

    fn slot(&self, id: TimerId) -> SwtResult<&TimerSlot> {
        self.slots
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(SwtError::InvalidId)
    }

    fn slot_mut(&mut self, id: TimerId) -> SwtResult<&mut TimerSlot> {
        self.slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(SwtError::InvalidId)
    }
}

impl<const N: usize> Default for TimerMux<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for TimerMux<N> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TimerMux{{registered: {}/{}, {}}}",
            self.registered,
            N,
            self.ticks
        );
    }
}

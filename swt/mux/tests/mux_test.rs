//! Multiplexer dispatch tests for swt-mux
//! These tests run on x86 host with std for testing, but verify no_std compatible code

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use swt_mux::{Period, SwtError, TimerKind, TimerMux};

/// Advance one tick and invoke whatever came due, like the interrupt entry
/// point does
fn run_tick<const N: usize>(mux: &mut TimerMux<N>) {
    for callback in mux.advance() {
        callback();
    }
}

static PERIODIC_FIRES: AtomicUsize = AtomicUsize::new(0);
fn count_periodic() {
    PERIODIC_FIRES.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn test_periodic_phase() {
    let mut mux: TimerMux<4> = TimerMux::new();
    let id = mux
        .register(Period::new(3).unwrap(), count_periodic, TimerKind::Periodic)
        .unwrap();
    mux.start(id).unwrap();

    // never on the start tick, then every third tick
    for _ in 0..2 {
        run_tick(&mut mux);
    }
    assert_eq!(PERIODIC_FIRES.load(Ordering::Relaxed), 0);
    for _ in 0..7 {
        run_tick(&mut mux);
    }
    // fired at ticks 3, 6, 9
    assert_eq!(PERIODIC_FIRES.load(Ordering::Relaxed), 3);
}

static SINGLE_FIRES: AtomicUsize = AtomicUsize::new(0);
fn count_single() {
    SINGLE_FIRES.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn test_single_shot_fires_once_and_frees() {
    let mut mux: TimerMux<4> = TimerMux::new();
    let id = mux
        .register(Period::new(5).unwrap(), count_single, TimerKind::SingleShot)
        .unwrap();
    mux.start(id).unwrap();

    for _ in 0..5 {
        run_tick(&mut mux);
    }
    assert_eq!(SINGLE_FIRES.load(Ordering::Relaxed), 1);
    assert_eq!(mux.registered(), 0);
    assert_eq!(mux.is_running(id), Err(SwtError::InvalidId));

    // the freed identifier is immediately reusable
    let again = mux
        .register(Period::new(5).unwrap(), count_single, TimerKind::SingleShot)
        .unwrap();
    assert_eq!(again, id);

    // an un-started replacement never fires at the old phase
    for _ in 0..10 {
        run_tick(&mut mux);
    }
    assert_eq!(SINGLE_FIRES.load(Ordering::Relaxed), 1);
}

fn noop() {}

#[test]
fn test_capacity_exceeded_leaves_slots_unmodified() {
    let mut mux: TimerMux<2> = TimerMux::new();
    let p = Period::new(4).unwrap();
    let a = mux.register(p, noop, TimerKind::Periodic).unwrap();
    let b = mux.register(p, noop, TimerKind::Periodic).unwrap();
    mux.start(a).unwrap();

    assert_eq!(
        mux.register(p, noop, TimerKind::Periodic),
        Err(SwtError::CapacityExceeded)
    );
    assert_eq!(mux.registered(), 2);
    assert_eq!(mux.is_running(a), Ok(true));
    assert_eq!(mux.is_running(b), Ok(false));
}

static STOPPED_FIRES: AtomicUsize = AtomicUsize::new(0);
fn count_stopped() {
    STOPPED_FIRES.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn test_stopped_timer_never_fires_again() {
    let mut mux: TimerMux<4> = TimerMux::new();
    let id = mux
        .register(Period::new(4).unwrap(), count_stopped, TimerKind::Periodic)
        .unwrap();
    mux.start(id).unwrap();

    run_tick(&mut mux);
    run_tick(&mut mux);
    mux.stop(id).unwrap();

    // keep the counter moving past the old phase with another timer
    let keeper = mux
        .register(Period::new(100).unwrap(), noop, TimerKind::Periodic)
        .unwrap();
    assert_eq!(keeper, id);
    mux.start(keeper).unwrap();
    for _ in 0..10 {
        run_tick(&mut mux);
    }
    assert_eq!(STOPPED_FIRES.load(Ordering::Relaxed), 0);
}

static RESTART_FIRES: AtomicUsize = AtomicUsize::new(0);
fn count_restart() {
    RESTART_FIRES.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn test_restart_resets_phase() {
    let mut mux: TimerMux<4> = TimerMux::new();
    let id = mux
        .register(Period::new(4).unwrap(), count_restart, TimerKind::Periodic)
        .unwrap();
    mux.start(id).unwrap();

    run_tick(&mut mux);
    run_tick(&mut mux);
    // restart at tick 2; the old tick-4 firing is gone
    mux.start(id).unwrap();
    for _ in 0..3 {
        run_tick(&mut mux);
    }
    assert_eq!(RESTART_FIRES.load(Ordering::Relaxed), 0);
    // elapsed since the restart reaches a full period at tick 6
    run_tick(&mut mux);
    assert_eq!(RESTART_FIRES.load(Ordering::Relaxed), 1);
}

static ORDER_LOG: Mutex<Vec<u8>> = Mutex::new(Vec::new());
fn order_first() {
    ORDER_LOG.lock().unwrap().push(0);
}
fn order_second() {
    ORDER_LOG.lock().unwrap().push(1);
}

#[test]
fn test_same_tick_firing_order_is_slot_order() {
    let mut mux: TimerMux<4> = TimerMux::new();
    let p = Period::new(2).unwrap();
    let a = mux.register(p, order_first, TimerKind::Periodic).unwrap();
    let b = mux.register(p, order_second, TimerKind::Periodic).unwrap();
    assert!(a < b);
    mux.start(a).unwrap();
    mux.start(b).unwrap();

    run_tick(&mut mux);
    run_tick(&mut mux);
    assert_eq!(*ORDER_LOG.lock().unwrap(), vec![0, 1]);
}

static SCENARIO_LOG: Mutex<Vec<char>> = Mutex::new(Vec::new());
fn scenario_a() {
    SCENARIO_LOG.lock().unwrap().push('a');
}
fn scenario_b() {
    SCENARIO_LOG.lock().unwrap().push('b');
}
fn scenario_c() {
    SCENARIO_LOG.lock().unwrap().push('c');
}

/// Capacity 4: A(period 3, periodic) and B(period 5, single-shot) start at
/// tick 0; C(period 5, periodic) reuses B's freed slot at tick 10. At tick
/// 15 both A and C are due and fire in slot order.
#[test]
fn test_mixed_timer_scenario() {
    let mut mux: TimerMux<4> = TimerMux::new();
    let a = mux
        .register(Period::new(3).unwrap(), scenario_a, TimerKind::Periodic)
        .unwrap();
    let b = mux
        .register(Period::new(5).unwrap(), scenario_b, TimerKind::SingleShot)
        .unwrap();
    mux.start(a).unwrap();
    mux.start(b).unwrap();

    for _ in 0..10 {
        run_tick(&mut mux);
    }
    // A at 3, 6, 9; B once at 5
    assert_eq!(*SCENARIO_LOG.lock().unwrap(), vec!['a', 'b', 'a', 'a']);

    let c = mux
        .register(Period::new(5).unwrap(), scenario_c, TimerKind::Periodic)
        .unwrap();
    assert_eq!(c, b);
    mux.start(c).unwrap();

    for _ in 0..5 {
        run_tick(&mut mux);
    }
    // A at 12, then the shared due tick 15: A (slot 0) before C (slot 1)
    assert_eq!(
        *SCENARIO_LOG.lock().unwrap(),
        vec!['a', 'b', 'a', 'a', 'a', 'a', 'c']
    );
}

//! Tick and period tests for swt-core
//! These tests run on x86 host with std for testing, but verify no_std compatible code

use swt_core::{period, Period, SwtError, TickCount, TimerKind};

#[test]
fn test_tick_increment() {
    let mut ticks = TickCount::ZERO;
    ticks.increment();
    ticks.increment();
    assert_eq!(ticks.raw(), 2);
}

#[test]
fn test_elapsed_since() {
    let start = TickCount::new(10);
    let now = TickCount::new(25);
    assert_eq!(now.elapsed_since(start), 15);
}

#[test]
fn test_elapsed_across_wrap() {
    let start = TickCount::new(u32::MAX - 1);
    let mut now = start;
    now.increment();
    now.increment();
    now.increment();
    assert_eq!(now.elapsed_since(start), 3);
    assert_eq!(now.raw(), 1);
}

#[test]
fn test_period_rejects_zero() {
    assert_eq!(Period::new(0), Err(SwtError::InvalidPeriod));
    assert!(Period::new(1).is_ok());
}

#[test]
fn test_period_ticks() {
    let p = Period::new(250).unwrap();
    assert_eq!(p.ticks(), 250);
}

#[test]
fn test_period_macro() {
    assert_eq!(period!(5), Period::new(5).unwrap());
}

#[test]
fn test_timer_kind_predicates() {
    assert!(TimerKind::Periodic.is_periodic());
    assert!(!TimerKind::Periodic.is_single_shot());
    assert!(TimerKind::SingleShot.is_single_shot());
}

#[test]
fn test_error_display() {
    let msg = format!("{}", SwtError::CapacityExceeded);
    assert!(msg.contains("slots"));
}

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # SWT Multiplexer
//!
//! Multiplexes one hardware periodic interrupt into a fixed number of
//! independent logical timers, each with its own period, callback, and
//! single-shot or periodic firing kind.
//!
//! The facility has two execution contexts: foreground code registers,
//! starts, and stops timers; the tick source's interrupt handler calls
//! [`facility::tick`], which advances the shared tick counter and invokes
//! every callback that is due. All shared state lives behind a
//! `critical-section` mutex, so foreground multi-field slot updates cannot
//! be torn by a concurrent tick. Callbacks run in interrupt context and
//! must be short and non-blocking.

pub mod facility;
pub mod mux;
pub mod slot;

pub use swt_core::*;
pub use facility::*;
pub use mux::*;
pub use slot::*;

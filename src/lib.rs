//! Simulated RAM-module lifecycle engine.
//!
//! Models a collection of memory modules with install/uninstall state
//! transitions, a synchronization bus, diagnostics over memory regions,
//! and deterministic reporting. No real hardware is touched; the crate
//! exists to exercise the lifecycle shape with an injectable progress
//! sink and RNG so every path stays testable.

pub mod diagnostics;
pub mod engine;
pub mod progress;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

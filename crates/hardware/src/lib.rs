//! Single-precision FPU and execution scheduler model.
//!
//! This crate implements a cycle-accurate IEEE-754 binary32 floating-point
//! unit with the following:
//! 1. **Arithmetic:** Bit-exact add, subtract, multiply and iterative divide
//!    with exception flags carried as data.
//! 2. **Scheduling:** A three-stage fixed pipe and a pool of division slots
//!    arbitrating one shared result channel per cycle.
//! 3. **State:** An explicit register bank with accrued exception flags.
//! 4. **Simulation:** Configuration, a run/drain driver and statistics.

/// Common types and constants (encoding layout, errors, register bank).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// FPU core (arithmetic units, scheduler, register file).
pub mod core;
/// Simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Cycle-level scheduler; construct with `ExecutionScheduler::new`.
pub use crate::core::pipeline::ExecutionScheduler;
/// Top-level simulator owning scheduler, registers and statistics.
pub use crate::sim::Simulator;

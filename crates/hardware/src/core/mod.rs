//! Core FPU implementation.
//!
//! This module contains the execution scheduler, the arithmetic units and
//! the architectural register file.

/// Architectural state (floating-point register file).
pub mod arch;

/// Execution pipeline (fixed pipe, division pool, scheduler, writeback).
pub mod pipeline;

/// Execution units (FPU).
pub mod units;

pub use self::pipeline::ExecutionScheduler;

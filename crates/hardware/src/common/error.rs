//! Host-side error definitions.
//!
//! Arithmetic exceptions never appear here: they are data, carried in
//! [`FpFlags`](crate::core::units::fpu::exception_flags::FpFlags) next to each
//! result. This module covers the failures of the model itself:
//! 1. **Configuration:** Malformed or out-of-range configuration documents.
//! 2. **Simulation:** Register indices outside the bank and drains that never settle.

use std::io;

use thiserror::Error;

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the schema.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read configuration file: {0}")]
    Io(#[from] io::Error),

    /// The division pool must hold at least one slot.
    #[error("scheduler.div_slots must be at least 1 (got {0})")]
    InvalidDivSlots(usize),
}

/// Errors raised by the simulator while driving the scheduler.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// A register index does not address the register bank.
    #[error("register index {0} is out of range (bank has {1} registers)")]
    RegisterOutOfRange(u8, usize),

    /// In-flight operations did not retire within the allotted cycles.
    #[error("scheduler did not drain within {0} cycles ({1} operations still in flight)")]
    DrainTimeout(u64, usize),
}

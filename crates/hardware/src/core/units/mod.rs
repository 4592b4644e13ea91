//! Execution units.
//!
//! This module contains the single-precision floating-point unit.

/// Floating-Point Unit for IEEE 754 operations.
pub mod fpu;

//! Architectural state.
//!
//! This module contains the floating-point register file read at issue and
//! written at writeback.

/// Floating-Point Register file implementation.
pub mod fpr;

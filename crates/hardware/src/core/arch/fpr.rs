//! Floating-Point Register File.
//!
//! This module implements the architectural register storage read by the
//! decode boundary and written by writeback. It performs the following:
//! 1. **Storage:** Maintains 32 single-precision registers (`f0`-`f31`) as raw bit patterns.
//! 2. **Hardwired Zero:** `f0` always reads `+0.0`; writes to it are discarded.
//! 3. **Bounds Checking:** Out-of-range indices are reported, never wrapped.

use crate::common::constants::NUM_REGISTERS;

/// Floating-point register file.
///
/// Registers hold raw IEEE-754 binary32 encodings so that NaN payloads and
/// signed zeros survive a write/read round trip unchanged.
#[derive(Clone, Debug)]
pub struct Fpr {
    fregs: [u32; NUM_REGISTERS],
}

impl Default for Fpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Fpr {
    /// Creates a register file with every register set to `+0.0`.
    pub fn new() -> Self {
        Self {
            fregs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register as raw bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The stored bit pattern, or `None` when `idx` is outside the file.
    pub fn read(&self, idx: usize) -> Option<u32> {
        self.fregs.get(idx).copied()
    }

    /// Writes a register from raw bits.
    ///
    /// Writes to `f0` are accepted and discarded.
    ///
    /// # Returns
    ///
    /// `false` when `idx` is outside the file.
    pub fn write(&mut self, idx: usize, val: u32) -> bool {
        match self.fregs.get_mut(idx) {
            Some(_) if idx == 0 => true,
            Some(slot) => {
                *slot = val;
                true
            }
            None => false,
        }
    }

    /// Clears every register to `+0.0`.
    pub fn clear(&mut self) {
        self.fregs = [0; NUM_REGISTERS];
    }
}

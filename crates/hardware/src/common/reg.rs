//! Register Bank.
//!
//! This module provides the `RegisterBank` struct, the explicit register-file
//! object that the writeback step receives by reference. It provides:
//! 1. **Storage:** The floating-point register file.
//! 2. **Accrued Flags:** A sticky exception-flag register OR-ed on every valid writeback.
//! 3. **Writeback Port:** The [`WritebackPort`] implementation used by the simulator.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::SimError;
use crate::core::arch::fpr::Fpr;
use crate::core::pipeline::writeback::WritebackPort;
use crate::core::units::fpu::exception_flags::FpFlags;

/// Register bank: floating-point registers plus the accrued exception flags.
#[derive(Clone, Debug, Default)]
pub struct RegisterBank {
    fpr: Fpr,
    accrued: FpFlags,
}

impl RegisterBank {
    /// Creates a bank with all registers zeroed and no flags accrued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register as raw bits.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] when `idx` does not address the bank.
    pub fn read(&self, idx: u8) -> Result<u32, SimError> {
        self.fpr
            .read(usize::from(idx))
            .ok_or(SimError::RegisterOutOfRange(idx, NUM_REGISTERS))
    }

    /// Writes a register from raw bits. Writes to register 0 are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] when `idx` does not address the bank.
    pub fn write(&mut self, idx: u8, val: u32) -> Result<(), SimError> {
        if self.fpr.write(usize::from(idx), val) {
            Ok(())
        } else {
            Err(SimError::RegisterOutOfRange(idx, NUM_REGISTERS))
        }
    }

    /// Reads a register and reinterprets it as an `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] when `idx` does not address the bank.
    pub fn read_f32(&self, idx: u8) -> Result<f32, SimError> {
        self.read(idx).map(f32::from_bits)
    }

    /// Writes an `f32` value to a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] when `idx` does not address the bank.
    pub fn write_f32(&mut self, idx: u8, val: f32) -> Result<(), SimError> {
        self.write(idx, val.to_bits())
    }

    /// Returns the sticky flags accrued since the last clear.
    pub fn accrued_flags(&self) -> FpFlags {
        self.accrued
    }

    /// Clears the accrued flags.
    pub fn clear_flags(&mut self) {
        self.accrued = FpFlags::NONE;
    }

    /// Zeroes every register and clears the accrued flags.
    pub fn reset(&mut self) {
        self.fpr.clear();
        self.accrued = FpFlags::NONE;
    }
}

impl WritebackPort for RegisterBank {
    fn write_result(&mut self, dest: u8, value: u32) -> Result<(), SimError> {
        self.write(dest, value)
    }

    fn accrue_flags(&mut self, flags: FpFlags) {
        self.accrued |= flags;
    }
}

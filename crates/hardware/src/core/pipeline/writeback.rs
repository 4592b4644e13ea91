//! Writeback port.
//!
//! The scheduler's output channel is committed through the [`WritebackPort`]
//! trait, so the register file is an explicit object passed by reference
//! rather than shared state the arithmetic reaches into.

use crate::common::error::SimError;
use crate::core::pipeline::signals::OpResponse;
use crate::core::units::fpu::exception_flags::FpFlags;

/// Destination for delivered results.
pub trait WritebackPort {
    /// Writes `value` to register `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] when `dest` does not address a register.
    fn write_result(&mut self, dest: u8, value: u32) -> Result<(), SimError>;

    /// ORs `flags` into the accrued exception flags.
    fn accrue_flags(&mut self, flags: FpFlags);
}

/// Commits a response to the port.
///
/// Writes are enabled only when the response is valid; flags are accrued only
/// after the register write succeeds.
///
/// # Returns
///
/// `true` if the response was committed.
///
/// # Errors
///
/// Propagates a rejected register write.
pub fn writeback<P: WritebackPort + ?Sized>(
    response: &OpResponse,
    port: &mut P,
) -> Result<bool, SimError> {
    if !response.valid {
        return Ok(false);
    }
    port.write_result(response.dest, response.result)?;
    port.accrue_flags(response.flags);
    Ok(true)
}

//! Fixed-pipe latch structure.
//!
//! Each add/sub/mul occupies one `PipelineSlot` from issue until its result
//! is taken for arbitration:
//! 1. **Issue:** Operands are decomposed and the slot becomes valid.
//! 2. **Compute:** The arithmetic result and flags are filled in.
//! 3. **Hold:** The slot waits for the output stage to retire it.

use crate::core::pipeline::signals::{FpOp, OpResponse};
use crate::core::units::fpu::components::FloatComponents;
use crate::core::units::fpu::exception_flags::FpFlags;

/// One stage of the fixed-latency pipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineSlot {
    /// Slot holds an operation.
    pub valid: bool,
    /// Operation to perform.
    pub op: FpOp,
    /// Destination register index.
    pub dest: u8,
    /// Decomposed first operand.
    pub a: FloatComponents,
    /// Decomposed second operand.
    pub b: FloatComponents,
    /// Result bits, meaningful once computed.
    pub result: u32,
    /// Exceptions raised by the computation.
    pub flags: FpFlags,
    /// Computation has run.
    pub computed: bool,
}

impl PipelineSlot {
    /// Converts a computed slot into a response.
    pub const fn to_response(&self) -> OpResponse {
        OpResponse::new(self.result, self.dest, self.flags)
    }
}

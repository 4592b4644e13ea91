//! Fixed-latency arithmetic pipe.
//!
//! Add, subtract and multiply share a three-stage pipe. The stages live in a
//! ring indexed by the issue cycle modulo the depth, so advancing the pipe
//! rotates the cursor instead of copying slots:
//! - slot `cursor` holds the oldest operation and is retired first,
//! - slot `cursor - 1` was issued last cycle and is computed this cycle,
//! - slot `cursor` is then reused for the newly issued operation.

use crate::common::constants::FIXED_PIPE_DEPTH;
use crate::core::pipeline::latches::PipelineSlot;
use crate::core::pipeline::signals::{FpOp, OpRequest, OpResponse};
use crate::core::units::fpu::components::{FloatComponents, decompose};
use crate::core::units::fpu::compose::canonical_nan;
use crate::core::units::fpu::exception_flags::FpFlags;
use crate::core::units::fpu::{add_sub, multiply};

/// Three-stage ring of pipeline slots.
#[derive(Clone, Debug, Default)]
pub struct FixedPipe {
    slots: [PipelineSlot; FIXED_PIPE_DEPTH],
    cursor: usize,
}

// Divides belong to the division pool; one reaching the pipe yields NaN/NV.
fn evaluate(op: FpOp, a: FloatComponents, b: FloatComponents) -> (u32, FpFlags) {
    let mut flags = FpFlags::NONE;
    let bits = match op {
        FpOp::Add => add_sub::add(a, b, &mut flags),
        FpOp::Sub => add_sub::sub(a, b, &mut flags),
        FpOp::Mul => multiply::mul(a, b, &mut flags),
        FpOp::Div => {
            flags |= FpFlags::NV;
            canonical_nan()
        }
    };
    (bits, flags)
}

impl FixedPipe {
    /// Creates an empty pipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the result leaving the final stage, if any.
    pub fn retire(&mut self) -> Option<OpResponse> {
        let slot = &mut self.slots[self.cursor];
        if !slot.valid {
            return None;
        }
        debug_assert!(slot.computed, "retiring an uncomputed slot");
        let response = slot.to_response();
        *slot = PipelineSlot::default();
        Some(response)
    }

    /// Runs the arithmetic for the operation issued on the previous cycle.
    pub fn compute(&mut self) {
        let idx = (self.cursor + FIXED_PIPE_DEPTH - 1) % FIXED_PIPE_DEPTH;
        let slot = &mut self.slots[idx];
        if slot.valid && !slot.computed {
            let (result, flags) = evaluate(slot.op, slot.a, slot.b);
            slot.result = result;
            slot.flags = flags;
            slot.computed = true;
        }
    }

    /// Places a request in the stage freed by [`FixedPipe::retire`].
    pub fn issue(&mut self, request: &OpRequest) {
        debug_assert!(!self.slots[self.cursor].valid, "issue into an occupied slot");
        debug_assert!(!request.op.is_divide(), "divides issue to the division pool");
        self.slots[self.cursor] = PipelineSlot {
            valid: true,
            op: request.op,
            dest: request.dest,
            a: decompose(request.operand_a),
            b: decompose(request.operand_b),
            ..PipelineSlot::default()
        };
    }

    /// Rotates the ring by one stage.
    pub const fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % FIXED_PIPE_DEPTH;
    }

    /// Number of operations currently in the pipe.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.valid).count()
    }

    /// Invalidates every stage and rewinds the cursor.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

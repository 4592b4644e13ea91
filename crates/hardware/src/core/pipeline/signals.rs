//! Scheduler request and response signals.
//!
//! This module defines the per-cycle interface of the execution scheduler. It performs:
//! 1. **Operation Encoding:** The four arithmetic operations and their 4-bit opcode.
//! 2. **Request Signals:** Operands, destination and valid bit presented each cycle.
//! 3. **Response Signals:** The single result channel driven by arbitration.
//! 4. **Issue Feedback:** What happened to the presented request this cycle.

use serde::Serialize;

use crate::core::units::fpu::exception_flags::FpFlags;

/// Floating-point operation selected by a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FpOp {
    /// Addition.
    #[default]
    Add = 0,

    /// Subtraction.
    Sub = 1,

    /// Multiplication.
    Mul = 2,

    /// Division.
    Div = 3,
}

impl FpOp {
    /// Decodes a 4-bit opcode. Unassigned encodings return `None`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Add),
            1 => Some(Self::Sub),
            2 => Some(Self::Mul),
            3 => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the 4-bit opcode.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns true for operations that use the variable-latency divider.
    pub const fn is_divide(self) -> bool {
        matches!(self, Self::Div)
    }

    /// Assembly-style mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "fadd.s",
            Self::Sub => "fsub.s",
            Self::Mul => "fmul.s",
            Self::Div => "fdiv.s",
        }
    }
}

/// Request presented to the scheduler on one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpRequest {
    /// Operation to perform.
    pub op: FpOp,
    /// First operand (raw binary32 bits).
    pub operand_a: u32,
    /// Second operand (raw binary32 bits).
    pub operand_b: u32,
    /// Destination register index carried through to the response.
    pub dest: u8,
    /// Request is present this cycle.
    pub valid: bool,
}

impl OpRequest {
    /// Creates a valid request.
    pub const fn new(op: FpOp, operand_a: u32, operand_b: u32, dest: u8) -> Self {
        Self {
            op,
            operand_a,
            operand_b,
            dest,
            valid: true,
        }
    }

    /// Creates a valid request from `f32` operands.
    pub const fn from_f32(op: FpOp, a: f32, b: f32, dest: u8) -> Self {
        Self::new(op, a.to_bits(), b.to_bits(), dest)
    }

    /// An empty cycle: no request presented.
    pub const fn idle() -> Self {
        Self {
            op: FpOp::Add,
            operand_a: 0,
            operand_b: 0,
            dest: 0,
            valid: false,
        }
    }
}

/// Result delivered on the shared output channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpResponse {
    /// Result (raw binary32 bits).
    pub result: u32,
    /// Destination register index of the originating request.
    pub dest: u8,
    /// Exceptions raised by the operation.
    pub flags: FpFlags,
    /// A result is present this cycle.
    pub valid: bool,
}

impl OpResponse {
    /// Creates a valid response.
    pub const fn new(result: u32, dest: u8, flags: FpFlags) -> Self {
        Self {
            result,
            dest,
            flags,
            valid: true,
        }
    }

    /// An empty output cycle.
    pub const fn idle() -> Self {
        Self {
            result: 0,
            dest: 0,
            flags: FpFlags::NONE,
            valid: false,
        }
    }

    /// Result reinterpreted as `f32`.
    pub const fn result_f32(&self) -> f32 {
        f32::from_bits(self.result)
    }
}

/// Outcome of the request presented on a cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    /// No valid request was presented.
    #[default]
    Idle,
    /// The request entered the fixed pipe or a division slot.
    Accepted,
    /// A global stall held the request; present it again.
    Stalled,
    /// A divide found no free slot; present it again.
    Blocked,
    /// A divide found no free slot and was discarded.
    Dropped,
}

impl IssueStatus {
    /// Returns true if the caller must present the same request again.
    pub const fn must_retry(self) -> bool {
        matches!(self, Self::Stalled | Self::Blocked)
    }
}

/// Everything the scheduler drives on one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutput {
    /// Shared result channel.
    pub response: OpResponse,
    /// Fate of the request presented this cycle.
    pub issue: IssueStatus,
}

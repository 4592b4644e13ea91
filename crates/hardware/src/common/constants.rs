//! Global FPU Constants.
//!
//! This module defines the constants shared across the arithmetic units and the
//! scheduler. It includes:
//! 1. **Encoding Constants:** Field masks and shifts for the IEEE-754 binary32 format.
//! 2. **Special Values:** Canonical NaN and infinity bit patterns.
//! 3. **Datapath Widths:** Hidden-bit and carry-bit positions used by the units.
//! 4. **Timing Constants:** Fixed pipe depth and division iteration count.

/// Bit mask for the sign bit (bit 31).
pub const SIGN_BIT: u32 = 0x8000_0000;

/// Bit position of the least significant exponent bit.
pub const EXPONENT_SHIFT: u32 = 23;

/// Mask for the 8-bit biased exponent after shifting.
pub const EXPONENT_MASK: u32 = 0xFF;

/// Mask for the 23 stored fraction bits.
pub const FRACTION_MASK: u32 = 0x007F_FFFF;

/// Implicit leading one of a normal value, at the top of a 24-bit mantissa.
pub const HIDDEN_BIT: u32 = 0x0080_0000;

/// Carry-out position of a 24-bit mantissa sum.
pub const CARRY_BIT: u32 = 0x0100_0000;

/// Exponent bias for single precision.
pub const EXPONENT_BIAS: i32 = 127;

/// Biased exponent of infinity and NaN.
pub const EXPONENT_SPECIAL: u32 = 0xFF;

/// Smallest exponent at which the composer still produces a subnormal.
///
/// Results more than this far below zero flush to a signed zero.
pub const SUBNORMAL_EXPONENT_FLOOR: i32 = -22;

/// Mantissa width including the hidden bit.
pub const MANTISSA_BITS: u32 = 24;

/// Canonical quiet NaN emitted for every invalid operation.
pub const CANONICAL_NAN: u32 = 0x7FC0_0000;

/// Positive infinity.
pub const POSITIVE_INFINITY: u32 = 0x7F80_0000;

/// Number of stages in the add/sub/mul pipe.
pub const FIXED_PIPE_DEPTH: usize = 3;

/// Restoring-division iterations: 24 mantissa bits plus one guard bit.
pub const DIV_ITERATIONS: u8 = 25;

/// Cycles from divide issue to delivery: one setup tick plus the iterations.
pub const DIV_LATENCY: u64 = 1 + DIV_ITERATIONS as u64;

/// Number of architectural registers in the register bank.
pub const NUM_REGISTERS: usize = 32;

//! Floating-Point Unit (FPU).
//!
//! This module implements the single-precision arithmetic used by the
//! execution scheduler. Every operation is a pure function of its operands:
//! it returns the raw binary32 result together with the exception flags it
//! raised, and never panics or aborts on exceptional inputs.
//!
//! Operations are organized into submodules:
//! - [`components`]: Decomposition and classification of binary32 patterns.
//! - [`compose`]: Packing results with the overflow and underflow policy.
//! - [`add_sub`]: Aligned magnitude addition and subtraction.
//! - [`multiply`]: Mantissa product with single-shift normalization.
//! - [`divide`]: The iterative restoring division state machine.
//! - [`exception_flags`]: The sticky exception flag set.

/// Decomposition and classification.
pub mod components;

/// Result composition.
pub mod compose;

/// Addition and subtraction.
pub mod add_sub;

/// Multiplication.
pub mod multiply;

/// Iterative division.
pub mod divide;

/// Floating-point exception flag types.
pub mod exception_flags;

use crate::core::pipeline::signals::FpOp;

use self::components::decompose;
use self::divide::DivisionState;
use self::exception_flags::FpFlags;

/// Floating-Point Unit for single-precision operations.
///
/// Combinational reference for the four arithmetic operations. The scheduler
/// drives the same building blocks stage by stage; this type runs them to
/// completion in one call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fpu;

impl Fpu {
    /// Executes a floating-point operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand (raw binary32 bits).
    /// * `b`  - Second operand (raw binary32 bits).
    ///
    /// # Returns
    ///
    /// The raw result bits and the exception flags raised.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpsim_core::core::units::fpu::Fpu;
    /// use fpsim_core::core::pipeline::signals::FpOp;
    ///
    /// let (bits, flags) = Fpu::execute(FpOp::Add, 3.0f32.to_bits(), 2.0f32.to_bits());
    /// assert_eq!(bits, 0x40A0_0000);
    /// assert!(flags.is_empty());
    /// ```
    pub fn execute(op: FpOp, a: u32, b: u32) -> (u32, FpFlags) {
        match op {
            FpOp::Add => Self::add(a, b),
            FpOp::Sub => Self::sub(a, b),
            FpOp::Mul => Self::mul(a, b),
            FpOp::Div => Self::div(a, b),
        }
    }

    /// Adds `a` and `b`.
    pub fn add(a: u32, b: u32) -> (u32, FpFlags) {
        let mut flags = FpFlags::NONE;
        let bits = add_sub::add(decompose(a), decompose(b), &mut flags);
        (bits, flags)
    }

    /// Subtracts `b` from `a`.
    pub fn sub(a: u32, b: u32) -> (u32, FpFlags) {
        let mut flags = FpFlags::NONE;
        let bits = add_sub::sub(decompose(a), decompose(b), &mut flags);
        (bits, flags)
    }

    /// Multiplies `a` by `b`.
    pub fn mul(a: u32, b: u32) -> (u32, FpFlags) {
        let mut flags = FpFlags::NONE;
        let bits = multiply::mul(decompose(a), decompose(b), &mut flags);
        (bits, flags)
    }

    /// Divides `a` by `b`, running every division iteration.
    pub fn div(a: u32, b: u32) -> (u32, FpFlags) {
        DivisionState::setup(decompose(a), decompose(b)).run_to_completion()
    }
}

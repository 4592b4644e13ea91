//! Addition and subtraction.
//!
//! The adder aligns the smaller-exponent operand, adds or subtracts the
//! magnitudes, and normalizes by a single right shift on carry-out or a left
//! shift after cancellation. Bits shed during alignment or normalization are
//! truncated and reported as inexact; no rounding increment is applied.

use crate::common::constants::{CARRY_BIT, MANTISSA_BITS};

use super::components::FloatComponents;
use super::compose::{canonical_nan, compose, infinity, signed_zero};
use super::exception_flags::FpFlags;

/// Shifts `mantissa` right by `distance`, raising inexact for shed bits.
fn align(mantissa: u32, distance: i32, flags: &mut FpFlags) -> u32 {
    if distance <= 0 {
        return mantissa;
    }
    if distance >= MANTISSA_BITS as i32 {
        if mantissa != 0 {
            *flags |= FpFlags::NX;
        }
        return 0;
    }
    let distance = distance as u32;
    if mantissa & ((1 << distance) - 1) != 0 {
        *flags |= FpFlags::NX;
    }
    mantissa >> distance
}

/// Adds two decomposed operands.
///
/// # Returns
///
/// The raw binary32 sum. Raised exceptions are OR-ed into `flags`.
pub fn add(a: FloatComponents, b: FloatComponents, flags: &mut FpFlags) -> u32 {
    if a.is_nan() || b.is_nan() {
        *flags |= FpFlags::NV;
        return canonical_nan();
    }

    match (a.is_infinity(), b.is_infinity()) {
        (true, true) if a.sign != b.sign => {
            *flags |= FpFlags::NV;
            return canonical_nan();
        }
        (true, _) => return infinity(a.sign),
        (false, true) => return infinity(b.sign),
        (false, false) => {}
    }

    match (a.is_zero(), b.is_zero()) {
        (true, true) => return signed_zero(a.sign && b.sign),
        (true, false) => return b.to_bits(),
        (false, true) => return a.to_bits(),
        (false, false) => {}
    }

    let exp_a = a.adjusted_exponent();
    let exp_b = b.adjusted_exponent();
    let mut exponent = exp_a.max(exp_b);
    let mant_a = align(a.effective_mantissa, exponent - exp_a, flags);
    let mant_b = align(b.effective_mantissa, exponent - exp_b, flags);

    let (sign, mut sum) = if a.sign == b.sign {
        (a.sign, mant_a + mant_b)
    } else if mant_a > mant_b {
        (a.sign, mant_a - mant_b)
    } else if mant_b > mant_a {
        (b.sign, mant_b - mant_a)
    } else {
        return 0;
    };

    if sum == 0 {
        return 0;
    }

    if sum & CARRY_BIT != 0 {
        if sum & 1 != 0 {
            *flags |= FpFlags::NX;
        }
        sum >>= 1;
        exponent += 1;
    } else {
        let leading = (sum.leading_zeros() - (32 - MANTISSA_BITS)) as i32;
        let shift = leading.min(exponent - 1);
        sum <<= shift;
        exponent -= shift;
    }

    compose(sign, exponent, sum, flags)
}

/// Subtracts `b` from `a`: addition with the sign of `b` inverted.
pub fn sub(a: FloatComponents, b: FloatComponents, flags: &mut FpFlags) -> u32 {
    add(a, b.negated(), flags)
}

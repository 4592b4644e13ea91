//! Multiplication.

use crate::common::constants::{EXPONENT_BIAS, MANTISSA_BITS};

use super::components::FloatComponents;
use super::compose::{canonical_nan, compose, infinity, signed_zero};
use super::exception_flags::FpFlags;

/// Bit 47 of the 48-bit mantissa product: set when the product of two
/// mantissas in `[1, 2)` lands in `[2, 4)`.
const PRODUCT_TOP_BIT: u64 = 1 << (2 * MANTISSA_BITS - 1);

const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;

/// Multiplies two decomposed operands.
///
/// Subnormal operands are pre-normalized, so their full precision takes part
/// in the product. The 48-bit product is normalized with a single shift and
/// truncated to 24 bits.
pub fn mul(a: FloatComponents, b: FloatComponents, flags: &mut FpFlags) -> u32 {
    let sign = a.sign ^ b.sign;

    if a.is_nan() || b.is_nan() {
        *flags |= FpFlags::NV;
        return canonical_nan();
    }
    if (a.is_zero() && b.is_infinity()) || (a.is_infinity() && b.is_zero()) {
        *flags |= FpFlags::NV;
        return canonical_nan();
    }
    if a.is_infinity() || b.is_infinity() {
        return infinity(sign);
    }
    if a.is_zero() || b.is_zero() {
        return signed_zero(sign);
    }

    let (exp_a, mant_a) = a.normalized();
    let (exp_b, mant_b) = b.normalized();
    let mut exponent = exp_a + exp_b - EXPONENT_BIAS;

    let product = u64::from(mant_a) * u64::from(mant_b);
    let shift = if product & PRODUCT_TOP_BIT != 0 {
        exponent += 1;
        MANTISSA_BITS
    } else {
        MANTISSA_BITS - 1
    };

    if product & ((1 << shift) - 1) != 0 {
        *flags |= FpFlags::NX;
    }

    compose(sign, exponent, ((product >> shift) & MANTISSA_MASK) as u32, flags)
}

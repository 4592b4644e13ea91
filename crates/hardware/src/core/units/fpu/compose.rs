//! Result composition.
//!
//! Packs a sign, an unbiased-range signed exponent and a 24-bit mantissa back
//! into a binary32 pattern, applying the overflow and underflow policy. The
//! composer never re-normalizes: callers deliver a mantissa whose leading one
//! already sits at the hidden-bit position, or a denormal-form mantissa at
//! exponent 1.

use crate::common::constants::{
    CANONICAL_NAN, CARRY_BIT, EXPONENT_SHIFT, EXPONENT_SPECIAL, FRACTION_MASK, HIDDEN_BIT,
    POSITIVE_INFINITY, SIGN_BIT, SUBNORMAL_EXPONENT_FLOOR,
};

use super::exception_flags::FpFlags;

/// Returns the canonical quiet NaN.
#[inline]
pub const fn canonical_nan() -> u32 {
    CANONICAL_NAN
}

/// Returns infinity with the given sign.
#[inline]
pub const fn infinity(sign: bool) -> u32 {
    sign_bit(sign) | POSITIVE_INFINITY
}

/// Returns zero with the given sign.
#[inline]
pub const fn signed_zero(sign: bool) -> u32 {
    sign_bit(sign)
}

#[inline]
const fn sign_bit(sign: bool) -> u32 {
    if sign { SIGN_BIT } else { 0 }
}

/// Composes a binary32 result.
///
/// Policy, applied in order:
/// 1. `exponent >= 255`: signed infinity, raising overflow and inexact.
/// 2. `mantissa == 0`: signed zero, no flags.
/// 3. `exponent <= 0`: underflow. Within the subnormal range the mantissa is
///    shifted right by `1 - exponent` (inexact if set bits are shed). Below it
///    the result is a signed zero and inexact.
/// 4. Otherwise the normal encoding with the hidden bit stripped. A mantissa
///    without the hidden bit at exponent 1 encodes as a subnormal.
///
/// # Arguments
///
/// * `sign` - Result sign.
/// * `exponent` - Biased exponent, possibly out of range.
/// * `mantissa` - 24-bit mantissa; must be below the carry bit.
/// * `flags` - Accumulator for raised exceptions.
pub fn compose(sign: bool, exponent: i32, mantissa: u32, flags: &mut FpFlags) -> u32 {
    debug_assert!(mantissa < CARRY_BIT, "mantissa {mantissa:#x} not normalized");

    if exponent >= EXPONENT_SPECIAL as i32 {
        *flags |= FpFlags::OF | FpFlags::NX;
        return infinity(sign);
    }

    if mantissa == 0 {
        return signed_zero(sign);
    }

    if exponent <= 0 {
        *flags |= FpFlags::UF;
        if exponent < SUBNORMAL_EXPONENT_FLOOR {
            *flags |= FpFlags::NX;
            return signed_zero(sign);
        }
        let shift = (1 - exponent) as u32;
        if mantissa & ((1 << shift) - 1) != 0 {
            *flags |= FpFlags::NX;
        }
        return sign_bit(sign) | (mantissa >> shift);
    }

    if mantissa & HIDDEN_BIT == 0 {
        return sign_bit(sign) | mantissa;
    }

    sign_bit(sign) | ((exponent as u32) << EXPONENT_SHIFT) | (mantissa & FRACTION_MASK)
}

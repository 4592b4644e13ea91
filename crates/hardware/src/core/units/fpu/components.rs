//! IEEE-754 binary32 decomposition.
//!
//! Splits a raw 32-bit pattern into sign, biased exponent and mantissa fields
//! and classifies it. The class is an enum, so a value is exactly one of
//! zero, subnormal, normal, infinity or NaN.

use crate::common::constants::{
    EXPONENT_MASK, EXPONENT_SHIFT, EXPONENT_SPECIAL, FRACTION_MASK, HIDDEN_BIT, MANTISSA_BITS,
    SIGN_BIT,
};

/// Classification of a binary32 value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloatClass {
    /// Exponent and fraction both zero.
    #[default]
    Zero,
    /// Exponent zero, fraction nonzero.
    Subnormal,
    /// Finite value with the implicit leading one.
    Normal,
    /// Exponent all ones, fraction zero.
    Infinity,
    /// Exponent all ones, fraction nonzero.
    Nan,
}

/// Decomposed fields of a binary32 value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloatComponents {
    /// Sign bit (`true` = negative).
    pub sign: bool,
    /// Biased exponent field.
    pub exponent: u8,
    /// Raw 23-bit fraction field.
    pub mantissa: u32,
    /// 24-bit mantissa with the hidden bit set for normal values.
    pub effective_mantissa: u32,
    /// Value class.
    pub class: FloatClass,
}

/// Decomposes a raw binary32 pattern.
pub fn decompose(bits: u32) -> FloatComponents {
    let sign = bits & SIGN_BIT != 0;
    let exp_field = (bits >> EXPONENT_SHIFT) & EXPONENT_MASK;
    let mantissa = bits & FRACTION_MASK;

    let class = match (exp_field, mantissa) {
        (0, 0) => FloatClass::Zero,
        (0, _) => FloatClass::Subnormal,
        (EXPONENT_SPECIAL, 0) => FloatClass::Infinity,
        (EXPONENT_SPECIAL, _) => FloatClass::Nan,
        _ => FloatClass::Normal,
    };

    let effective_mantissa = if class == FloatClass::Normal {
        mantissa | HIDDEN_BIT
    } else {
        mantissa
    };

    FloatComponents {
        sign,
        // exp_field is masked to 8 bits
        exponent: exp_field as u8,
        mantissa,
        effective_mantissa,
        class,
    }
}

impl FloatComponents {
    /// Returns true for +0.0 and -0.0.
    pub fn is_zero(&self) -> bool {
        self.class == FloatClass::Zero
    }

    /// Returns true for nonzero values with a zero exponent field.
    pub fn is_subnormal(&self) -> bool {
        self.class == FloatClass::Subnormal
    }

    /// Returns true for normal finite values.
    pub fn is_normal(&self) -> bool {
        self.class == FloatClass::Normal
    }

    /// Returns true for either infinity.
    pub fn is_infinity(&self) -> bool {
        self.class == FloatClass::Infinity
    }

    /// Returns true for any NaN, quiet or signaling.
    pub fn is_nan(&self) -> bool {
        self.class == FloatClass::Nan
    }

    /// Exponent used for alignment: 1 for zero and subnormals, the field otherwise.
    pub fn adjusted_exponent(&self) -> i32 {
        match self.class {
            FloatClass::Zero | FloatClass::Subnormal => 1,
            _ => i32::from(self.exponent),
        }
    }

    /// Returns `(exponent, mantissa)` with the leading one moved to the hidden
    /// bit position.
    ///
    /// Subnormals are shifted left until the hidden bit is set, and the
    /// exponent is decremented once per shift starting from 1. Normal values
    /// are returned unchanged. Zero yields `(1, 0)`.
    pub fn normalized(&self) -> (i32, u32) {
        if self.class != FloatClass::Subnormal {
            return (self.adjusted_exponent(), self.effective_mantissa);
        }
        let shift = self.effective_mantissa.leading_zeros() - (32 - MANTISSA_BITS);
        // shift is at most 22 for a nonzero 23-bit fraction
        (1 - shift as i32, self.effective_mantissa << shift)
    }

    /// Returns the same value with the sign inverted.
    #[must_use]
    pub fn negated(self) -> Self {
        Self {
            sign: !self.sign,
            ..self
        }
    }

    /// Re-encodes the fields as a raw binary32 pattern.
    pub fn to_bits(&self) -> u32 {
        let sign = if self.sign { SIGN_BIT } else { 0 };
        sign | (u32::from(self.exponent) << EXPONENT_SHIFT) | self.mantissa
    }
}

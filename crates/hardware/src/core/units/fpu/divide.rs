//! Iterative restoring division.
//!
//! A divide is a small state machine rather than a single function call, so
//! the scheduler can hold several in flight and advance each by one iteration
//! per cycle:
//! 1. **Setup:** Sign, exponent and the first partial remainder are computed
//!    on issue. Special operands resolve to a terminal result immediately but
//!    still count down the full iteration budget.
//! 2. **Iterate:** Each step produces one quotient bit. After
//!    [`DIV_ITERATIONS`] steps the quotient holds 24 mantissa bits plus a
//!    guard bit.
//! 3. **Round:** Round-to-nearest-even from the guard bit and the final
//!    remainder, then compose.

use crate::common::constants::{CARRY_BIT, DIV_ITERATIONS, EXPONENT_BIAS};

use super::components::FloatComponents;
use super::compose::{canonical_nan, compose, infinity, signed_zero};
use super::exception_flags::FpFlags;

/// State of one in-flight division.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisionState {
    sign: bool,
    exponent: i32,
    remainder: u32,
    divisor: u32,
    quotient: u32,
    iterations_remaining: u8,
    flags: FpFlags,
    result: Option<u32>,
}

impl DivisionState {
    /// Prepares a division of `a` by `b`.
    pub fn setup(a: FloatComponents, b: FloatComponents) -> Self {
        let sign = a.sign ^ b.sign;
        let mut state = Self {
            sign,
            exponent: 0,
            remainder: 0,
            divisor: 0,
            quotient: 0,
            iterations_remaining: DIV_ITERATIONS,
            flags: FpFlags::NONE,
            result: None,
        };

        let special = if a.is_nan() || b.is_nan() {
            state.flags |= FpFlags::NV;
            Some(canonical_nan())
        } else if b.is_zero() {
            if a.is_zero() {
                state.flags |= FpFlags::NV;
                Some(canonical_nan())
            } else {
                state.flags |= FpFlags::DZ;
                Some(infinity(sign))
            }
        } else if a.is_infinity() {
            if b.is_infinity() {
                state.flags |= FpFlags::NV;
                Some(canonical_nan())
            } else {
                Some(infinity(sign))
            }
        } else if b.is_infinity() || a.is_zero() {
            Some(signed_zero(sign))
        } else {
            None
        };

        if special.is_some() {
            state.result = special;
            return state;
        }

        let (exp_a, mant_a) = a.normalized();
        let (exp_b, mant_b) = b.normalized();
        state.exponent = exp_a - exp_b + EXPONENT_BIAS;
        state.divisor = mant_b;
        state.remainder = if mant_a < mant_b {
            state.exponent -= 1;
            mant_a << 1
        } else {
            mant_a
        };
        state
    }

    /// Advances the division by one iteration. Terminal states are unchanged.
    pub fn step(&mut self) {
        if self.iterations_remaining == 0 {
            return;
        }
        if self.result.is_none() {
            self.quotient <<= 1;
            if self.remainder >= self.divisor {
                self.remainder -= self.divisor;
                self.quotient |= 1;
            }
            self.remainder <<= 1;
        }
        self.iterations_remaining -= 1;
        if self.iterations_remaining == 0 && self.result.is_none() {
            self.round();
        }
    }

    fn round(&mut self) {
        let guard = self.quotient & 1 != 0;
        let round = self.remainder >= self.divisor;
        let sticky = self.remainder != 0;
        let mut mantissa = self.quotient >> 1;

        if guard || sticky {
            self.flags |= FpFlags::NX;
        }
        if guard && (round || sticky || mantissa & 1 != 0) {
            mantissa += 1;
            if mantissa & CARRY_BIT != 0 {
                mantissa >>= 1;
                self.exponent += 1;
            }
        }

        self.result = Some(compose(self.sign, self.exponent, mantissa, &mut self.flags));
    }

    /// Returns true once every iteration has run.
    pub const fn is_terminal(&self) -> bool {
        self.iterations_remaining == 0
    }

    /// Iterations left before the result is available.
    pub const fn iterations_remaining(&self) -> u8 {
        self.iterations_remaining
    }

    /// Returns the rounded result and its flags once terminal.
    pub fn result(&self) -> Option<(u32, FpFlags)> {
        if self.is_terminal() {
            self.result.map(|r| (r, self.flags))
        } else {
            None
        }
    }

    /// Runs the remaining iterations and returns the result.
    pub fn run_to_completion(mut self) -> (u32, FpFlags) {
        while !self.is_terminal() {
            self.step();
        }
        (self.result.unwrap_or_else(canonical_nan), self.flags)
    }
}

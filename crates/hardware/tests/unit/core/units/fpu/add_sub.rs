//! Addition and subtraction tests.

use fpsim_core::core::units::fpu::Fpu;
use fpsim_core::core::units::fpu::exception_flags::FpFlags;
use pretty_assertions::assert_eq;
use rstest::rstest;

const NAN: u32 = 0x7FC0_0000;
const INF: u32 = 0x7F80_0000;
const NEG_INF: u32 = 0xFF80_0000;
const NEG_ZERO: u32 = 0x8000_0000;

fn b(f: f32) -> u32 {
    f.to_bits()
}

#[rstest]
#[case::three_plus_two(b(3.0), b(2.0), 0x40A0_0000)]
#[case::mixed_signs(b(-7.5), b(2.5), b(-5.0))]
#[case::fractional(b(0.75), b(0.25), b(1.0))]
#[case::both_negative(b(-1.0), b(-1.0), b(-2.0))]
#[case::min_subnormals(0x0000_0001, 0x0000_0001, 0x0000_0002)]
#[case::subnormals_carry_to_normal(0x0040_0000, 0x0040_0000, 0x0080_0000)]
fn test_exact_add(#[case] x: u32, #[case] y: u32, #[case] expected: u32) {
    assert_eq!(Fpu::add(x, y), (expected, FpFlags::NONE));
}

#[test]
fn test_sub_equal_is_positive_zero() {
    assert_eq!(Fpu::sub(b(5.0), b(5.0)), (0x0000_0000, FpFlags::NONE));
    assert_eq!(Fpu::sub(b(-5.0), b(-5.0)), (0x0000_0000, FpFlags::NONE));
}

#[test]
fn test_sub_basic() {
    assert_eq!(Fpu::sub(b(10.0), b(4.0)), (b(6.0), FpFlags::NONE));
    assert_eq!(Fpu::sub(b(1.0), b(3.0)), (b(-2.0), FpFlags::NONE));
}

#[test]
fn test_truncates_instead_of_rounding() {
    // 0.1 + 0.2 rounds to 0x3E99999A under round-to-nearest; the adder truncates.
    assert_eq!(Fpu::add(b(0.1), b(0.2)), (0x3E99_9999, FpFlags::NX));
}

#[test]
fn test_tiny_addend_is_shed() {
    assert_eq!(Fpu::add(b(1.0), b(1.0e-30)), (b(1.0), FpFlags::NX));
    assert_eq!(Fpu::add(b(1.0), 0x3380_0000), (b(1.0), FpFlags::NX));
}

#[test]
fn test_cancellation_normalizes() {
    // 1.5 - 1.25 = 0.25 needs a two-place left shift.
    assert_eq!(Fpu::sub(b(1.5), b(1.25)), (b(0.25), FpFlags::NONE));
}

#[test]
fn test_overflow() {
    assert_eq!(
        Fpu::add(0x7F7F_FFFF, 0x7F7F_FFFF),
        (INF, FpFlags::OF | FpFlags::NX)
    );
}

#[test]
fn test_zero_operands() {
    assert_eq!(Fpu::add(NEG_ZERO, NEG_ZERO), (NEG_ZERO, FpFlags::NONE));
    assert_eq!(Fpu::add(NEG_ZERO, 0), (0, FpFlags::NONE));
    assert_eq!(Fpu::add(0, b(-4.0)), (b(-4.0), FpFlags::NONE));
    assert_eq!(Fpu::sub(0, b(4.0)), (b(-4.0), FpFlags::NONE));
    assert_eq!(Fpu::sub(b(4.0), 0), (b(4.0), FpFlags::NONE));
}

#[test]
fn test_infinity_algebra() {
    assert_eq!(Fpu::add(INF, b(1.0)), (INF, FpFlags::NONE));
    assert_eq!(Fpu::add(b(-1.0), NEG_INF), (NEG_INF, FpFlags::NONE));
    assert_eq!(Fpu::add(INF, INF), (INF, FpFlags::NONE));
    assert_eq!(Fpu::add(INF, NEG_INF), (NAN, FpFlags::NV));
    assert_eq!(Fpu::sub(INF, INF), (NAN, FpFlags::NV));
    assert_eq!(Fpu::sub(b(1.0), INF), (NEG_INF, FpFlags::NONE));
}

#[rstest]
#[case::quiet(0x7FC0_0000)]
#[case::signaling(0x7F80_0001)]
#[case::negative(0xFFC0_1234)]
fn test_nan_absorption(#[case] nan: u32) {
    assert_eq!(Fpu::add(nan, b(1.0)), (NAN, FpFlags::NV));
    assert_eq!(Fpu::add(b(1.0), nan), (NAN, FpFlags::NV));
    assert_eq!(Fpu::sub(INF, nan), (NAN, FpFlags::NV));
}

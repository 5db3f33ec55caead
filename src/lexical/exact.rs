//! Exact conversion of a decimal literal over big integers.
//!
//! The digits are read into `M` and the literal is `M * 10^e`. For `e >= 0`
//! the product `M * 5^e` is formed outright; otherwise `M` is scaled by a
//! power of two until the quotient `M / 5^-e` has 63 or 64 bits, and the
//! remainder tells whether anything was lost.

use super::bignum::Bigint;
use super::digit::to_digit;
use super::math::*;
use super::num::Float;
use super::rounding::{round_nearest_tie_even, Rounded};
use super::scan::{Result, Scanner, EXP10_LIMIT};

// MANTISSA

/// Parse the significant digits into a big integer.
///
/// Returns the integer and the decimal exponent of its last digit. At most
/// `F::MAX_DIGITS` significant digits are kept; if a non-zero digit is
/// dropped, a trailing `1` digit stands in for all of them.
fn parse_mantissa<F: Float>(scanner: &mut Scanner) -> (Bigint, i64) {
    let small_powers = POW10_LIMB;
    let step = small_powers.len() - 1;
    let mut counter = 0;
    let mut value: Limb = 0;
    let mut digits = 0;
    let mut exponent = 0i64;
    let mut point = false;
    let mut dropped = false;
    let mut result = Bigint::default();

    loop {
        if scanner.separator() {
            continue;
        }
        let c = match scanner.peek() {
            Some(c) => c,
            None => break,
        };
        if c == b'.' && !point {
            point = true;
            scanner.bump();
            continue;
        }
        let digit = match to_digit(c) {
            Some(digit) => digit,
            None => break,
        };
        scanner.bump();

        if point {
            exponent -= 1;
        }
        if digits == F::MAX_DIGITS {
            exponent += 1;
            dropped |= digit != 0;
            continue;
        }
        // Leading zeros are not significant.
        if digits == 0 && digit == 0 {
            continue;
        }
        digits += 1;

        // Flush a full chunk of small digits into the bignum.
        if counter == step {
            result.imul_small(small_powers[counter]);
            result.iadd_small(value);
            counter = 0;
            value = 0;
        }
        value = value * 10 + digit as Limb;
        counter += 1;
    }

    if counter != 0 {
        result.imul_small(small_powers[counter]);
        result.iadd_small(value);
    }
    if dropped {
        result.imul_small(10);
        result.iadd_small(1);
        exponent -= 1;
    }

    (result, exponent)
}

// CONVERT

/// Convert the literal `digits`, without sign, exactly.
///
/// `digits` must hold a syntactically valid literal with a non-zero
/// mantissa, as accepted by the scanner.
pub(crate) fn slow_path<F: Float>(digits: &[u8], negative: bool) -> Result<Rounded> {
    assert!(!digits.is_empty(), "exact conversion of an empty literal");

    let mut scanner = Scanner::new(digits, 0);
    let (mut mantissa, mut exponent) = parse_mantissa::<F>(&mut scanner);
    debug_assert!(!mantissa.is_zero());

    // Beyond this bound the result overflows or vanishes for any mantissa
    // of this length.
    let limit = EXP10_LIMIT + mantissa.bit_length() as i64;
    if matches!(scanner.peek(), Some(b'e' | b'E')) {
        scanner.bump();
        exponent = scanner.exponent(exponent, limit, false)?;
    }
    let exponent = exponent.clamp(-limit, limit) as i32;

    let (mant, exp, truncated) = if exponent >= 0 {
        mantissa.imul_pow5(exponent as u32);
        let (mant, truncated) = mantissa.hi64();
        let exp = exponent + mantissa.bit_length() as i32 - 64;
        (mant, exp, truncated)
    } else {
        let mut denominator = Bigint::from_u64(1);
        denominator.imul_pow5(exponent.unsigned_abs());

        // Align so the quotient has 63 or 64 bits.
        let shift = denominator.bit_length() as i32 - mantissa.bit_length() as i32 + 63;
        if shift > 0 {
            mantissa.ishl(shift as usize);
        } else {
            denominator.ishl(shift.unsigned_abs() as usize);
        }
        let mant = mantissa.quorem(&denominator);
        (mant, exponent - shift, !mantissa.is_zero())
    };

    Ok(round_nearest_tie_even::<F>(negative, mant, exp, truncated))
}

// TESTS
// -----

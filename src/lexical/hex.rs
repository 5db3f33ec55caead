//! Hexadecimal literals, `0x1.8p3` style.
//!
//! The value is exactly `mantissa * 2^exponent`, so only the final
//! rounding can lose anything.

use super::digit::to_hex_digit;
use super::num::Float;
use super::rounding::{round_nearest_tie_even, Rounded};
use super::scan::{Result, Scanner};
use crate::error::ErrorCode;

/// Saturation bound for binary exponents: every format overflows or
/// vanishes past it, for any 64-bit mantissa.
const EXP2_LIMIT: i64 = 1024 + 64 + 64;

/// Parse the hexadecimal literal whose digits start at `start`.
///
/// Returns the rounded value and the number of bytes consumed.
pub(crate) fn parse<F: Float>(input: &[u8], negative: bool, start: usize) -> Result<(Rounded, usize)> {
    let mut scanner = Scanner::new(input, start);
    let mut mantissa = 0u64;
    let mut exponent = 0i64;
    let mut truncated = false;
    let mut point = false;
    let mut digit = false;

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
        let d = match to_hex_digit(c) {
            Some(d) => d,
            None => break,
        };
        scanner.bump();
        digit = true;

        if point {
            exponent -= 4;
        }
        if mantissa >> 60 != 0 {
            exponent += 4;
            truncated |= d != 0;
            continue;
        }
        mantissa = mantissa << 4 | d as u64;
    }
    if !digit {
        return Err(ErrorCode::InvalidNumber);
    }

    // The binary exponent is mandatory.
    match scanner.peek() {
        Some(b'p' | b'P') => scanner.bump(),
        _ => return Err(ErrorCode::InvalidNumber),
    }
    let exponent = scanner.exponent(exponent, EXP2_LIMIT, mantissa == 0)?;
    scanner.check_separators(true)?;
    let read = scanner.index();

    if mantissa == 0 {
        return Ok((Rounded::zero::<F>(negative), read));
    }
    let exponent = exponent.clamp(-EXP2_LIMIT, EXP2_LIMIT) as i32;
    let rounded = round_nearest_tie_even::<F>(negative, mantissa, exponent, truncated);
    Ok((rounded, read))
}

// TESTS
// -----

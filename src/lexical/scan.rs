//! Tokenize a literal into its sign, mantissa and exponent.

use super::digit::{add_digit, to_digit};
use super::num::{Float, Word};
use crate::error::ErrorCode;
use crate::lib::result;
use memchr::memchr_iter;

pub(crate) type Result<T> = result::Result<T, ErrorCode>;

/// Saturation bound for decimal exponents.
///
/// Past it any mantissa of the scanner width is certain to overflow or to
/// vanish, so exponent digits stop accumulating.
pub(crate) const EXP10_LIMIT: i64 = 308 + 20 + 20;

// SCANNER

/// Byte cursor shared by the decimal, hexadecimal and exact scanners.
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    index: usize,
    /// A `_` was consumed and needs validation.
    underscore: bool,
}

impl<'a> Scanner<'a> {
    #[inline]
    pub(crate) fn new(input: &'a [u8], index: usize) -> Self {
        Scanner {
            input,
            index,
            underscore: false,
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.index += 1;
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Consume an optional sign, returning true for `-`.
    #[inline]
    pub(crate) fn sign(&mut self) -> bool {
        match self.peek() {
            Some(b'+') => {
                self.bump();
                false
            }
            Some(b'-') => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    /// Consume a `_` digit separator.
    #[inline]
    pub(crate) fn separator(&mut self) -> bool {
        if self.peek() == Some(b'_') {
            self.underscore = true;
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume a decimal `[+-]digits` exponent body, right after its marker,
    /// and return it added to `base`.
    ///
    /// Digits that would push the result past `limit` in the direction of
    /// the sign are consumed but ignored. With `ignore`, all of them are.
    pub(crate) fn exponent(&mut self, base: i64, limit: i64, ignore: bool) -> Result<i64> {
        if self.peek().is_none() {
            return Err(ErrorCode::InvalidNumber);
        }
        let negative = self.sign();

        let mut shift = 0i64;
        let mut digit = false;
        loop {
            if self.separator() {
                continue;
            }
            let d = match self.peek().and_then(to_digit) {
                Some(d) => d,
                None => break,
            };
            self.bump();
            digit = true;
            if ignore {
                continue;
            }
            let saturated = if negative {
                base - shift < -limit
            } else {
                base + shift > limit
            };
            if !saturated {
                shift = shift * 10 + d as i64;
            }
        }
        if !digit {
            return Err(ErrorCode::InvalidNumber);
        }

        Ok(if negative { base - shift } else { base + shift })
    }

    /// Check that every `_` consumed so far sits between two digits.
    ///
    /// For hexadecimal literals the byte before may also be the `x` of the
    /// prefix.
    pub(crate) fn check_separators(&self, hex: bool) -> Result<()> {
        if !self.underscore {
            return Ok(());
        }
        let consumed = &self.input[..self.index];
        for index in memchr_iter(b'_', consumed) {
            let lo = match index.checked_sub(1) {
                Some(lo) => consumed[lo],
                None => return Err(ErrorCode::InvalidNumber),
            };
            let hi = match consumed.get(index + 1) {
                Some(&hi) => hi,
                None => return Err(ErrorCode::InvalidNumber),
            };
            let valid = if hex {
                (lo | 0x20 == b'x' || lo.is_ascii_hexdigit()) && hi.is_ascii_hexdigit()
            } else {
                lo.is_ascii_digit() && hi.is_ascii_digit()
            };
            if !valid {
                return Err(ErrorCode::InvalidNumber);
            }
        }
        Ok(())
    }
}

// LITERAL

/// Result of scanning the leading literal of the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Literal<W> {
    /// Infinity or NaN, already encoded.
    Special { bits: u64, read: usize },
    /// Hexadecimal literal whose digits start at `start`, past the `0x`.
    Hex { negative: bool, start: usize },
    Decimal(Decimal<W>),
}

/// Decimal literal reduced to `mantissa * 10^exponent`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Decimal<W> {
    pub negative: bool,
    /// Leading significant digits that fit the format's word.
    pub mantissa: W,
    /// Clamped to `EXP10_LIMIT` in magnitude.
    pub exponent: i32,
    /// A non-zero digit did not fit in `mantissa`.
    pub truncated: bool,
    /// Offset of the first digit, past the sign.
    pub start: usize,
    /// Bytes consumed, sign included.
    pub read: usize,
}

/// Scan the literal at the start of `input` for the format `F`.
pub(crate) fn scan<F: Float>(input: &[u8]) -> Result<Literal<F::Word>> {
    let mut scanner = Scanner::new(input, 0);
    let negative = scanner.sign();
    let start = scanner.index();
    let first = match scanner.peek() {
        Some(c) => c,
        None => return Err(ErrorCode::InvalidNumber),
    };

    match first | 0x20 {
        b'i' => infinity::<F>(input, start, negative),
        b'n' => nan::<F>(input, start),
        _ if first == b'0' && matches!(input.get(start + 1), Some(c) if c | 0x20 == b'x') => {
            Ok(Literal::Hex {
                negative,
                start: start + 2,
            })
        }
        _ => decimal::<F>(scanner, negative).map(Literal::Decimal),
    }
}

/// Length of the case-insensitive common prefix with a lowercase pattern.
#[inline]
fn common(input: &[u8], pattern: &[u8]) -> usize {
    input
        .iter()
        .zip(pattern)
        .take_while(|(c, p)| c.to_ascii_lowercase() == **p)
        .count()
}

fn infinity<F: Float>(input: &[u8], start: usize, negative: bool) -> Result<Literal<F::Word>> {
    let read = match common(&input[start + 1..], b"nfinity") {
        7 => start + 8,
        2 => start + 3,
        _ => return Err(ErrorCode::InvalidNumber),
    };
    let bits = F::INFINITY_BITS | (negative as u64) << (F::BITS - 1);
    Ok(Literal::Special { bits, read })
}

// NaN takes no sign.
fn nan<F: Float>(input: &[u8], start: usize) -> Result<Literal<F::Word>> {
    if start != 0 || common(&input[1..], b"an") != 2 {
        return Err(ErrorCode::InvalidNumber);
    }
    Ok(Literal::Special {
        bits: F::NAN_BITS,
        read: 3,
    })
}

fn decimal<F: Float>(mut scanner: Scanner, negative: bool) -> Result<Decimal<F::Word>> {
    let start = scanner.index();
    let mut mantissa = <F::Word as Word>::ZERO;
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
        let d = match to_digit(c) {
            Some(d) => d,
            None => break,
        };
        scanner.bump();
        digit = true;

        if point {
            exponent -= 1;
        }
        if mantissa >= F::DIGIT_LIMIT {
            exponent += 1;
            truncated |= d != 0;
            continue;
        }
        mantissa = add_digit(mantissa, d);
    }
    if !digit {
        return Err(ErrorCode::InvalidNumber);
    }

    if matches!(scanner.peek(), Some(b'e' | b'E')) {
        scanner.bump();
        let ignore = mantissa == <F::Word as Word>::ZERO;
        exponent = scanner.exponent(exponent, EXP10_LIMIT, ignore)?;
    }
    scanner.check_separators(false)?;

    Ok(Decimal {
        negative,
        mantissa,
        exponent: exponent.clamp(-EXP10_LIMIT, EXP10_LIMIT) as i32,
        truncated,
        start,
        read: scanner.index(),
    })
}

// TESTS
// -----

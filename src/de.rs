//! Parse float literals from strings and byte slices.

use crate::error::{Error, ErrorCode, Result};
use crate::lexical::{self, Float};

/// Outcome of parsing the literal at the start of some input.
///
/// See [`parse_partial`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parsed<F> {
    /// The parsed value. Zero on a syntax error, and the correctly signed
    /// infinity when the literal is out of range.
    pub value: F,
    /// Number of bytes the literal occupies. Zero on a syntax error.
    pub read: usize,
    /// Why the literal was rejected or saturated, if it was.
    pub error: Option<ErrorCode>,
}

/// Parse the longest float literal at the start of `input`, leaving any
/// trailing bytes alone.
///
/// Accepted literals are decimal (`-12.5e3`), hexadecimal with a binary
/// exponent (`0x1.8p3`), `inf`, `infinity` and `nan`, all case-insensitive.
/// Digits may be grouped with single `_` separators, as in `1_000.000_1`.
///
/// ```
/// use refloat::{parse_partial, ErrorCode, Parsed};
///
/// let parsed = parse_partial::<f64>(b"2.5e-3, 7");
/// assert_eq!(parsed, Parsed { value: 0.0025, read: 6, error: None });
///
/// let parsed = parse_partial::<f32>(b"-1e39");
/// assert_eq!(parsed.value, f32::NEG_INFINITY);
/// assert_eq!(parsed.error, Some(ErrorCode::NumberOutOfRange));
/// ```
pub fn parse_partial<F: Float>(input: &[u8]) -> Parsed<F> {
    match lexical::parse_float::<F>(input) {
        Ok((rounded, read)) => Parsed {
            value: F::from_bits(rounded.bits),
            read,
            error: if rounded.overflow {
                Some(ErrorCode::NumberOutOfRange)
            } else {
                None
            },
        },
        Err(code) => Parsed {
            value: F::ZERO,
            read: 0,
            error: Some(code),
        },
    }
}

fn from_trait<F: Float>(func: &'static str, input: &[u8]) -> Result<F> {
    let parsed = parse_partial::<F>(input);

    // Make sure the whole input was consumed. A trailing byte turns even an
    // out-of-range literal into a syntax error.
    match parsed.error {
        Some(ErrorCode::InvalidNumber) => Err(Error::syntax(func, input)),
        _ if parsed.read != input.len() => Err(Error::syntax(func, input)),
        Some(ErrorCode::NumberOutOfRange) => Err(Error::range(func, input)),
        None => Ok(parsed.value),
    }
}

/// Parse a float from a string that must contain exactly one literal.
///
/// # Errors
///
/// A syntax error if the string is not a literal, or has anything before or
/// after it, whitespace included. A range error if the literal rounds to
/// infinity; the infinity itself is available through [`parse_partial`].
///
/// # Example
///
/// ```
/// let x: f64 = refloat::from_str("1_024.5e-1").unwrap();
/// assert_eq!(x, 102.45);
///
/// let err = refloat::from_str::<f64>("1e400").unwrap_err();
/// assert!(err.is_range());
/// assert_eq!(err.to_string(), "from_str: parsing \"1e400\": number out of range");
/// ```
pub fn from_str<F: Float>(s: &str) -> Result<F> {
    from_trait("from_str", s.as_bytes())
}

/// Parse a float from bytes that must contain exactly one literal.
///
/// # Errors
///
/// Same as [`from_str`]. Non-ASCII bytes are never part of a literal.
///
/// # Example
///
/// ```
/// let x: f32 = refloat::from_slice(b"0x1.8p1").unwrap();
/// assert_eq!(x, 3.0);
/// assert!(refloat::from_slice::<f32>(b"3.0\n").unwrap_err().is_syntax());
/// ```
pub fn from_slice<F: Float>(v: &[u8]) -> Result<F> {
    from_trait("from_slice", v)
}

/// Parse a float of `size` bits, 32 or 64, returned widened to `f64`.
///
/// With `size == 32` the result is rounded once, directly to the nearest
/// `f32`, and never double-rounded through `f64`. Any other size is read
/// as 64.
///
/// # Errors
///
/// Same as [`from_str`], judged against the requested format.
///
/// # Example
///
/// ```
/// let x = refloat::parse_float("0.1", 32).unwrap();
/// assert_eq!(x, 0.1f32 as f64);
/// assert!(refloat::parse_float("1e39", 32).unwrap_err().is_range());
/// assert_eq!(refloat::parse_float("1e39", 64).unwrap(), 1e39);
/// ```
pub fn parse_float(s: &str, size: u32) -> Result<f64> {
    if size == 32 {
        from_trait::<f32>("parse_float", s.as_bytes()).map(f64::from)
    } else {
        from_trait::<f64>("parse_float", s.as_bytes())
    }
}

/// Like [`parse_partial`], with the format picked at runtime by `size` as in
/// [`parse_float`].
///
/// The value is widened to `f64`. A single-precision literal that overflows
/// comes back as the signed `f32` infinity, widened.
///
/// ```
/// use refloat::{parse_float_partial, ErrorCode};
///
/// let parsed = parse_float_partial(b"-1e39 m", 32);
/// assert_eq!(parsed.value, f64::NEG_INFINITY);
/// assert_eq!(parsed.read, 5);
/// assert_eq!(parsed.error, Some(ErrorCode::NumberOutOfRange));
///
/// let parsed = parse_float_partial(b"-1e39 m", 64);
/// assert_eq!(parsed.value, -1e39);
/// assert_eq!(parsed.error, None);
/// ```
pub fn parse_float_partial(input: &[u8], size: u32) -> Parsed<f64> {
    if size == 32 {
        let parsed = parse_partial::<f32>(input);
        Parsed {
            value: f64::from(parsed.value),
            read: parsed.read,
            error: parsed.error,
        }
    } else {
        parse_partial::<f64>(input)
    }
}

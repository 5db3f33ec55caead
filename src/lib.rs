//! # refloat
//!
//! Correctly rounded parsing of IEEE-754 float literals into `f32` and
//! `f64`.
//!
//! ```edition2021
//! use refloat::{Error, ErrorCode};
//!
//! fn main() -> Result<(), Error> {
//!     let x: f64 = refloat::from_str("6.02214076e23")?;
//!     assert_eq!(x, 6.02214076e23);
//!
//!     let y: f32 = refloat::from_str("-0x1.8p-1")?;
//!     assert_eq!(y, -0.75);
//!
//!     let err = refloat::from_str::<f32>("3.5e38").unwrap_err();
//!     assert_eq!(err.code(), ErrorCode::NumberOutOfRange);
//!     Ok(())
//! }
//! ```
//!
//! # Grammar
//!
//! ```text
//! literal  = [sign] ( decimal | hex | "inf" | "infinity" ) | "nan"
//! decimal  = digits [ "." [digits] ] [ ("e"|"E") [sign] digits ]
//!          | "." digits [ ("e"|"E") [sign] digits ]
//! hex      = ("0x"|"0X") hexdigits [ "." [hexdigits] ] ("p"|"P") [sign] digits
//!          | ("0x"|"0X") "." hexdigits ("p"|"P") [sign] digits
//! ```
//!
//! Keywords are case-insensitive. A single `_` may separate two digits, or
//! follow the `0x` prefix. Whitespace is never skipped.
//!
//! # Rounding
//!
//! Every literal rounds to the nearest representable value, ties to even,
//! no matter how many digits it has. Literals below half the smallest
//! subnormal give a signed zero; literals that round past the largest
//! finite value give a signed infinity together with a range error.
//!
//! Most decimal literals are settled by one exact floating-point operation
//! or by interval arithmetic on a polynomial approximation of the power of
//! ten. Literals too close to a rounding boundary for that fall back to
//! exact big-integer arithmetic.

#![doc(html_root_url = "https://docs.rs/refloat/0.1.0")]
#![deny(clippy::all, clippy::pedantic)]
// Ignored clippy lints
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::excessive_precision,
    clippy::float_cmp,
    clippy::unreadable_literal
)]
// Ignored clippy_pedantic lints
#![allow(
    // integer and float ser/de requires these sorts of casts
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]
#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

// Not public API. Used by the float parser.
mod lib {
    pub(crate) use alloc::vec::Vec;
    pub(crate) use core::{cmp, fmt, ops, result};
}

#[cfg(not(any(feature = "std", feature = "alloc")))]
mod features_check;

pub mod de;
pub mod error;
mod lexical;

#[doc(inline)]
pub use crate::de::{from_slice, from_str, parse_float, parse_float_partial, parse_partial, Parsed};
#[doc(inline)]
pub use crate::error::{Error, ErrorCode, Result};
pub use crate::lexical::Float;

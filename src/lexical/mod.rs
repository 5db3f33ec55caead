// The big-integer building blocks in this module are derived from the
// `lexical` crate by @Alexhuszagh, condensed to what an exact decimal
// fallback needs. Dual licensed as MIT and Apache 2.0, copyright Alexander
// Huszagh.

//! Correctly rounded float parsing.
//!
//! Decimal literals go through three tiers: a single exact IEEE operation
//! when both the mantissa and the power of ten are exact, an interval
//! computation from a polynomial approximation of `10^e`, and, only when
//! the interval cannot decide the rounding, exact big-integer arithmetic.
//! Hexadecimal literals are exact by construction and only need rounding.

// MODULES
mod algorithm;
mod bignum;
mod digit;
mod exact;
mod exponent;
mod hex;
mod math;
mod num;
mod parse;
mod rounding;
mod scan;
mod small_powers;

// API
pub use self::num::Float;
pub(crate) use self::parse::parse_float;

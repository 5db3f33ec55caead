//! Dispatch a literal to the conversion that handles its form.

use super::algorithm::to_native;
use super::hex;
use super::num::Float;
use super::rounding::Rounded;
use super::scan::{scan, Literal, Result};

/// Parse the literal at the start of `input` as `F`.
///
/// Returns the packed bits and the number of bytes consumed. Overflow is
/// reported through `Rounded::overflow` so the infinity still comes back.
pub(crate) fn parse_float<F: Float>(input: &[u8]) -> Result<(Rounded, usize)> {
    match scan::<F>(input)? {
        Literal::Special { bits, read } => Ok((
            Rounded {
                bits,
                overflow: false,
            },
            read,
        )),
        Literal::Hex { negative, start } => hex::parse::<F>(input, negative, start),
        Literal::Decimal(decimal) => Ok((to_native::<F>(input, &decimal)?, decimal.read)),
    }
}

// TESTS
// -----

//! When parsing a float literal goes wrong.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;
#[cfg(feature = "std")]
use std::io;

/// This type represents all possible errors that can occur when parsing a
/// float literal.
pub struct Error {
    /// This `Box` keeps `Error` a single pointer wide, so `Result<f64>` stays
    /// small on the success path.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `refloat::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> ErrorCode {
        self.err.code
    }

    /// Name of the entry point that failed, such as `"from_str"`.
    pub fn func(&self) -> &'static str {
        self.err.func
    }

    /// The complete input that was rejected.
    pub fn input(&self) -> &[u8] {
        &self.err.input
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not a well-formed literal, or
    ///   has trailing bytes after one
    /// - `Category::Range` - a well-formed literal whose magnitude does not
    ///   fit the target format
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidNumber => Category::Syntax,
            ErrorCode::NumberOutOfRange => Category::Range,
        }
    }

    /// Returns true if this error was caused by input that was not a
    /// well-formed float literal.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a literal too large for the
    /// target format.
    ///
    /// Literals too small for the format are not errors; they round to zero.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }
}

/// Categorizes the cause of a `refloat::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The input was not syntactically valid.
    Syntax,

    /// The literal was valid but rounds to infinity.
    Range,
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `refloat::Error` into an `io::Error`.
    ///
    /// Both categories of error are turned into `InvalidData` IO errors.
    ///
    /// ```
    /// use std::io;
    ///
    /// fn read_ratio(text: &str) -> io::Result<f64> {
    ///     Ok(refloat::from_str::<f64>(text)?)
    /// }
    ///
    /// assert_eq!(read_ratio("0.25").unwrap(), 0.25);
    /// let err = read_ratio("1/4").unwrap_err();
    /// assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    /// ```
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    func: &'static str,
    input: Box<[u8]>,
}

/// This type describes all possible errors that can occur when parsing a
/// float literal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Malformed literal, or bytes left after a well-formed one.
    InvalidNumber,

    /// Literal too large in magnitude for the target format.
    NumberOutOfRange,
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode, func: &'static str, input: &[u8]) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                func,
                input: input.into(),
            }),
        }
    }

    #[cold]
    pub(crate) fn syntax(func: &'static str, input: &[u8]) -> Self {
        Error::new(ErrorCode::InvalidNumber, func, input)
    }

    #[cold]
    pub(crate) fn range(func: &'static str, input: &[u8]) -> Self {
        Error::new(ErrorCode::NumberOutOfRange, func, input)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidNumber => f.write_str("invalid number"),
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: parsing {}: {}",
            self.func,
            Quoted(&self.input),
            self.code
        )
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error(\"{}\", func: {:?}, input: {})",
            self.err.code,
            self.err.func,
            Quoted(&self.err.input)
        )
    }
}

/// Double-quoted rendering of the input. Printable ASCII is kept as is;
/// everything else is escaped, so arbitrary bytes show unambiguously.
struct Quoted<'a>(&'a [u8]);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for &byte in self.0 {
            match byte {
                b'"' => f.write_str("\\\"")?,
                b'\\' => f.write_str("\\\\")?,
                b'\n' => f.write_str("\\n")?,
                b'\r' => f.write_str("\\r")?,
                b'\t' => f.write_str("\\t")?,
                b' '..=b'~' => write!(f, "{}", byte as char)?,
                _ => write!(f, "\\x{:02x}", byte)?,
            }
        }
        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn display_test() {
        let err = Error::syntax("from_str", b"1x");
        assert_eq!(format!("{}", err), "from_str: parsing \"1x\": invalid number");

        let err = Error::range("parse_float", b"1e999");
        assert_eq!(
            format!("{}", err),
            "parse_float: parsing \"1e999\": number out of range"
        );
    }

    #[test]
    fn quoted_test() {
        let err = Error::syntax("from_slice", b"a\"b\\c\n\t\x00\xff");
        assert_eq!(
            format!("{}", err),
            "from_slice: parsing \"a\\\"b\\\\c\\n\\t\\x00\\xff\": invalid number"
        );
    }

    #[test]
    fn debug_test() {
        let err = Error::syntax("from_str", b"?");
        assert_eq!(
            format!("{:?}", err),
            "Error(\"invalid number\", func: \"from_str\", input: \"?\")"
        );
    }

    #[test]
    fn classify_test() {
        let err = Error::range("from_str", b"1e999");
        assert_eq!(err.classify(), Category::Range);
        assert!(err.is_range());
        assert!(!err.is_syntax());
        assert_eq!(err.code(), ErrorCode::NumberOutOfRange);
        assert_eq!(err.func(), "from_str");
        assert_eq!(err.input(), b"1e999");
    }
}

use std::{error::Error as StdError, fmt, num::ParseIntError};

/// `Result<_, ParseError>`
pub type ParseResult<T> = Result<T, ParseError>;

/// Anything that could go wrong while reading a numeric sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no numbers at all.
    Empty,
    /// A comma-separated token was not an integer.
    InvalidNumber {
        /// Zero-based index of the token.
        position: usize,
        /// The token after trimming.
        token: String,
        source: ParseIntError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no numbers given"),
            Self::InvalidNumber {
                position, token, ..
            } => write!(f, "`{token}` at position {position} is not an integer"),
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Empty => None,
            Self::InvalidNumber { source, .. } => Some(source),
        }
    }
}

/// An algorithm name that matches none of the known algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm `{}`", self.0)
    }
}

impl StdError for UnknownAlgorithm {}

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Error produced when a ULID or one of its components cannot be constructed or decoded.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The instant precedes the Unix epoch or does not fit in 48 bits of milliseconds.
    TimestampOverflow,

    /// The text contains a symbol outside the Crockford base32 alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position within the decoded text.
        index: usize,
    },

    /// The text is not exactly the expected number of characters long.
    WrongLength {
        /// Number of characters required.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The byte sequence is shorter than the binary form requires.
    InsufficientBytes {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// The integer form is below zero.
    NegativeValue,

    /// The integer form exceeds the largest value the target can hold.
    ValueTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimestampOverflow => write!(f, "timestamp out of 48-bit millisecond range"),
            Self::InvalidCharacter { character, index } => {
                write!(f, "invalid character {character:?} at position {index}")
            }
            Self::WrongLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} characters, got {actual}")
            }
            Self::InsufficientBytes { expected, actual } => {
                write!(f, "insufficient bytes: expected {expected}, got {actual}")
            }
            Self::NegativeValue => write!(f, "negative integer value"),
            Self::ValueTooLarge => write!(f, "integer value too large"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

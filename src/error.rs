use thiserror::Error;

/// Error raised by fallible conversions and generators.
#[derive(Error, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// A byte slice could not be turned into a UUID because it is not 16 bytes long.
    #[error("invalid length: expected 16 bytes, found {len}")]
    InvalidLength {
        /// Length of the rejected slice.
        len: usize,
    },

    /// A string is not the 8-4-4-4-12 hexadecimal representation.
    #[error("invalid string representation")]
    Parse,

    /// A timestamp cannot be encoded in the 60-bit time field of a version 1 UUID.
    #[error("timestamp out of the range representable by a version 1 UUID")]
    OutOfRange,

    /// A numeric identifier appended to a URL is not a decimal integer.
    #[error("identifier is not a non-negative decimal integer")]
    InvalidId,
}

/// Error parsing an invalid string representation of UUID.
///
/// Parsing only ever yields [`Error::Parse`].
pub type ParseError = Error;

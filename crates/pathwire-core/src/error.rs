use thiserror::Error;

/// Errors returned by base-58 text decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// Character outside the base-58 alphabet.
    #[error("invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// Decoded value does not fit in 64 bits.
    #[error("base58 value overflows u64")]
    Overflow,
}

/// Errors returned by checked big-endian packing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Value needs more bytes than the requested width.
    #[error("value {value} does not fit in {width} bytes")]
    Overflow { value: u64, width: usize },
}

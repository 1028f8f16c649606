use pathwire_core::error::Base58Error;
use thiserror::Error;

use crate::compression::DecompressError;

/// Errors returned by frame encode/decode operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Outer size header disagrees with the buffer length.
    #[error("size header declares {declared} bytes but {actual} follow")]
    SizeMismatch { declared: u64, actual: usize },
    /// A length prefix points past the end of the buffer.
    #[error("truncated frame: need {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },
    /// Trailing bytes too short to hold a length prefix.
    #[error("malformed frame: {leftover} trailing bytes")]
    Malformed { leftover: usize },
    /// A field or the whole message is too long for a 4-byte length prefix.
    #[error("length {len} does not fit in a 4-byte prefix")]
    Overflow { len: usize },
}

/// Errors returned when parsing a serialized message envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("framing error: {0}")]
    Framing(#[from] FrameError),
    /// Fewer than the four header packets (type, sender, id, timestamp).
    #[error("expected at least 4 packets, found {found}")]
    TooFewFields { found: usize },
    /// Timestamp packet is not valid base-58.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] Base58Error),
    /// Self-reported id does not match the recomputed one.
    #[error("message id mismatch: claimed {claimed}, computed {computed}")]
    IdentityMismatch { claimed: String, computed: String },
    #[error("decompression failed: {0}")]
    Decompression(#[from] DecompressError),
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, FrameError};
    use pathwire_core::error::Base58Error;

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            FrameError::SizeMismatch {
                declared: 10,
                actual: 20
            }
            .to_string(),
            "size header declares 10 bytes but 20 follow"
        );
        assert_eq!(
            DecodeError::from(FrameError::Malformed { leftover: 2 }).to_string(),
            "framing error: malformed frame: 2 trailing bytes"
        );
        assert_eq!(
            DecodeError::TooFewFields { found: 3 }.to_string(),
            "expected at least 4 packets, found 3"
        );
        assert_eq!(
            DecodeError::from(Base58Error::Overflow).to_string(),
            "invalid timestamp: base58 value overflows u64"
        );
    }
}

//! Decompression hook run on a received body before its frames are parsed.
//!
//! No compression algorithm ships with the codec. The method ids declared in
//! [`pathwire_core::flags`] exist so peers can negotiate; an implementation
//! plugs in through [`Decompress`].

use bytes::Bytes;
use thiserror::Error;

/// Errors returned by a [`Decompress`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompressError {
    /// None of the offered methods could be applied.
    #[error("unsupported compression method: {0}")]
    Unsupported(String),
    /// Method was recognized but the body did not decompress.
    #[error("corrupt compressed body: {0}")]
    Corrupt(String),
}

/// Strategy for undoing wire compression.
pub trait Decompress: Send + Sync {
    /// Decompresses `body` given the methods the sender may have used, in
    /// order of preference.
    fn decompress(&self, body: Bytes, methods: &[Bytes]) -> Result<Bytes, DecompressError>;

    /// Method ids this implementation can undo.
    fn supported(&self) -> &[Bytes];
}

/// Pass-through hook: returns the body unchanged and supports no method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Decompress for Identity {
    fn decompress(&self, body: Bytes, _methods: &[Bytes]) -> Result<Bytes, DecompressError> {
        Ok(body)
    }

    fn supported(&self) -> &[Bytes] {
        &[]
    }
}

/// Returns the first entry of `preferred` that also appears in `supported`.
pub fn negotiate<'a>(preferred: &'a [Bytes], supported: &[Bytes]) -> Option<&'a Bytes> {
    preferred.iter().find(|method| supported.contains(method))
}

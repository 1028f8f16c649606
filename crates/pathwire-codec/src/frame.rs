//! Length-prefixed field framing.
//!
//! ```text
//! message := u32_be(total_len) field*
//! field   := u32_be(field_len) bytes[field_len]
//! ```
//!
//! The field count is not encoded; decoders consume fields until the body is
//! exhausted.

use bytes::{BufMut, Bytes, BytesMut};
use pathwire_core::pack::unpack_be;

use crate::error::FrameError;

/// Width of every length prefix, including the outer size header.
pub const LEN_PREFIX: usize = 4;

fn prefix(len: usize) -> Result<u32, FrameError> {
    u32::try_from(len).map_err(|_| FrameError::Overflow { len })
}

/// Encodes fields as `u32_be(len) || bytes` pairs without the outer size header.
pub fn encode_fields_sizeless<F: AsRef<[u8]>>(fields: &[F]) -> Result<Bytes, FrameError> {
    let total: usize = fields
        .iter()
        .map(|f| LEN_PREFIX + f.as_ref().len())
        .sum();
    let mut out = BytesMut::with_capacity(total);
    for field in fields {
        let field = field.as_ref();
        out.put_u32(prefix(field.len())?);
        out.put_slice(field);
    }
    Ok(out.freeze())
}

/// Encodes fields and prepends the 4-byte network size header.
pub fn encode_fields<F: AsRef<[u8]>>(fields: &[F]) -> Result<Bytes, FrameError> {
    let body = encode_fields_sizeless(fields)?;
    let mut out = BytesMut::with_capacity(LEN_PREFIX + body.len());
    out.put_u32(prefix(body.len())?);
    out.put_slice(&body);
    Ok(out.freeze())
}

/// Reads the declared body length from the first four bytes of a stream.
///
/// Returns `None` until enough bytes have arrived.
pub fn size_header(buffer: &[u8]) -> Option<u32> {
    let header = buffer.get(..LEN_PREFIX)?;
    Some(unpack_be(header) as u32)
}

/// Verifies the outer size header against the buffer and returns the body.
pub fn strip_size_header(buffer: &[u8]) -> Result<&[u8], FrameError> {
    let Some(declared) = size_header(buffer) else {
        return Err(FrameError::Truncated {
            needed: LEN_PREFIX,
            available: buffer.len(),
        });
    };
    let body = &buffer[LEN_PREFIX..];
    if declared as usize != body.len() {
        return Err(FrameError::SizeMismatch {
            declared: u64::from(declared),
            actual: body.len(),
        });
    }
    Ok(body)
}

/// Splits a header-less body into its fields. Fields share `body`'s allocation.
pub fn split_fields(body: Bytes) -> Result<Vec<Bytes>, FrameError> {
    let mut fields = Vec::new();
    let mut offset = 0;
    while offset < body.len() {
        let remaining = body.len() - offset;
        if remaining < LEN_PREFIX {
            return Err(FrameError::Malformed {
                leftover: remaining,
            });
        }
        let len = unpack_be(&body[offset..offset + LEN_PREFIX]) as usize;
        offset += LEN_PREFIX;

        let available = body.len() - offset;
        if len > available {
            return Err(FrameError::Truncated {
                needed: len,
                available,
            });
        }
        fields.push(body.slice(offset..offset + len));
        offset += len;
    }
    Ok(fields)
}

/// Decodes a framed buffer. With `sizeless` set the outer size header is
/// assumed absent.
pub fn decode_fields(buffer: &[u8], sizeless: bool) -> Result<Vec<Bytes>, FrameError> {
    let body = if sizeless {
        buffer
    } else {
        strip_size_header(buffer)?
    };
    split_fields(Bytes::copy_from_slice(body))
}

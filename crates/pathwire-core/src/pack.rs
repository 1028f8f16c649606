//! Big-endian integer packing.
//!
//! `pack_be`/`unpack_be` keep the historical wrap-around behavior for
//! compatibility with older peers; new code uses the `try_` variants.

use crate::error::PackError;

/// Packs `value` into exactly `len` big-endian bytes.
///
/// High-order bytes that do not fit are silently dropped.
pub fn pack_be(len: usize, value: u64) -> Vec<u8> {
    let mut out = vec![0_u8; len];
    let mut rest = value;
    for byte in out.iter_mut().rev() {
        if rest == 0 {
            break;
        }
        *byte = (rest & 0xFF) as u8;
        rest >>= 8;
    }
    out
}

/// Packs `value` into exactly `len` big-endian bytes, failing if it does not fit.
pub fn try_pack_be(len: usize, value: u64) -> Result<Vec<u8>, PackError> {
    let needed = 8 - (value.leading_zeros() as usize / 8);
    if needed > len {
        return Err(PackError::Overflow { value, width: len });
    }
    Ok(pack_be(len, value))
}

/// Reads a big-endian unsigned integer, wrapping past 64 bits.
pub fn unpack_be(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0_u64, |acc, &b| acc.wrapping_shl(8) | u64::from(b))
}

/// Reads a big-endian unsigned integer, failing if it exceeds 64 bits.
pub fn try_unpack_be(bytes: &[u8]) -> Result<u64, PackError> {
    let leading = bytes.iter().take_while(|&&b| b == 0).count();
    let significant = &bytes[leading..];
    if significant.len() > 8 {
        return Err(PackError::Overflow {
            value: unpack_be(significant),
            width: 8,
        });
    }
    Ok(unpack_be(significant))
}

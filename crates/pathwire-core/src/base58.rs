//! Arbitrary-precision base-58 conversion.
//!
//! Values are plain big-endian numerals: there is no leading-zero-byte
//! preservation as in Bitcoin-style base58, so `[0x00, 0x01]` and `[0x01]`
//! encode identically. Only encoding of byte strings is provided since no
//! caller ever needs the digest bytes back.

use crate::error::Base58Error;

/// The 58-symbol alphabet, ordered by digit value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Digit value `0`, used for padding.
pub const ZERO_DIGIT: char = '1';

const INVALID: u8 = 0xFF;

const DIGIT_VALUES: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

fn digit_value(character: char) -> Option<u8> {
    let code = character as u32;
    if code >= 128 {
        return None;
    }
    match DIGIT_VALUES[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns true when every character of `text` belongs to the alphabet.
pub fn is_base58(text: &str) -> bool {
    text.chars().all(|c| digit_value(c).is_some())
}

/// Encodes an unsigned integer. Zero encodes to `"1"`.
pub fn encode_uint(mut value: u64) -> String {
    if value == 0 {
        return ZERO_DIGIT.to_string();
    }
    let mut digits = Vec::with_capacity(11);
    while value > 0 {
        digits.push(ALPHABET[(value % 58) as usize]);
        value /= 58;
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

fn decode_digits(characters: impl Iterator<Item = char>) -> Result<u64, Base58Error> {
    let mut acc: u64 = 0;
    for (position, character) in characters.enumerate() {
        let digit = digit_value(character).ok_or(Base58Error::InvalidCharacter {
            character,
            position,
        })?;
        acc = acc
            .checked_mul(58)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(Base58Error::Overflow)?;
    }
    Ok(acc)
}

/// Decodes base-58 text into an unsigned integer.
///
/// The empty string decodes to `0`. Values that do not fit in `u64` are
/// rejected instead of wrapping.
pub fn decode_uint(text: &str) -> Result<u64, Base58Error> {
    decode_digits(text.chars())
}

/// Same as [`decode_uint`] for raw wire bytes; positions are byte offsets.
pub fn decode_uint_bytes(bytes: &[u8]) -> Result<u64, Base58Error> {
    decode_digits(bytes.iter().map(|&b| char::from(b)))
}

/// Divides a big-endian numeral by 58 in place, returning the remainder.
///
/// Leading zero bytes of the quotient are stripped, so an exhausted buffer
/// means the quotient reached zero.
fn divmod_58(number: &mut Vec<u8>) -> u8 {
    let mut remainder: u32 = 0;
    for byte in number.iter_mut() {
        let current = (remainder << 8) | u32::from(*byte);
        *byte = (current / 58) as u8;
        remainder = current % 58;
    }
    let leading = number.iter().take_while(|&&b| b == 0).count();
    number.drain(..leading);
    remainder as u8
}

/// Encodes a byte string read as a big-endian integer of arbitrary width,
/// left-padding with `'1'` up to `min_digits` characters.
///
/// Empty and all-zero inputs encode to a single `'1'` before padding.
pub fn encode_bytes(data: &[u8], min_digits: usize) -> String {
    let leading = data.iter().take_while(|&&b| b == 0).count();
    let mut number = data[leading..].to_vec();

    // log(256) / log(58) ~= 1.37 digits per input byte.
    let mut digits = Vec::with_capacity(number.len() * 138 / 100 + 1);
    while !number.is_empty() {
        digits.push(ALPHABET[divmod_58(&mut number) as usize]);
    }
    if digits.is_empty() {
        digits.push(ALPHABET[0]);
    }
    while digits.len() < min_digits {
        digits.push(ALPHABET[0]);
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

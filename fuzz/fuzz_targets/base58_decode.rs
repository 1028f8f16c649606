#![no_main]

use libfuzzer_sys::fuzz_target;
use pathwire_core::base58::{decode_uint_bytes, encode_uint};

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = decode_uint_bytes(data) {
        assert_eq!(decode_uint_bytes(encode_uint(value).as_bytes()), Ok(value));
    }
});

use std::panic;

use bytes::Bytes;
use pathwire_codec::frame::decode_fields;
use pathwire_codec::message::MessageEnvelope;
use pathwire_core::base58::decode_uint_bytes;

fn xorshift64(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut s = seed.max(1);
    let mut out = vec![0_u8; len];
    for b in &mut out {
        *b = (xorshift64(&mut s) & 0xFF) as u8;
    }
    out
}

fn sample_message() -> MessageEnvelope {
    MessageEnvelope::with_timestamp(
        Bytes::from_static(b"\x00"),
        Bytes::from_static(b"fuzz-sender"),
        vec![
            Bytes::from_static(b"alpha"),
            Bytes::from(vec![0x5A_u8; 64]),
        ],
        1_234_567_890,
    )
}

#[test]
fn fuzz_like_random_inputs_do_not_panic_decoders() {
    for i in 0..2000_u64 {
        let len = ((i as usize) * 73) % 2048;
        let data = random_bytes(0xBAD5EED ^ i, len);

        let framed = panic::catch_unwind(|| decode_fields(&data, false));
        assert!(framed.is_ok(), "decode_fields panicked at case {i}");

        let sizeless = panic::catch_unwind(|| decode_fields(&data, true));
        assert!(sizeless.is_ok(), "sizeless decode_fields panicked at case {i}");

        let msg = panic::catch_unwind(|| MessageEnvelope::deserialize(&data, false));
        assert!(msg.is_ok(), "deserialize panicked at case {i}");

        let ts = panic::catch_unwind(|| decode_uint_bytes(&data));
        assert!(ts.is_ok(), "decode_uint_bytes panicked at case {i}");
    }
}

#[test]
fn fuzz_like_mutations_of_valid_vectors_do_not_panic() {
    let mut wire = sample_message()
        .serialize()
        .expect("message should serialize")
        .to_vec();

    for i in 0..512_usize {
        let idx = i % wire.len();
        wire[idx] ^= (i as u8).wrapping_mul(31).wrapping_add(1);
        let data = wire.clone();

        let full = panic::catch_unwind(|| MessageEnvelope::deserialize(&data, false));
        assert!(
            full.is_ok(),
            "deserialize panicked for mutated message at case {i}",
        );
        let sizeless = panic::catch_unwind(|| MessageEnvelope::deserialize(&data[4..], true));
        assert!(
            sizeless.is_ok(),
            "sizeless deserialize panicked for mutated message at case {i}",
        );
    }
}

#[test]
fn mutated_messages_are_never_accepted_with_altered_payload() {
    let original = sample_message();
    let wire = original.serialize().expect("message should serialize");

    for i in 0..wire.len() {
        let mut data = wire.to_vec();
        data[i] ^= 0x01;
        if let Ok(decoded) = MessageEnvelope::deserialize(&data, false) {
            // Only type/sender bytes are outside the id's coverage.
            assert_eq!(decoded.payload(), original.payload(), "case {i}");
            assert_eq!(decoded.timestamp(), original.timestamp(), "case {i}");
        }
    }
}

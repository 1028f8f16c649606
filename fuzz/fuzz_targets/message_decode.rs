#![no_main]

use libfuzzer_sys::fuzz_target;
use pathwire_codec::frame::decode_fields;
use pathwire_codec::MessageEnvelope;

fuzz_target!(|data: &[u8]| {
    let _ = decode_fields(data, false);
    let _ = decode_fields(data, true);
    if let Ok(msg) = MessageEnvelope::deserialize(data, false) {
        // The timestamp may be spelled with leading zero digits, so compare
        // decoded envelopes rather than bytes.
        let wire = msg.serialize().expect("accepted message should re-encode");
        let again = MessageEnvelope::deserialize(&wire, false)
            .expect("re-encoded message should verify");
        assert_eq!(again, msg);
    }
    let _ = MessageEnvelope::deserialize(data, true);
});

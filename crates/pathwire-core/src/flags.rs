//! Protocol-defined single-byte flags.
//!
//! Main flags route a message; sub-flags select the action inside it. The two
//! tables overlap on purpose (`BROADCAST`/`WHISPER` appear in both), and
//! compression method ids share the reserved range with sub-flags.

/// Upper bound (exclusive) of the reserved flag range.
pub const RESERVED_END: u8 = 0x30;

// Main flags.
pub const BROADCAST: u8 = 0x00;
pub const RENEGOTIATE: u8 = 0x01;
pub const WHISPER: u8 = 0x02;
pub const PING: u8 = 0x03;
pub const PONG: u8 = 0x04;

// Sub-flags.
pub const COMPRESSION: u8 = 0x01;
pub const HANDSHAKE: u8 = 0x05;
pub const NOTIFY: u8 = 0x06;
pub const PEERS: u8 = 0x07;
pub const REQUEST: u8 = 0x08;
pub const RESEND: u8 = 0x09;
pub const RESPONSE: u8 = 0x0A;
pub const STORE: u8 = 0x0B;
pub const RETRIEVE: u8 = 0x0C;
pub const RETRIEVED: u8 = 0x0D;
pub const FORWARD: u8 = 0x0E;
pub const NEW_PATHS: u8 = 0x0F;
pub const REVOKE_PATHS: u8 = 0x10;
pub const DELTA: u8 = 0x11;

// Compression method ids.
pub const BZ2: u8 = 0x10;
pub const GZIP: u8 = 0x11;
pub const LZMA: u8 = 0x12;
pub const ZLIB: u8 = 0x13;
pub const BWTC: u8 = 0x14;
pub const CONTEXT1: u8 = 0x15;
pub const DEFSUM: u8 = 0x16;
pub const DMC: u8 = 0x17;
pub const FENWICK: u8 = 0x18;
pub const HUFFMAN: u8 = 0x19;
pub const LZJB: u8 = 0x1A;
pub const LZJBR: u8 = 0x1B;
pub const LZP3: u8 = 0x1C;
pub const MTF: u8 = 0x1D;
pub const PPMD: u8 = 0x1E;
pub const SIMPLE: u8 = 0x1F;
pub const SNAPPY: u8 = 0x20;

/// Every declared compression method id with its canonical name.
pub const COMPRESSION_METHODS: [(u8, &str); 17] = [
    (BZ2, "bz2"),
    (GZIP, "gzip"),
    (LZMA, "lzma"),
    (ZLIB, "zlib"),
    (BWTC, "bwtc"),
    (CONTEXT1, "context1"),
    (DEFSUM, "defsum"),
    (DMC, "dmc"),
    (FENWICK, "fenwick"),
    (HUFFMAN, "huffman"),
    (LZJB, "lzjb"),
    (LZJBR, "lzjbr"),
    (LZP3, "lzp3"),
    (MTF, "mtf"),
    (PPMD, "ppmd"),
    (SIMPLE, "simple"),
    (SNAPPY, "snappy"),
];

/// Returns true for flags inside the protocol-reserved range.
pub fn is_reserved(flag: u8) -> bool {
    flag < RESERVED_END
}

/// Looks up the canonical name of a compression method id.
pub fn compression_name(method: u8) -> Option<&'static str> {
    COMPRESSION_METHODS
        .iter()
        .find(|(id, _)| *id == method)
        .map(|(_, name)| *name)
}

/// Reverse of [`compression_name`].
pub fn compression_method(name: &str) -> Option<u8> {
    COMPRESSION_METHODS
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::{
        compression_method, compression_name, is_reserved, COMPRESSION_METHODS, GZIP, SNAPPY,
    };

    #[test]
    fn compression_ids_are_unique() {
        for (i, (a, _)) in COMPRESSION_METHODS.iter().enumerate() {
            for (b, _) in &COMPRESSION_METHODS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn compression_lookup_round_trips() {
        assert_eq!(compression_name(GZIP), Some("gzip"));
        assert_eq!(compression_method("GZIP"), Some(GZIP));
        assert_eq!(compression_name(0x7F), None);
        assert_eq!(compression_method("brotli"), None);
    }

    #[test]
    fn reserved_range_covers_protocol_flags_only() {
        assert!(is_reserved(0x00));
        assert!(is_reserved(SNAPPY));
        assert!(!is_reserved(0x30));
        assert!(!is_reserved(0xFF));
    }
}

use crate::{
    base58::{encode_bytes, encode_uint},
    hash::{sha256_parts, sha384_parts},
    types::ProtocolVersion,
};

/// Derives a message id:
/// `base58(SHA-384(payload[0] || .. || payload[n] || base58(timestamp)))`.
///
/// Fields are joined without separators, so only the payload bytes and the
/// timestamp matter; message type and sender are not covered.
pub fn message_id<P: AsRef<[u8]>>(payload: &[P], timestamp: u64) -> String {
    let time_58 = encode_uint(timestamp);
    let digest = sha384_parts(
        payload
            .iter()
            .map(AsRef::<[u8]>::as_ref)
            .chain(std::iter::once(time_58.as_bytes())),
    );
    encode_bytes(&digest, 1)
}

/// Derives a subnet id:
/// `base58(SHA-256(subnet || encryption || "{major}.{minor}"))`.
pub fn subnet_id(subnet: &str, encryption: &str, version: ProtocolVersion) -> String {
    let info = version.protocol_string();
    let digest = sha256_parts([subnet.as_bytes(), encryption.as_bytes(), info.as_bytes()]);
    encode_bytes(&digest, 1)
}

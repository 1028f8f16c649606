use sha2::{Digest, Sha256, Sha384};

/// Computes SHA-256 and returns the 32-byte digest value.
pub fn sha256_32(input: &[u8]) -> [u8; 32] {
    sha256_parts([input])
}

/// Computes SHA-256 over the concatenation of `parts` without joining them first.
pub fn sha256_parts<I, P>(parts: I) -> [u8; 32]
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    let bytes = hasher.finalize();
    let mut out = [0_u8; 32];
    out.copy_from_slice(&bytes);
    out
}

/// Computes SHA-384 and returns the 48-byte digest value.
pub fn sha384_48(input: &[u8]) -> [u8; 48] {
    sha384_parts([input])
}

/// Computes SHA-384 over the concatenation of `parts` without joining them first.
pub fn sha384_parts<I, P>(parts: I) -> [u8; 48]
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let mut hasher = Sha384::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    let bytes = hasher.finalize();
    let mut out = [0_u8; 48];
    out.copy_from_slice(&bytes);
    out
}

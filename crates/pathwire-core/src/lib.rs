//! Core pathwire primitives shared across crates.
//!
//! Includes base-58 conversion, big-endian packing, digest helpers,
//! message/subnet identity derivation, protocol flags, and base errors.

pub mod base58;
pub mod error;
pub mod flags;
pub mod hash;
pub mod identity;
pub mod pack;
pub mod types;

pub use types::{
    ProtocolVersion, NODE_POLICY_VERSION, PROTOCOL_MAJOR_VERSION, PROTOCOL_MINOR_VERSION,
};

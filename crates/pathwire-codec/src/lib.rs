//! pathwire message codec.
//!
//! Defines the length-prefixed frame layout, the self-verifying message
//! envelope, subnet identifiers, and the decompression hook applied before
//! frames are parsed.

pub mod compression;
pub mod config;
pub mod error;
pub mod frame;
pub mod message;
pub mod subnet;

pub use compression::{Decompress, Identity};
pub use error::{DecodeError, FrameError};
pub use message::MessageEnvelope;
pub use subnet::Subnet;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol major version. Peers with a different major/minor pair form a
/// different subnet.
pub const PROTOCOL_MAJOR_VERSION: u32 = 0;
/// Protocol minor version.
pub const PROTOCOL_MINOR_VERSION: u32 = 4;
/// Node policy (build) version. Not part of the subnet digest.
pub const NODE_POLICY_VERSION: u32 = 319;

/// Protocol version triple baked into subnet identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolVersion {
    pub major: u32,
    pub minor: u32,
    #[serde(default)]
    pub node: u32,
}

impl ProtocolVersion {
    /// Version this build speaks.
    pub const CURRENT: Self = Self {
        major: PROTOCOL_MAJOR_VERSION,
        minor: PROTOCOL_MINOR_VERSION,
        node: NODE_POLICY_VERSION,
    };

    pub const fn new(major: u32, minor: u32, node: u32) -> Self {
        Self { major, minor, node }
    }

    /// `"{major}.{minor}"`, the wire-compatibility part of the version.
    pub fn protocol_string(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Whether two versions can share a subnet (node policy is ignored).
    pub fn is_wire_compatible(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.node)
    }
}

use std::sync::OnceLock;

use pathwire_core::identity::subnet_id;
use pathwire_core::types::ProtocolVersion;

/// A named network partition. Peers only talk to peers with the same id.
#[derive(Debug, Clone)]
pub struct Subnet {
    subnet: String,
    encryption: String,
    version: ProtocolVersion,
    id: OnceLock<String>,
}

impl Subnet {
    /// Subnet bound to the protocol version this build speaks.
    pub fn new(subnet: impl Into<String>, encryption: impl Into<String>) -> Self {
        Self::with_version(subnet, encryption, ProtocolVersion::CURRENT)
    }

    pub fn with_version(
        subnet: impl Into<String>,
        encryption: impl Into<String>,
        version: ProtocolVersion,
    ) -> Self {
        Self {
            subnet: subnet.into(),
            encryption: encryption.into(),
            version,
            id: OnceLock::new(),
        }
    }

    pub fn subnet(&self) -> &str {
        &self.subnet
    }

    pub fn encryption(&self) -> &str {
        &self.encryption
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Base-58 subnet id, computed on first access.
    pub fn id(&self) -> &str {
        self.id
            .get_or_init(|| subnet_id(&self.subnet, &self.encryption, self.version))
    }

    /// Whether peers on `other` can interoperate with peers on this subnet.
    pub fn is_compatible(&self, other: &Subnet) -> bool {
        self.id() == other.id()
    }
}

impl PartialEq for Subnet {
    fn eq(&self, other: &Self) -> bool {
        self.subnet == other.subnet
            && self.encryption == other.encryption
            && self.version == other.version
    }
}

impl Eq for Subnet {}

#[cfg(test)]
mod tests {
    use super::Subnet;
    use pathwire_core::identity::subnet_id;
    use pathwire_core::types::ProtocolVersion;

    #[test]
    fn id_matches_core_derivation() {
        let subnet = Subnet::new("mainnet", "Plaintext");
        assert_eq!(
            subnet.id(),
            subnet_id("mainnet", "Plaintext", ProtocolVersion::CURRENT)
        );
        assert_eq!(subnet.id(), "Cjqjyf11HsSXPx5BFf9rcvRWhYzvzSpZCro52qU4Qpna");
    }

    #[test]
    fn id_is_memoized() {
        let subnet = Subnet::new("mainnet", "SSL");
        assert!(std::ptr::eq(subnet.id(), subnet.id()));
    }

    #[test]
    fn minor_version_changes_id() {
        let a = Subnet::with_version("mainnet", "Plaintext", ProtocolVersion::new(0, 4, 319));
        let b = Subnet::with_version("mainnet", "Plaintext", ProtocolVersion::new(0, 5, 319));
        assert_ne!(a.id(), b.id());
        assert!(!a.is_compatible(&b));
    }

    #[test]
    fn node_policy_version_does_not_partition() {
        let a = Subnet::with_version("mainnet", "Plaintext", ProtocolVersion::new(0, 4, 1));
        let b = Subnet::with_version("mainnet", "Plaintext", ProtocolVersion::new(0, 4, 2));
        assert!(a.is_compatible(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn encryption_changes_id() {
        let plain = Subnet::new("mainnet", "Plaintext");
        let ssl = Subnet::new("mainnet", "SSL");
        assert!(!plain.is_compatible(&ssl));
        assert_eq!(ssl.encryption(), "SSL");
        assert_eq!(ssl.subnet(), "mainnet");
    }
}

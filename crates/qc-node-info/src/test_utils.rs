//! Test utilities for node info.
//!
//! Descriptor fixtures for handshake tests in dependent crates.
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use qc_node_info::test_utils::descriptor;
//!
//! let a = descriptor(1, "1.2.3", "devnet", &[0x20]);
//! let b = descriptor(2, "1.2.9", "devnet", &[0x20, 0x21]);
//! assert!(a.compatible_with(&b).is_ok());
//! ```

use crate::domain::{IdentityKey, PeerDescriptor};

/// Descriptor with a 32-byte key filled with `key`, listening on
/// `127.0.0.1:(26656 + key)`.
pub fn descriptor(key: u8, version: &str, network: &str, channels: &[u8]) -> PeerDescriptor {
    PeerDescriptor::builder(IdentityKey::new(vec![key; 32]))
        .moniker(format!("test-node-{key}"))
        .network(network)
        .listen_address(format!("127.0.0.1:{}", 26656 + u16::from(key)))
        .version(version)
        .channels(channels.iter().copied())
        .build()
}

/// Descriptor with an empty channel set (accepts any peer channels).
pub fn wildcard_descriptor(key: u8, version: &str, network: &str) -> PeerDescriptor {
    descriptor(key, version, network, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_listen_port_follows_key() {
        let info = descriptor(4, "1.0.0", "devnet", &[1]);
        assert_eq!(info.listen_port(), 26660);
        assert_eq!(info.listen_host(), "127.0.0.1");
    }

    #[test]
    fn test_wildcard_has_no_channels() {
        assert!(wildcard_descriptor(1, "1.0.0", "devnet").channels().is_empty());
    }
}

//! # Driving Ports (Inbound API)
//!
//! The only boundary the handshake/transport layer calls into.

use crate::domain::{CompatibilityError, PeerDescriptor};

/// Admission gate run once per handshake attempt.
///
/// Implementations hold the local descriptor and are shared across
/// concurrent connection tasks, hence `Send + Sync` and `&self` methods.
///
/// # Example
///
/// ```rust
/// use qc_node_info::{HandshakeGate, IdentityKey, NodeInfoService, PeerDescriptor};
///
/// let local = PeerDescriptor::builder(IdentityKey::new(vec![1; 32]))
///     .network("quantum-chain-1")
///     .version("1.2.3")
///     .channels([0x20u8])
///     .build();
/// let remote = PeerDescriptor::builder(IdentityKey::new(vec![2; 32]))
///     .network("quantum-chain-1")
///     .version("1.2.7")
///     .channels([0x20u8, 0x21])
///     .build();
///
/// let gate = NodeInfoService::new(local);
/// assert!(gate.check_peer(&remote).is_ok());
/// ```
pub trait HandshakeGate: Send + Sync {
    /// Our own descriptor, sent to every peer.
    fn local_descriptor(&self) -> &PeerDescriptor;

    /// Check the peer's descriptor with us as the local side.
    ///
    /// Any error means: abort the handshake and close the connection.
    /// `CompatibilityError::is_local_fault` errors are fatal for the node.
    fn check_peer(&self, remote: &PeerDescriptor) -> Result<(), CompatibilityError>;

    /// Check both directions: ours against theirs, then theirs against ours.
    ///
    /// Stricter than `check_peer` when either side uses an empty
    /// (wildcard) channel set.
    fn check_mutual(&self, remote: &PeerDescriptor) -> Result<(), CompatibilityError>;
}

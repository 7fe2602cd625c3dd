use crate::domain::{IdentityKey, PeerDescriptor};
use crate::ports::ConfigProvider;

/// Node Info Service implementing the driving port.
///
/// Stateless apart from the immutable local descriptor, so one instance can
/// be shared (e.g. behind an `Arc`) by every connection task.
///
/// # Example
///
/// ```rust,ignore
/// use qc_node_info::{HandshakeGate, IdentityKey, NodeInfoService, StaticConfigProvider};
///
/// let provider = StaticConfigProvider::new();
/// let service = NodeInfoService::from_config(&provider, IdentityKey::new(vec![1; 32]));
///
/// if let Err(e) = service.check_peer(&remote) {
///     // close the connection
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NodeInfoService {
    /// Our descriptor (domain layer)
    pub(crate) local: PeerDescriptor,
}

impl NodeInfoService {
    /// Create a service around an already built local descriptor.
    pub fn new(local: PeerDescriptor) -> Self {
        Self { local }
    }

    /// Build the local descriptor from configuration and the node identity.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C, identity_key: IdentityKey) -> Self {
        Self::new(config.node_config().into_descriptor(identity_key))
    }
}

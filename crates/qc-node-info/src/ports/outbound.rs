//! # Driven Ports (Outbound SPI)
//!
//! Interfaces this crate expects the host application to provide.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ChannelId, IdentityKey, PeerDescriptor};

/// Wire codec for peer descriptors.
///
/// # Contract
///
/// Implementations must preserve the descriptor field names and must reject
/// encodings larger than [`MAX_NODE_INFO_SIZE`](crate::domain::MAX_NODE_INFO_SIZE)
/// in both directions.
pub trait DescriptorCodec: Send + Sync {
    /// Encode a descriptor for the handshake message.
    fn encode(&self, descriptor: &PeerDescriptor) -> Result<Vec<u8>, CodecError>;

    /// Decode a descriptor received from a peer.
    fn decode(&self, bytes: &[u8]) -> Result<PeerDescriptor, CodecError>;
}

/// Errors from descriptor encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Encoded descriptor exceeds the size ceiling
    #[error("descriptor too large: {size} bytes exceeds {max}")]
    TooLarge { size: usize, max: usize },

    #[error("failed to encode descriptor: {0}")]
    Encode(String),

    #[error("failed to decode descriptor: {0}")]
    Decode(String),
}

/// Source of the local node's descriptor settings.
pub trait ConfigProvider {
    /// Node settings used to build the local descriptor at startup.
    fn node_config(&self) -> NodeInfoConfig;
}

/// Settings for the local descriptor (everything except the identity key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInfoConfig {
    /// Display label
    pub moniker: String,
    /// Network/chain identifier
    pub network: String,
    /// Address to advertise for inbound connections
    pub listen_address: String,
    /// Software version, `major.minor.patch`
    pub version: String,
    /// Supported channels; empty accepts any peer channel set
    pub channels: Vec<ChannelId>,
    /// Application-specific extension data
    pub other: Vec<String>,
}

impl Default for NodeInfoConfig {
    fn default() -> Self {
        Self {
            moniker: "anonymous".to_string(),
            network: "quantum-chain".to_string(),
            listen_address: "0.0.0.0:26656".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            channels: Vec::new(),
            other: Vec::new(),
        }
    }
}

impl NodeInfoConfig {
    /// Build the local descriptor. The remote address is left empty; the
    /// peer fills it in from what it observes.
    pub fn into_descriptor(self, identity_key: IdentityKey) -> PeerDescriptor {
        PeerDescriptor::builder(identity_key)
            .moniker(self.moniker)
            .network(self.network)
            .listen_address(self.listen_address)
            .version(self.version)
            .channels(self.channels)
            .other(self.other)
            .build()
    }
}

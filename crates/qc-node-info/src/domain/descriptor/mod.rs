//! # Peer Descriptor
//!
//! The identity and capability record a node discloses during the handshake.
//!
//! ## Wire Contract
//!
//! Field names are fixed: `identityKey`, `moniker`, `network`,
//! `remoteAddress`, `listenAddress`, `version`, `channels`, `other`.
//! Encoded size must stay within [`MAX_NODE_INFO_SIZE`](crate::domain::MAX_NODE_INFO_SIZE).
//!
//! ## Lifecycle
//!
//! One local descriptor is built at startup from config and the identity key.
//! One remote descriptor arrives per handshake attempt and is dropped after
//! the decision. Descriptors are never mutated after construction.

mod channel;
mod identity;
mod listen;
mod record;

pub use channel::{format_channels, ChannelId};
pub use identity::IdentityKey;
pub use record::{PeerDescriptor, PeerDescriptorBuilder};

//! # Node Info & Handshake Compatibility
//!
//! Peer descriptors exchanged during the Quantum-Chain handshake, and the
//! deterministic check deciding whether a peer may proceed to a session.
//!
//! ## Lean Core
//!
//! The core library (domain, ports, service) depends only on serde,
//! thiserror, tracing and hex. Wire and config adapters are feature-gated:
//!
//! - `json` - Size-bounded JSON descriptor codec (serde_json)
//! - `config` - TOML node configuration (toml)
//! - `test-utils` - Descriptor fixtures
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** Descriptor, version parsing, compatibility rules
//! - **Ports Layer:** `HandshakeGate` (inbound), codec/config (outbound)
//! - **Service Layer:** `NodeInfoService`, wires domain to ports with logging
//! - **Adapters Layer:** Concrete codec and config implementations
//!
//! ## Example
//!
//! ```rust
//! use qc_node_info::{CompatibilityError, IdentityKey, PeerDescriptor};
//!
//! let local = PeerDescriptor::builder(IdentityKey::new(vec![1; 32]))
//!     .moniker("validator-0")
//!     .network("quantum-chain-1")
//!     .listen_address("10.0.0.1:26656")
//!     .version("1.2.3")
//!     .channels([1u8, 2, 3])
//!     .build();
//!
//! let remote = PeerDescriptor::builder(IdentityKey::new(vec![2; 32]))
//!     .network("quantum-chain-1")
//!     .version("1.2.9")
//!     .channels([4u8, 5, 6])
//!     .build();
//!
//! assert!(matches!(
//!     local.compatible_with(&remote),
//!     Err(CompatibilityError::NoCommonChannels { .. })
//! ));
//! assert_eq!(local.listen_port(), 26656);
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// ADAPTERS
// =============================================================================

/// Adapters for external integrations.
/// `StaticConfigProvider` is always available; the rest are feature-gated.
pub mod adapters;

/// Descriptor fixtures.
/// Requires feature: `test-utils`
#[cfg(feature = "test-utils")]
pub mod test_utils;

// =============================================================================
// CORE RE-EXPORTS (Always Available)
// =============================================================================

// Domain entities
pub use domain::{
    format_channels, split_host_port, AddressError, ChannelId, CompatibilityError,
    DescriptorSide, IdentityKey, PeerDescriptor, PeerDescriptorBuilder, ProtocolVersion,
    RejectReason, VersionError, MAX_NODE_INFO_SIZE,
};

// Domain services
pub use domain::check_compatibility;

// Port traits
pub use ports::{CodecError, ConfigProvider, DescriptorCodec, HandshakeGate, NodeInfoConfig};

// Service
pub use service::NodeInfoService;

// =============================================================================
// ADAPTER RE-EXPORTS (Feature-Gated)
// =============================================================================

pub use adapters::StaticConfigProvider;

#[cfg(feature = "config")]
pub use adapters::{ConfigError, TomlConfigProvider};

#[cfg(feature = "json")]
pub use adapters::JsonDescriptorCodec;

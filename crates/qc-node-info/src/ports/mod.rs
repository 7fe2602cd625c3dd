//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** the handshake gate the transport layer calls
//! - **Driven Ports (Outbound):** descriptor codec and node configuration

pub mod inbound;
pub mod outbound;

pub use inbound::HandshakeGate;
pub use outbound::{CodecError, ConfigProvider, DescriptorCodec, NodeInfoConfig};

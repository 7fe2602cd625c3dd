//! # Node Info Service
//!
//! High-level service implementing the `HandshakeGate` port.
//!
//! Holds the local descriptor built at startup and evaluates every peer
//! descriptor against it, logging each decision.

// Semantic submodules
mod api;
mod core;

// Re-export public API
pub use self::core::NodeInfoService;

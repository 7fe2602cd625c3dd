//! Domain Layer - Pure handshake logic with no I/O
//!
//! This module contains the node-info admission rules:
//! - Peer descriptor (identity and capability record)
//! - `major.minor.patch` version parsing
//! - Listen address splitting (`host:port`, `[v6]:port`)
//! - Compatibility check run on every handshake attempt

pub mod address;
pub mod compatibility;
pub mod descriptor;
pub mod errors;
pub mod version;

pub use address::*;
pub use compatibility::*;
pub use descriptor::*;
pub use errors::*;
pub use version::*;

/// Upper bound for an encoded peer descriptor (10 KiB).
///
/// Codecs reject anything larger before decoding. The transport layer closes
/// the connection on violation.
pub const MAX_NODE_INFO_SIZE: usize = 10_240;

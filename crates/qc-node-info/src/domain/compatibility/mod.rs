//! # Handshake Compatibility
//!
//! Decides whether a peer's descriptor may proceed to a session.
//!
//! ## Algorithm (short-circuits on first failure)
//!
//! 1. Local version parses (else local misconfiguration)
//! 2. Remote version parses
//! 3. Major versions match
//! 4. Minor versions match (patch never compared)
//! 5. Networks match exactly
//! 6. Empty local channel set accepts anything
//! 7. Otherwise the channel sets must intersect
//!
//! ## Direction
//!
//! The relation is not symmetric. Step 6 only looks at the local side, so
//! `check_compatibility(a, b)` can pass while `check_compatibility(b, a)` fails.
//! Run both directions (see `HandshakeGate::check_mutual`) when both ends
//! must agree.

mod security;

pub use security::check_compatibility;

use super::descriptor::PeerDescriptor;
use super::errors::CompatibilityError;

impl PeerDescriptor {
    /// Check whether `other` is compatible with `self` as the local side.
    pub fn compatible_with(&self, other: &PeerDescriptor) -> Result<(), CompatibilityError> {
        check_compatibility(self, other)
    }
}

//! Compatibility verification (security-critical).
//!
//! SECURITY-CRITICAL: This is the admission gate for every handshake.
//! Isolate for security audits.

use std::collections::HashSet;

use crate::domain::descriptor::{ChannelId, PeerDescriptor};
use crate::domain::errors::{CompatibilityError, DescriptorSide};
use crate::domain::version::ProtocolVersion;

/// Verify a peer's descriptor against our own.
///
/// # Security
/// Keeps inconsistent nodes out of the overlay:
/// - Wrong protocol major/minor version
/// - Wrong network/chain
/// - No shared message channel
///
/// Pure function of its inputs; safe to call concurrently from any number of
/// handshake tasks.
///
/// # Errors
/// The first failing rule, in this order: local version format, remote
/// version format, major, minor, network, channels.
pub fn check_compatibility(
    local: &PeerDescriptor,
    remote: &PeerDescriptor,
) -> Result<(), CompatibilityError> {
    let ours = parse_version(local, DescriptorSide::Local)?;
    let theirs = parse_version(remote, DescriptorSide::Remote)?;

    if ours.major() != theirs.major() {
        return Err(CompatibilityError::MajorVersionMismatch {
            got: theirs.major().to_string(),
            expected: ours.major().to_string(),
        });
    }

    if ours.minor() != theirs.minor() {
        return Err(CompatibilityError::MinorVersionMismatch {
            got: theirs.minor().to_string(),
            expected: ours.minor().to_string(),
        });
    }

    if local.network() != remote.network() {
        return Err(CompatibilityError::NetworkMismatch {
            got: remote.network().to_string(),
            expected: local.network().to_string(),
        });
    }

    // No local channels: wildcard descriptor (tests, channel-agnostic nodes)
    if local.channels().is_empty() {
        return Ok(());
    }

    let theirs: HashSet<ChannelId> = remote.channels().iter().copied().collect();
    if local.channels().iter().any(|ch| theirs.contains(ch)) {
        return Ok(());
    }

    Err(CompatibilityError::NoCommonChannels {
        local: local.channels().to_vec(),
        remote: remote.channels().to_vec(),
    })
}

fn parse_version(
    descriptor: &PeerDescriptor,
    side: DescriptorSide,
) -> Result<ProtocolVersion, CompatibilityError> {
    descriptor
        .protocol_version()
        .map_err(|source| CompatibilityError::VersionFormat { side, source })
}

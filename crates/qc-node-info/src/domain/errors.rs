//! Domain Errors for Node Info
//!
//! Every variant carries the offending values so the handshake layer can log
//! them before closing the connection.

use std::fmt;

use thiserror::Error;

use super::descriptor::{format_channels, ChannelId};

/// Which descriptor of a handshake pair an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorSide {
    /// Our own descriptor (built from local config)
    Local,
    /// The descriptor disclosed by the peer
    Remote,
}

impl fmt::Display for DescriptorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Malformed `major.minor.patch` version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Not exactly three dot-separated components
    #[error("Invalid version format {version}: expected major.minor.patch, found {found} components")]
    ComponentCount { version: String, found: usize },

    /// One of the three components is empty (e.g. `"1..3"`)
    #[error("Invalid version format {version}: empty component")]
    EmptyComponent { version: String },
}

impl VersionError {
    /// The rejected version string.
    pub fn version(&self) -> &str {
        match self {
            Self::ComponentCount { version, .. } | Self::EmptyComponent { version } => version,
        }
    }
}

/// Reasons a peer descriptor fails the compatibility check.
///
/// All variants are terminal for the current handshake attempt: the check is
/// a pure function of two static records, so retrying cannot change it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompatibilityError {
    /// Version string is not `major.minor.patch`.
    ///
    /// With `side == Local` this is our own misconfiguration, not the peer's.
    #[error("Invalid {side} version: {source}")]
    VersionFormat {
        side: DescriptorSide,
        source: VersionError,
    },

    /// Major version differs
    #[error("Peer is on a different major version. Got {got}, expected {expected}")]
    MajorVersionMismatch { got: String, expected: String },

    /// Minor version differs (patch is never compared)
    #[error("Peer is on a different minor version. Got {got}, expected {expected}")]
    MinorVersionMismatch { got: String, expected: String },

    /// Network/chain identifier differs
    #[error("Peer is on a different network. Got {got}, expected {expected}")]
    NetworkMismatch { got: String, expected: String },

    /// Channel sets are disjoint
    #[error(
        "Peer has no common channels. Our channels: {}; Peer channels: {}",
        format_channels(.local),
        format_channels(.remote)
    )]
    NoCommonChannels {
        local: Vec<ChannelId>,
        remote: Vec<ChannelId>,
    },
}

impl CompatibilityError {
    /// True when the failure comes from our own descriptor.
    ///
    /// Callers treat this as fatal instead of blaming the peer.
    pub fn is_local_fault(&self) -> bool {
        matches!(
            self,
            Self::VersionFormat {
                side: DescriptorSide::Local,
                ..
            }
        )
    }

    /// Same failure seen from the other descriptor's side.
    ///
    /// Turns an error from `check_compatibility(remote, local)` into one that
    /// reads from our perspective: sides, `got`/`expected` and channel lists
    /// are swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::VersionFormat { side, source } => Self::VersionFormat {
                side: match side {
                    DescriptorSide::Local => DescriptorSide::Remote,
                    DescriptorSide::Remote => DescriptorSide::Local,
                },
                source,
            },
            Self::MajorVersionMismatch { got, expected } => Self::MajorVersionMismatch {
                got: expected,
                expected: got,
            },
            Self::MinorVersionMismatch { got, expected } => Self::MinorVersionMismatch {
                got: expected,
                expected: got,
            },
            Self::NetworkMismatch { got, expected } => Self::NetworkMismatch {
                got: expected,
                expected: got,
            },
            Self::NoCommonChannels { local, remote } => Self::NoCommonChannels {
                local: remote,
                remote: local,
            },
        }
    }

    /// Coarse reason for peer bookkeeping and metrics labels.
    pub fn reject_reason(&self) -> RejectReason {
        match self {
            Self::VersionFormat {
                side: DescriptorSide::Local,
                ..
            } => RejectReason::LocalMisconfigured,
            Self::VersionFormat { .. } => RejectReason::MalformedVersion,
            Self::MajorVersionMismatch { .. } | Self::MinorVersionMismatch { .. } => {
                RejectReason::ProtocolMismatch
            }
            Self::NetworkMismatch { .. } => RejectReason::WrongNetwork,
            Self::NoCommonChannels { .. } => RejectReason::NoCommonChannels,
        }
    }
}

/// Reasons for rejecting a handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Our own version string is malformed
    LocalMisconfigured,
    /// Peer's version string is malformed
    MalformedVersion,
    /// Major or minor version incompatible
    ProtocolMismatch,
    /// Different network/chain identifier
    WrongNetwork,
    /// No shared message channel
    NoCommonChannels,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalMisconfigured => write!(f, "local misconfiguration"),
            Self::MalformedVersion => write!(f, "malformed version"),
            Self::ProtocolMismatch => write!(f, "protocol mismatch"),
            Self::WrongNetwork => write!(f, "wrong network"),
            Self::NoCommonChannels => write!(f, "no common channels"),
        }
    }
}

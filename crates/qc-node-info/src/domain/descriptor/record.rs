//! Peer descriptor record and builder.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::channel::ChannelId;
use super::identity::IdentityKey;
use crate::domain::errors::VersionError;
use crate::domain::version::ProtocolVersion;

/// Identity and capability record exchanged during the handshake.
///
/// No validation happens at construction. The version string and channel
/// set are judged lazily by [`check_compatibility`](crate::domain::check_compatibility).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerDescriptor {
    /// Authenticated public key
    identity_key: IdentityKey,
    /// Arbitrary display label
    moniker: String,
    /// Network/chain identifier
    network: String,
    /// Address of the connection as observed by the peer
    remote_address: String,
    /// `host:port` accepting inbound connections
    listen_address: String,
    /// `major.minor.patch`
    version: String,
    /// Channels this node speaks; empty means "any"
    #[serde(default)]
    channels: Vec<ChannelId>,
    /// Application-specific extension data
    #[serde(default)]
    other: Vec<String>,
}

impl PeerDescriptor {
    /// Start building a descriptor for the given identity.
    pub fn builder(identity_key: IdentityKey) -> PeerDescriptorBuilder {
        PeerDescriptorBuilder::new(identity_key)
    }

    pub fn identity_key(&self) -> &IdentityKey {
        &self.identity_key
    }

    pub fn moniker(&self) -> &str {
        &self.moniker
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn remote_address(&self) -> &str {
        &self.remote_address
    }

    pub fn listen_address(&self) -> &str {
        &self.listen_address
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn channels(&self) -> &[ChannelId] {
        &self.channels
    }

    pub fn other(&self) -> &[String] {
        &self.other
    }

    /// Parse the version string.
    pub fn protocol_version(&self) -> Result<ProtocolVersion, VersionError> {
        ProtocolVersion::parse(&self.version)
    }

    /// Copy of this descriptor stamped with the address the connection was
    /// observed from.
    #[must_use]
    pub fn with_remote_address(&self, remote_address: impl Into<String>) -> Self {
        Self {
            remote_address: remote_address.into(),
            ..self.clone()
        }
    }

    /// Check if this node advertises a channel
    pub fn has_channel(&self, channel: ChannelId) -> bool {
        self.channels.contains(&channel)
    }

    /// Channels both descriptors advertise, sorted and de-duplicated.
    pub fn common_channels(&self, other: &PeerDescriptor) -> Vec<ChannelId> {
        let ours: BTreeSet<ChannelId> = self.channels.iter().copied().collect();
        other
            .channels
            .iter()
            .copied()
            .filter(|ch| ours.contains(ch))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Stable summary for logs. Field order is fixed; never parse it.
impl fmt::Display for PeerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PeerDescriptor{{key: {}, moniker: {}, network: {} [remote {}, listen {}], version: {} ([{}])}}",
            self.identity_key,
            self.moniker,
            self.network,
            self.remote_address,
            self.listen_address,
            self.version,
            self.other.join(", ")
        )
    }
}

/// Builder for [`PeerDescriptor`].
///
/// Unset string fields are empty and `channels`/`other` are empty lists.
#[derive(Debug, Clone)]
pub struct PeerDescriptorBuilder {
    inner: PeerDescriptor,
}

impl PeerDescriptorBuilder {
    fn new(identity_key: IdentityKey) -> Self {
        Self {
            inner: PeerDescriptor {
                identity_key,
                moniker: String::new(),
                network: String::new(),
                remote_address: String::new(),
                listen_address: String::new(),
                version: String::new(),
                channels: Vec::new(),
                other: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn moniker(mut self, moniker: impl Into<String>) -> Self {
        self.inner.moniker = moniker.into();
        self
    }

    #[must_use]
    pub fn network(mut self, network: impl Into<String>) -> Self {
        self.inner.network = network.into();
        self
    }

    #[must_use]
    pub fn remote_address(mut self, remote_address: impl Into<String>) -> Self {
        self.inner.remote_address = remote_address.into();
        self
    }

    #[must_use]
    pub fn listen_address(mut self, listen_address: impl Into<String>) -> Self {
        self.inner.listen_address = listen_address.into();
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.inner.version = version.into();
        self
    }

    #[must_use]
    pub fn channels<I, C>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChannelId>,
    {
        self.inner.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn other<I, S>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.other = other.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> PeerDescriptor {
        self.inner
    }
}

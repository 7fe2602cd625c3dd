//! Message channel identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application-level message channel (one byte on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub u8);

impl ChannelId {
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for ChannelId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render a channel list as `[1, 2, 3]` for logs and error messages.
pub fn format_channels(channels: &[ChannelId]) -> String {
    let inner: Vec<String> = channels.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}

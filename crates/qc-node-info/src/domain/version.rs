//! Protocol version parsing.
//!
//! Versions are `major.minor.patch`. Only major and minor gate a handshake;
//! patch releases are wire-compatible.

use std::fmt;
use std::str::FromStr;

use super::errors::VersionError;

/// Parsed `major.minor.patch` version.
///
/// Components stay strings and compare as strings, so `"01"` and `"1"` are
/// different majors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtocolVersion {
    major: String,
    minor: String,
    patch: String,
}

impl ProtocolVersion {
    /// Parse a version string into its three components.
    ///
    /// # Errors
    ///
    /// - `ComponentCount` unless there are exactly three dot-separated parts
    /// - `EmptyComponent` if any part is empty
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = version.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(VersionError::ComponentCount {
                version: version.to_string(),
                found: parts.len(),
            });
        };

        if major.is_empty() || minor.is_empty() || patch.is_empty() {
            return Err(VersionError::EmptyComponent {
                version: version.to_string(),
            });
        }

        Ok(Self {
            major: (*major).to_string(),
            minor: (*minor).to_string(),
            patch: (*patch).to_string(),
        })
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Same major and minor. Patch is ignored.
    pub fn is_wire_compatible(&self, other: &ProtocolVersion) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl FromStr for ProtocolVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

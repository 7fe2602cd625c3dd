//! Listen address accessors.
//!
//! `listen_host` / `listen_port` swallow parse failures into sentinels
//! (`""` and `-1`). Callers must read those as "unknown". The `try_` variants
//! return `None` instead and should be preferred in new code.

use super::record::PeerDescriptor;
use crate::domain::address::{split_host_port, AddressError};

impl PeerDescriptor {
    /// Split the listen address into `(host, port)` text.
    pub fn listen_addr(&self) -> Result<(String, String), AddressError> {
        split_host_port(self.listen_address())
            .map(|(host, port)| (host.to_string(), port.to_string()))
    }

    /// Host part of the listen address, or `None` if it cannot be split.
    ///
    /// An empty host (`":26656"`) means every interface and is returned as-is.
    pub fn try_listen_host(&self) -> Option<String> {
        self.listen_addr().ok().map(|(host, _)| host)
    }

    /// Numeric port of the listen address, or `None` if it cannot be split
    /// or is not a valid port number. Ports above 65535 count as invalid.
    pub fn try_listen_port(&self) -> Option<u16> {
        let (_, port) = split_host_port(self.listen_address()).ok()?;
        port.parse().ok()
    }

    /// Host part of the listen address; empty string when unknown.
    pub fn listen_host(&self) -> String {
        self.try_listen_host().unwrap_or_default()
    }

    /// Port of the listen address; `-1` when unknown.
    ///
    /// Unknown covers an unsplittable address, a non-numeric port, and a port
    /// outside `0..=65535` (`"host:70000"` gives `-1`).
    pub fn listen_port(&self) -> i32 {
        self.try_listen_port().map_or(-1, i32::from)
    }
}

//! Listen address splitting.
//!
//! Splits `host:port`, `[ipv6]:port` and `[ipv6%zone]:port` forms. The port
//! is returned as text; numeric parsing is left to the caller.

use thiserror::Error;

/// Failure to split an address into host and port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("missing port in address {0}")]
    MissingPort(String),

    #[error("missing ']' in address {0}")]
    MissingBracket(String),

    #[error("too many colons in address {0}")]
    TooManyColons(String),

    #[error("unexpected '[' in address {0}")]
    UnexpectedOpenBracket(String),

    #[error("unexpected ']' in address {0}")]
    UnexpectedCloseBracket(String),
}

/// Split `addr` into `(host, port)`.
///
/// IPv6 hosts must be bracketed; the brackets are stripped from the result.
/// An empty host (`":26656"`) or empty port (`"host:"`) is not an error here.
pub fn split_host_port(addr: &str) -> Result<(&str, &str), AddressError> {
    let colon = addr
        .rfind(':')
        .ok_or_else(|| AddressError::MissingPort(addr.to_string()))?;

    let (host, open_from, close_from) = if addr.starts_with('[') {
        let close = addr
            .find(']')
            .ok_or_else(|| AddressError::MissingBracket(addr.to_string()))?;

        let after = close + 1;
        if after == addr.len() {
            return Err(AddressError::MissingPort(addr.to_string()));
        }
        if after != colon {
            return Err(if addr.as_bytes()[after] == b':' {
                AddressError::TooManyColons(addr.to_string())
            } else {
                AddressError::MissingPort(addr.to_string())
            });
        }

        (&addr[1..close], 1, after)
    } else {
        let host = &addr[..colon];
        if host.contains(':') {
            return Err(AddressError::TooManyColons(addr.to_string()));
        }
        (host, 0, 0)
    };

    if addr[open_from..].contains('[') {
        return Err(AddressError::UnexpectedOpenBracket(addr.to_string()));
    }
    if addr[close_from..].contains(']') {
        return Err(AddressError::UnexpectedCloseBracket(addr.to_string()));
    }

    Ok((host, &addr[colon + 1..]))
}

use std::{fmt, net::SocketAddr};

const UNKNOWN: &str = "unknown";

/// Network address of the client as best it can be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddress(String);

impl ClientAddress {
    /// Prefers the first usable hop of `X-Forwarded-For` over the transport peer.
    ///
    /// Empty hops and the literal `unknown` (any case) are skipped. When
    /// nothing usable is present the address is `unknown`.
    pub fn resolve(forwarded_for: Option<&str>, peer: Option<SocketAddr>) -> Self {
        let forwarded = forwarded_for.and_then(|value| {
            value
                .split(',')
                .map(str::trim)
                .find(|hop| !hop.is_empty() && !hop.eq_ignore_ascii_case(UNKNOWN))
        });

        match (forwarded, peer) {
            (Some(forwarded), _) => Self(forwarded.to_string()),
            (None, Some(peer)) => Self(peer.ip().to_string()),
            (None, None) => Self(UNKNOWN.to_string()),
        }
    }
}

impl AsRef<str> for ClientAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

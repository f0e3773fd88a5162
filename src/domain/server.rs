//! Server records returned by the compute lookup.

use std::fmt;

use serde::Deserialize;

/// Which of a server's address lists a zone's settings select for SSH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Public,
    Private,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// Network addresses of a live server, as reported by the compute API.
///
/// Addresses are opaque strings here; the resolver never parses them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerRecord {
    pub public_ip_addresses: Vec<String>,
    pub private_ip_addresses: Vec<String>,
}

impl ServerRecord {
    /// The address list for `family`.
    #[must_use]
    pub fn addresses(&self, family: AddressFamily) -> &[String] {
        match family {
            AddressFamily::Public => &self.public_ip_addresses,
            AddressFamily::Private => &self.private_ip_addresses,
        }
    }

    /// First address of `family`, if the list is non-empty.
    ///
    /// The compute API documents no ordering for these lists, so "first" is
    /// whatever the API returned first; hosts that need a deterministic pick
    /// must order the record before resolution.
    #[must_use]
    pub fn first_address(&self, family: AddressFamily) -> Option<&str> {
        self.addresses(family).first().map(String::as_str)
    }
}

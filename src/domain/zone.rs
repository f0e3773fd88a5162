//! Per-zone resolution settings.

use serde::{Deserialize, Serialize};

use crate::domain::server::AddressFamily;

/// Settings scoped to a single zone, read once per resolution.
///
/// Hosts typically embed these in their own configuration files; both flags
/// default to `false` (dial the public address, no OS Login username).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Dial the server's private address instead of its public one.
    pub use_private_ip: bool,
    /// Resolve a POSIX username through the OS Login directory.
    pub use_os_login: bool,
}

impl ZoneConfig {
    /// The address family these settings select.
    #[must_use]
    pub fn address_family(self) -> AddressFamily {
        if self.use_private_ip {
            AddressFamily::Private
        } else {
            AddressFamily::Public
        }
    }
}

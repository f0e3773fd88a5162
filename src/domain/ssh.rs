//! The resolved SSH connection descriptor.

/// Port every resolved descriptor dials.
pub const SSH_PORT: u16 = 22;

/// Connection descriptor for opening an SSH session to a machine.
///
/// Only produced when the machine's server record exists and carries at
/// least one address of the zone-selected family. Treat as immutable once
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshInfo {
    /// Address to dial — the first entry of the selected address list.
    pub host: String,
    /// SSH port; the resolver always sets [`SSH_PORT`].
    pub port: u16,
    /// POSIX username from the OS Login directory, when the zone enables it.
    pub username: Option<String>,
}

impl SshInfo {
    /// Descriptor for `host` on the standard SSH port, with no username.
    #[must_use]
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_owned(),
            port: SSH_PORT,
            username: None,
        }
    }
}
